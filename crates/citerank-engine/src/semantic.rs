//! Semantic (dense cosine) scoring.
//!
//! Maps cosine similarity between the query embedding and each fact
//! embedding to `[0, 1]` via `(cos + 1) / 2`. Degradation is per fact:
//! a missing embedding, a dimension mismatch, or a zero-norm vector
//! gives that fact a sub-score of 0 and scoring continues for the
//! rest of the set.

use citerank_core::Fact;
use tracing::debug;

/// Cosine similarity between two vectors.
///
/// Returns `None` on length mismatch, empty vectors, or a zero norm —
/// the conditions under which cosine is undefined.
#[must_use]
pub fn cosine_similarity(left: &[f32], right: &[f32]) -> Option<f32> {
    if left.len() != right.len() || left.is_empty() {
        return None;
    }

    let mut dot = 0.0_f32;
    let mut left_norm_sq = 0.0_f32;
    let mut right_norm_sq = 0.0_f32;

    for (a, b) in left.iter().zip(right.iter()) {
        dot += a * b;
        left_norm_sq += a * a;
        right_norm_sq += b * b;
    }

    let denom = left_norm_sq.sqrt() * right_norm_sq.sqrt();
    if denom <= f32::EPSILON {
        return None;
    }

    Some((dot / denom).clamp(-1.0, 1.0))
}

/// Semantic sub-score of one fact against the query embedding, in `[0, 1]`.
#[must_use]
pub fn fact_score(query_embedding: &[f32], fact: &Fact) -> f64 {
    let Some(embedding) = fact.embedding.as_deref() else {
        debug!(fact_id = %fact.id, "fact has no embedding; semantic sub-score is 0");
        return 0.0;
    };

    cosine_similarity(query_embedding, embedding).map_or_else(
        || {
            debug!(
                fact_id = %fact.id,
                query_dim = query_embedding.len(),
                fact_dim = embedding.len(),
                "embedding unusable (dimension mismatch or zero norm); semantic sub-score is 0"
            );
            0.0
        },
        |cos| (f64::from(cos) + 1.0) / 2.0,
    )
}

/// Semantic sub-scores for every fact in the candidate set, in input order.
#[must_use]
pub fn score_facts(query_embedding: &[f32], facts: &[Fact]) -> Vec<f64> {
    facts
        .iter()
        .map(|fact| fact_score(query_embedding, fact))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

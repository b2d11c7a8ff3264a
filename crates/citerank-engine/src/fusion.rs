//! Fusion layer: normalization and weighted combination of the four
//! signals. This is the engine's sole orchestrator and public entry
//! point.
//!
//! The orchestrator degrades gracefully per signal:
//! - lexical runs only when query text yields at least one token
//! - semantic runs only when a query embedding is supplied
//! - authority and recency always run
//!
//! Inactive scorers contribute a sub-score of 0 *and* are excluded
//! from the weight renormalization, so absent query inputs shift
//! weight onto the remaining signals instead of dragging every score
//! toward zero.

use std::collections::HashMap;

use citerank_core::ConfigError;
use tracing::instrument;

use crate::authority::{AuthorityCache, CitationGraph, PageRankConfig, pagerank};
use crate::request::{ScoreResult, ScoringRequest};
use crate::{lexical, recency, semantic};

/// Min-max normalization to `[0, 1]` across one candidate set.
///
/// A singleton set, or a set where all raw values are equal, maps to
/// `1.0` for every member: "no discriminating signal" reads as fully
/// relevant, and there is no divide-by-zero.
#[must_use]
pub fn normalize_scores(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if !range.is_finite() || range.abs() <= f64::EPSILON {
        return vec![1.0; values.len()];
    }

    values
        .iter()
        .map(|&value| ((value - min) / range).clamp(0.0, 1.0))
        .collect()
}

/// Score a candidate set without any cross-request caching.
///
/// Returns one [`ScoreResult`] per input fact, keyed by fact ID. An
/// empty candidate set yields an empty map.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the request's configuration is
/// invalid; no scoring work happens in that case.
#[instrument(skip(request), fields(project = %request.project_scope, facts = request.facts.len()))]
pub fn score(request: &ScoringRequest) -> Result<HashMap<String, ScoreResult>, ConfigError> {
    score_inner(request, None)
}

/// Score a candidate set, reusing and refreshing `cache` for the
/// authority distribution.
///
/// The cached entry for `request.project_scope` is reused when its
/// `graph_version` matches and it covers the request's fact IDs
/// exactly; otherwise authority is recomputed and the entry replaced.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the request's configuration is
/// invalid; no scoring work happens in that case.
#[instrument(skip(request, cache), fields(project = %request.project_scope, facts = request.facts.len()))]
pub fn score_with_cache(
    request: &ScoringRequest,
    cache: &mut AuthorityCache,
) -> Result<HashMap<String, ScoreResult>, ConfigError> {
    score_inner(request, Some(cache))
}

fn score_inner(
    request: &ScoringRequest,
    cache: Option<&mut AuthorityCache>,
) -> Result<HashMap<String, ScoreResult>, ConfigError> {
    request.config.validate()?;

    let facts = &request.facts;
    if facts.is_empty() {
        return Ok(HashMap::new());
    }
    let n = facts.len();

    // Lexical: a query that tokenizes to nothing carries no lexical
    // information and deactivates the scorer just like an absent one.
    let query_tokens = request
        .query_text
        .as_deref()
        .map(lexical::tokenize)
        .filter(|tokens| !tokens.is_empty());
    let lexical_scores = query_tokens.as_ref().map_or_else(
        || vec![0.0; n],
        |tokens| normalize_scores(&lexical::score_facts(tokens, facts, request.config.bm25)),
    );
    let lexical_active = query_tokens.is_some();

    // Semantic.
    let semantic_scores = request
        .query_embedding
        .as_deref()
        .map_or_else(|| vec![0.0; n], |query| semantic::score_facts(query, facts));
    let semantic_active = request.query_embedding.is_some();

    // Authority: raw distribution (cached or recomputed), then
    // min-max normalized within the candidate set.
    let raw_authority = resolve_authority(request, cache);
    let raw_by_fact: Vec<f64> = facts
        .iter()
        .map(|fact| raw_authority.get(&fact.id).copied().unwrap_or(0.0))
        .collect();
    let authority_scores = normalize_scores(&raw_by_fact);

    // Recency.
    let recency_scores =
        recency::score_facts(facts, request.evaluation_time, request.config.half_life_days);

    // Weight renormalization over active scorers only. Authority and
    // recency are always active.
    let weights = request.config.weights;
    let mut active_weight = weights.gamma + weights.delta;
    if lexical_active {
        active_weight += weights.alpha;
    }
    if semantic_active {
        active_weight += weights.beta;
    }

    let mut results = HashMap::with_capacity(n);
    for (i, fact) in facts.iter().enumerate() {
        let final_score = if active_weight > 0.0 {
            let weighted = weights.alpha * lexical_scores[i]
                + weights.beta * semantic_scores[i]
                + weights.gamma * authority_scores[i]
                + weights.delta * recency_scores[i];
            (weighted / active_weight).clamp(0.0, 1.0)
        } else {
            // All active weights zeroed: no information, not an error.
            0.0
        };

        results.insert(
            fact.id.clone(),
            ScoreResult {
                fact_id: fact.id.clone(),
                final_score,
                lexical: lexical_scores[i],
                semantic: semantic_scores[i],
                authority: authority_scores[i],
                recency: recency_scores[i],
            },
        );
    }

    Ok(results)
}

fn resolve_authority(
    request: &ScoringRequest,
    cache: Option<&mut AuthorityCache>,
) -> HashMap<String, f64> {
    let compute = || {
        pagerank(
            &CitationGraph::from_facts(&request.facts),
            PageRankConfig::default(),
        )
        .scores
    };

    let Some(cache) = cache else {
        return compute();
    };

    let fact_ids: Vec<&str> = request.facts.iter().map(|fact| fact.id.as_str()).collect();
    if let Some(hit) = cache.get(&request.project_scope, request.graph_version, &fact_ids) {
        return hit.clone();
    }

    let scores = compute();
    cache.insert(
        request.project_scope.clone(),
        request.graph_version,
        scores.clone(),
    );
    scores
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

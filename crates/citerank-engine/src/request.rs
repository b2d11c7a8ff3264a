//! Request and result types for a single scoring invocation.
//!
//! Both types are immutable value objects created per request. The
//! engine never reads a wall clock: `evaluation_time` is supplied by
//! the caller so results are reproducible and testable.

use chrono::{DateTime, Utc};
use citerank_core::{Fact, ScoringConfig};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// One scoring invocation: a candidate set, an optional query, and
/// the configuration to score under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRequest {
    /// Which corpus the facts belong to. Used only as a cache key
    /// together with `graph_version`.
    pub project_scope: String,

    /// Caller-supplied monotonic token that must change whenever
    /// facts or citation edges in this project change. The engine
    /// trusts this token and never inspects storage itself.
    #[serde(default)]
    pub graph_version: u64,

    /// The candidate set to score. An empty set yields an empty
    /// result map, not an error.
    pub facts: Vec<Fact>,

    /// Optional query text; absence disables the lexical scorer for
    /// this call.
    #[serde(default)]
    pub query_text: Option<String>,

    /// Optional query embedding; absence disables the semantic scorer
    /// for this call. Independent of `query_text`.
    #[serde(default)]
    pub query_embedding: Option<Vec<f32>>,

    /// Weights, BM25 parameters, and recency half-life.
    #[serde(default)]
    pub config: ScoringConfig,

    /// The "now" instant recency is computed against.
    pub evaluation_time: DateTime<Utc>,
}

impl ScoringRequest {
    /// Create an empty request with default configuration and no query.
    #[must_use]
    pub fn new(project_scope: impl Into<String>, evaluation_time: DateTime<Utc>) -> Self {
        Self {
            project_scope: project_scope.into(),
            graph_version: 0,
            facts: Vec::new(),
            query_text: None,
            query_embedding: None,
            config: ScoringConfig::default(),
            evaluation_time,
        }
    }
}

/// Scored output for one fact, with the per-signal breakdown retained
/// for explainability. All scores lie in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// The fact this result belongs to.
    pub fact_id: String,
    /// Fused relevance score in `[0, 1]`.
    pub final_score: f64,
    /// Normalized BM25 sub-score. 0 when the lexical scorer is inactive.
    pub lexical: f64,
    /// Cosine sub-score mapped to `[0, 1]`. 0 when inactive or degraded.
    pub semantic: f64,
    /// Min-max-normalized citation PageRank sub-score.
    pub authority: f64,
    /// Half-life decay sub-score.
    pub recency: f64,
}

impl ScoreResult {
    /// Render a human-readable breakdown of why this fact scored the
    /// way it did, assembled from the four sub-scores.
    #[must_use]
    pub fn reasoning(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "{} lexical match ({:.2}); {} semantic match ({:.2}); ",
            tier(self.lexical),
            self.lexical,
            tier(self.semantic),
            self.semantic,
        );
        let _ = write!(
            out,
            "{} citation authority ({:.2}); recency decay at {:.2}",
            tier(self.authority),
            self.authority,
            self.recency,
        );
        out
    }
}

fn tier(score: f64) -> &'static str {
    if score >= 0.75 {
        "strong"
    } else if score >= 0.4 {
        "moderate"
    } else {
        "weak"
    }
}

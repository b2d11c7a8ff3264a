#![forbid(unsafe_code)]
//! citerank-engine: hybrid relevance ranking over citation-linked facts.
//!
//! # Overview
//!
//! The engine turns a candidate set of facts plus an optional query
//! into one final relevance score per fact by fusing four signals:
//!
//! - **lexical** — BM25 overlap between query tokens and fact text
//! - **semantic** — cosine similarity between query and fact embeddings
//! - **authority** — PageRank over the citation graph of the candidate set
//! - **recency** — exponential half-life decay of fact age
//!
//! Scoring is a pure, synchronous computation over an immutable
//! request snapshot: no I/O, no wall-clock reads, no shared state
//! between requests. The one optional cross-request resource is the
//! [`AuthorityCache`], keyed by `(project_scope, graph_version)`.
//!
//! # Usage
//!
//! ```
//! use chrono::Utc;
//! use citerank_core::Fact;
//! use citerank_engine::{ScoringRequest, score};
//!
//! let request = ScoringRequest {
//!     query_text: Some("machine learning".to_string()),
//!     facts: vec![Fact::new("f-1", "machine learning is powerful", Utc::now())],
//!     ..ScoringRequest::new("proj-a", Utc::now())
//! };
//! let results = score(&request).expect("valid config");
//! assert!(results["f-1"].final_score >= 0.0 && results["f-1"].final_score <= 1.0);
//! ```
//!
//! # Conventions
//!
//! - **Errors**: the only fatal error is [`ConfigError`] from request
//!   validation; every other condition degrades a sub-score.
//! - **Logging**: `tracing` macros; degradations log at `debug!`,
//!   non-convergence at `warn!`.

pub mod authority;
pub mod fusion;
pub mod lexical;
pub mod recency;
pub mod request;
pub mod semantic;

pub use authority::{AuthorityCache, CitationGraph, PageRankConfig};
pub use citerank_core::{Bm25Params, ConfigError, Fact, ScoringConfig, SignalWeights};
pub use fusion::{score, score_with_cache};
pub use request::{ScoreResult, ScoringRequest};

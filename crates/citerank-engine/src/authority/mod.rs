//! Authority (citation centrality) scoring.
//!
//! # Overview
//!
//! Authority measures how much of the candidate set's citation mass
//! flows into each fact:
//!
//! 1. [`graph`] builds a directed citation graph closed over the
//!    candidate set — an edge `A → B` exists iff fact `A` cites `B`
//!    and `B` is also in the set.
//! 2. [`pagerank`] runs power iteration over that graph to a
//!    stationary importance distribution, with dangling-node mass
//!    redistributed uniformly so the distribution keeps summing to 1.
//!
//! The raw distribution is min-max normalized by the fusion layer.
//! [`AuthorityCache`] lets callers reuse the raw distribution across
//! requests for an unchanged graph, keyed by
//! `(project_scope, graph_version)`.

pub mod graph;
pub mod pagerank;

pub use graph::CitationGraph;
pub use pagerank::{AuthorityCache, AuthorityResult, PageRankConfig, pagerank};

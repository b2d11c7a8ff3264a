//! Power-iteration PageRank over the citation graph.
//!
//! # Algorithm
//!
//! ```text
//! PR(u) = (1 - d) / N + d * Σ PR(v) / L(v)   for each v → u
//! ```
//!
//! with damping `d = 0.85` and `L(v)` the out-degree of `v` within the
//! restricted graph. All nodes start at `1/N`. Dangling nodes
//! (`L(v) = 0`) redistribute their mass uniformly across all `N` nodes
//! each iteration, preserving the sum-to-1 invariant. Iteration stops
//! when the L1 change between successive iterates falls below the
//! tolerance or the iteration cap is reached; hitting the cap is not
//! an error — the last iterate is returned.

use std::collections::HashMap;

use petgraph::Direction;
use tracing::{instrument, warn};

use super::graph::CitationGraph;

/// Configuration for the power iteration.
#[derive(Debug, Clone, Copy)]
pub struct PageRankConfig {
    /// Damping factor (probability of following a citation vs teleporting).
    pub damping: f64,
    /// Convergence threshold: stop when the L1 norm of the rank delta
    /// falls below this value.
    pub tolerance: f64,
    /// Iteration cap, bounding worst-case latency.
    pub max_iter: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1e-6,
            max_iter: 100,
        }
    }
}

/// Result of one PageRank computation.
#[derive(Debug, Clone)]
pub struct AuthorityResult {
    /// Raw stationary distribution: fact ID → rank mass. Sums to ~1.
    pub scores: HashMap<String, f64>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether the L1 delta fell below tolerance within the cap.
    pub converged: bool,
}

/// Compute the raw authority distribution over a citation graph.
#[must_use]
#[instrument(skip(graph, config), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn pagerank(graph: &CitationGraph, config: PageRankConfig) -> AuthorityResult {
    let g = &graph.graph;
    let n = g.node_count();

    if n == 0 {
        return AuthorityResult {
            scores: HashMap::new(),
            iterations: 0,
            converged: true,
        };
    }

    #[allow(clippy::cast_precision_loss)]
    let n_f64 = n as f64;
    let base = (1.0 - config.damping) / n_f64;

    let mut ranks = vec![1.0 / n_f64; n];
    let mut new_ranks = vec![0.0_f64; n];

    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..config.max_iter {
        iterations += 1;

        for rank in &mut new_ranks {
            *rank = base;
        }

        // Distribute each node's mass to its citation targets; dangling
        // nodes spread theirs uniformly across the whole set.
        for node in g.node_indices() {
            let idx = node.index();
            let out_degree = graph.out_degree(node);

            if out_degree == 0 {
                let share = config.damping * ranks[idx] / n_f64;
                for rank in &mut new_ranks {
                    *rank += share;
                }
            } else {
                #[allow(clippy::cast_precision_loss)]
                let share = config.damping * ranks[idx] / out_degree as f64;
                for neighbor in g.neighbors_directed(node, Direction::Outgoing) {
                    new_ranks[neighbor.index()] += share;
                }
            }
        }

        let delta: f64 = ranks
            .iter()
            .zip(new_ranks.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();

        std::mem::swap(&mut ranks, &mut new_ranks);

        if delta < config.tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(
            iterations,
            tolerance = config.tolerance,
            "power iteration hit the cap without converging; returning last iterate"
        );
    }

    let mut scores = HashMap::with_capacity(n);
    for node in g.node_indices() {
        if let Some(id) = graph.fact_id(node) {
            scores.insert(id.to_string(), ranks[node.index()]);
        }
    }

    AuthorityResult {
        scores,
        iterations,
        converged,
    }
}

// ---------------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------------

/// Cross-request cache of raw authority distributions.
///
/// Entries are keyed by project scope and validated against the
/// caller-supplied `graph_version` token. Because authority is
/// computed over a specific candidate set, an entry is only reused
/// when its node set matches the request's fact IDs exactly; anything
/// else is a miss and triggers a recompute.
#[derive(Debug, Default)]
pub struct AuthorityCache {
    entries: HashMap<String, CacheEntry>,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    graph_version: u64,
    scores: HashMap<String, f64>,
}

impl AuthorityCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached distribution covering exactly `fact_ids` at
    /// `graph_version`.
    #[must_use]
    pub fn get(
        &self,
        project_scope: &str,
        graph_version: u64,
        fact_ids: &[&str],
    ) -> Option<&HashMap<String, f64>> {
        let entry = self.entries.get(project_scope)?;
        if entry.graph_version != graph_version {
            return None;
        }
        if entry.scores.len() != fact_ids.len()
            || !fact_ids.iter().all(|id| entry.scores.contains_key(*id))
        {
            return None;
        }
        Some(&entry.scores)
    }

    /// Store a distribution for `(project_scope, graph_version)`,
    /// replacing any previous entry for the project.
    pub fn insert(
        &mut self,
        project_scope: impl Into<String>,
        graph_version: u64,
        scores: HashMap<String, f64>,
    ) {
        self.entries.insert(
            project_scope.into(),
            CacheEntry {
                graph_version,
                scores,
            },
        );
    }

    /// Evict the entry for one project, if any.
    pub fn invalidate_project(&mut self, project_scope: &str) {
        self.entries.remove(project_scope);
    }

    /// Number of cached projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

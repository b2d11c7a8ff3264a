//! Citation graph construction from a candidate set.
//!
//! The graph is closed over the supplied facts: references to facts
//! outside the set are ignored (they are a normal condition, not an
//! error), duplicate citations collapse to one edge, and
//! self-citations are dropped since a fact lends no authority to
//! itself.

use std::collections::HashMap;

use citerank_core::Fact;
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

/// A directed citation graph over one candidate set.
///
/// Nodes are fact IDs; an edge `A → B` means "A cites B".
#[derive(Debug)]
pub struct CitationGraph {
    /// The underlying petgraph graph.
    pub graph: DiGraph<String, ()>,
    node_map: HashMap<String, NodeIndex>,
}

impl CitationGraph {
    /// Build the citation graph restricted to `facts`.
    ///
    /// Every fact becomes a node even when it has no edges, so the
    /// authority scorer sees the full candidate set.
    #[must_use]
    pub fn from_facts(facts: &[Fact]) -> Self {
        let mut graph = DiGraph::<String, ()>::new();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::with_capacity(facts.len());

        for fact in facts {
            let idx = graph.add_node(fact.id.clone());
            node_map.insert(fact.id.clone(), idx);
        }

        for fact in facts {
            let from = node_map[&fact.id];
            for target in &fact.references {
                let Some(&to) = node_map.get(target) else {
                    debug!(
                        fact_id = %fact.id,
                        target = %target,
                        "citation points outside the candidate set; ignored"
                    );
                    continue;
                };
                if from == to {
                    continue;
                }
                if !graph.contains_edge(from, to) {
                    graph.add_edge(from, to, ());
                }
            }
        }

        Self { graph, node_map }
    }

    /// Number of facts in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of in-set citation edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the node index for a fact ID.
    #[must_use]
    pub fn node_index(&self, fact_id: &str) -> Option<NodeIndex> {
        self.node_map.get(fact_id).copied()
    }

    /// The fact ID labeling a node.
    #[must_use]
    pub fn fact_id(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Out-degree of a node within the restricted graph.
    #[must_use]
    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Outgoing).count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

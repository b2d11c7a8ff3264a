//! Property tests: range invariants, determinism, and PageRank mass
//! conservation over randomly generated candidate sets.

use chrono::{DateTime, Duration, TimeZone, Utc};
use citerank_core::{Fact, SignalWeights};
use citerank_engine::authority::{CitationGraph, PageRankConfig, pagerank};
use citerank_engine::{ScoringRequest, score};
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "rust", "graph", "memory", "cache", "query", "fact", "rank", "decay", "citation",
];

fn eval_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS.to_vec()), 0..6)
        .prop_map(|words| words.join(" "))
}

fn arb_facts() -> impl Strategy<Value = Vec<Fact>> {
    (1_usize..8).prop_flat_map(|n| {
        prop::collection::vec(
            (
                arb_text(),
                prop::option::of(prop::collection::vec(-1.0_f32..1.0, 3)),
                0_i64..400,
                prop::collection::vec(0..n, 0..3),
            ),
            n,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(index, (text, embedding, age_days, reference_indices))| {
                    let timestamp = eval_time() - Duration::days(age_days);
                    Fact {
                        embedding,
                        references: reference_indices
                            .into_iter()
                            .map(|r| format!("f-{r}"))
                            .collect(),
                        ..Fact::new(format!("f-{index}"), text, timestamp)
                    }
                })
                .collect()
        })
    })
}

fn arb_weights() -> impl Strategy<Value = SignalWeights> {
    (0.0_f64..3.0, 0.0_f64..3.0, 0.0_f64..3.0, 0.0_f64..3.0).prop_map(
        |(alpha, beta, gamma, delta)| SignalWeights {
            alpha,
            beta,
            gamma,
            delta,
        },
    )
}

fn arb_request() -> impl Strategy<Value = ScoringRequest> {
    (
        arb_facts(),
        arb_weights(),
        prop::option::of(arb_text()),
        prop::option::of(prop::collection::vec(-1.0_f32..1.0, 3)),
    )
        .prop_map(|(facts, weights, query_text, query_embedding)| {
            let mut request = ScoringRequest::new("proj-prop", eval_time());
            request.facts = facts;
            request.config.weights = weights;
            request.query_text = query_text;
            request.query_embedding = query_embedding;
            request
        })
}

proptest! {
    /// Every final score and every sub-score lies in [0, 1], and every
    /// input fact appears exactly once in the result.
    #[test]
    fn scores_stay_in_unit_interval(request in arb_request()) {
        let results = score(&request).expect("generated configs are valid");
        prop_assert_eq!(results.len(), request.facts.len());

        for fact in &request.facts {
            let result = results.get(&fact.id).expect("fact present in result map");
            for (name, value) in [
                ("final", result.final_score),
                ("lexical", result.lexical),
                ("semantic", result.semantic),
                ("authority", result.authority),
                ("recency", result.recency),
            ] {
                prop_assert!(
                    (0.0..=1.0).contains(&value),
                    "{} score {} out of range for {}",
                    name,
                    value,
                    fact.id
                );
            }
        }
    }

    /// Two calls with identical inputs produce bit-for-bit identical
    /// results.
    #[test]
    fn scoring_is_deterministic(request in arb_request()) {
        let first = score(&request).expect("valid config");
        let second = score(&request).expect("valid config");
        prop_assert_eq!(first, second);
    }

    /// The raw (pre-normalization) authority distribution over a
    /// closed candidate set sums to 1.
    #[test]
    fn pagerank_mass_is_conserved(facts in arb_facts()) {
        let graph = CitationGraph::from_facts(&facts);
        let result = pagerank(&graph, PageRankConfig::default());
        let total: f64 = result.scores.values().sum();
        prop_assert!(
            (total - 1.0).abs() < 1e-3,
            "raw authority mass should sum to ~1, got {}",
            total
        );
    }
}

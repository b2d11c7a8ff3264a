//! Lexical (BM25) scoring.
//!
//! # Overview
//!
//! The lexical layer scores query-term overlap per fact:
//!
//! 1. [`corpus`] tokenizes fact text and aggregates per-corpus
//!    statistics (document frequencies, total fact count, average
//!    fact length).
//! 2. [`bm25`] computes the raw, unbounded BM25 score per fact from
//!    those statistics.
//!
//! Raw scores are min-max normalized by the fusion layer; this module
//! only produces raw values. A fact with zero tokens and a corpus of
//! zero facts both degrade to raw score 0 without error.

pub mod bm25;
pub mod corpus;

pub use bm25::bm25_score;
pub use corpus::{CorpusStats, DocTerms, tokenize};

use citerank_core::{Bm25Params, Fact};

/// Compute raw BM25 scores for every fact in the candidate set,
/// in input order.
///
/// Corpus statistics are derived from the candidate set itself
/// (per-request normalization; see the crate docs).
#[must_use]
pub fn score_facts(query_tokens: &[String], facts: &[Fact], params: Bm25Params) -> Vec<f64> {
    let docs: Vec<DocTerms> = facts
        .iter()
        .map(|fact| DocTerms::from_text(&fact.text))
        .collect();
    let stats = CorpusStats::from_docs(&docs);

    docs.iter()
        .map(|doc| bm25_score(query_tokens, doc, &stats, params))
        .collect()
}

//! Raw BM25 scoring.
//!
//! `score(D) = Σ_q IDF(q) · f(q,D)·(k1+1) / (f(q,D) + k1·(1 − b + b·|D|/avgdl))`
//!
//! with `IDF(q) = ln((N − df(q) + 0.5) / (df(q) + 0.5) + 1)`. The `+1`
//! inside the log keeps IDF non-negative for terms that appear in most
//! of the corpus; ubiquitous terms contribute nothing rather than a
//! negative amount.

use citerank_core::Bm25Params;

use super::corpus::{CorpusStats, DocTerms};

/// Inverse document frequency of one term within the corpus.
#[must_use]
pub fn idf(stats: &CorpusStats, term: &str) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let n = stats.total_docs() as f64;
    #[allow(clippy::cast_precision_loss)]
    let df = stats.doc_freq(term) as f64;
    (((n - df + 0.5) / (df + 0.5)) + 1.0).ln()
}

/// Raw, unbounded BM25 score of one document against the query tokens.
///
/// Returns exactly 0 when the document has no tokens, the corpus is
/// empty, or no query token occurs in the document.
#[must_use]
pub fn bm25_score(
    query_tokens: &[String],
    doc: &DocTerms,
    stats: &CorpusStats,
    params: Bm25Params,
) -> f64 {
    if doc.len == 0 || stats.total_docs() == 0 || stats.avg_doc_len() <= 0.0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let doc_len = doc.len as f64;
    let len_norm = 1.0 - params.b + params.b * doc_len / stats.avg_doc_len();

    let mut score = 0.0;
    for token in query_tokens {
        let tf = doc.freq(token);
        if tf == 0 {
            continue;
        }
        #[allow(clippy::cast_precision_loss)]
        let tf = tf as f64;
        score += idf(stats, token) * (tf * (params.k1 + 1.0)) / (tf + params.k1 * len_norm);
    }
    score
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(texts: &[&str]) -> (Vec<DocTerms>, CorpusStats) {
        let docs: Vec<DocTerms> = texts.iter().map(|t| DocTerms::from_text(t)).collect();
        let stats = CorpusStats::from_docs(&docs);
        (docs, stats)
    }

    fn query(text: &str) -> Vec<String> {
        super::super::corpus::tokenize(text)
    }

    #[test]
    fn disjoint_vocabulary_scores_exactly_zero() {
        let (docs, stats) = corpus(&["cooking recipes", "machine learning"]);
        let score = bm25_score(&query("quantum physics"), &docs[0], &stats, Bm25Params::default());
        assert!((score - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn matching_terms_score_positive() {
        let (docs, stats) = corpus(&["machine learning is powerful", "cooking recipes"]);
        let q = query("machine learning");
        let hit = bm25_score(&q, &docs[0], &stats, Bm25Params::default());
        let miss = bm25_score(&q, &docs[1], &stats, Bm25Params::default());
        assert!(hit > 0.0);
        assert!((miss - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn idf_stays_nonnegative_for_ubiquitous_terms() {
        // "rust" appears in every document; textbook IDF would go negative.
        let (_, stats) = corpus(&["rust", "rust", "rust"]);
        assert!(idf(&stats, "rust") > 0.0);
    }

    #[test]
    fn rarer_terms_carry_more_idf() {
        let (_, stats) = corpus(&["rust go", "rust", "rust python"]);
        assert!(idf(&stats, "python") > idf(&stats, "rust"));
    }

    #[test]
    fn zero_token_document_scores_zero() {
        let (docs, stats) = corpus(&["", "machine learning"]);
        let score = bm25_score(&query("machine"), &docs[0], &stats, Bm25Params::default());
        assert!((score - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_corpus_scores_zero() {
        let stats = CorpusStats::from_docs(&[]);
        let doc = DocTerms::from_text("machine learning");
        let score = bm25_score(&query("machine"), &doc, &stats, Bm25Params::default());
        assert!((score - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn term_frequency_saturates_with_k1() {
        let (docs, stats) = corpus(&["rust rust rust rust rust systems", "rust systems"]);
        let q = query("rust");
        let heavy = bm25_score(&q, &docs[0], &stats, Bm25Params::default());
        let light = bm25_score(&q, &docs[1], &stats, Bm25Params::default());
        assert!(heavy > light, "more occurrences should score higher");
        // Saturation: five occurrences are nowhere near five times one.
        assert!(heavy < light * 5.0);
    }

    #[test]
    fn length_normalization_penalizes_long_documents() {
        let (docs, stats) = corpus(&[
            "rust",
            "rust plus a very long tail of unrelated padding words here",
        ]);
        let q = query("rust");
        let short = bm25_score(&q, &docs[0], &stats, Bm25Params::default());
        let long = bm25_score(&q, &docs[1], &stats, Bm25Params::default());
        assert!(short > long);
    }

    #[test]
    fn b_zero_disables_length_normalization() {
        let (docs, stats) = corpus(&["rust", "rust padding padding padding padding"]);
        let params = Bm25Params { b: 0.0, ..Default::default() };
        let q = query("rust");
        let short = bm25_score(&q, &docs[0], &stats, params);
        let long = bm25_score(&q, &docs[1], &stats, params);
        assert!((short - long).abs() < 1e-12);
    }

    #[test]
    fn repeated_query_token_contributes_per_occurrence() {
        let (docs, stats) = corpus(&["rust systems", "go systems"]);
        let once = bm25_score(&query("rust"), &docs[0], &stats, Bm25Params::default());
        let twice = bm25_score(&query("rust rust"), &docs[0], &stats, Bm25Params::default());
        assert!((twice - 2.0 * once).abs() < 1e-12);
    }
}

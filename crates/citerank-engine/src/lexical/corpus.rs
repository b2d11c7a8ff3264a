//! Tokenization and per-corpus statistics for BM25.

use std::collections::{HashMap, HashSet};

/// Tokenize text: lowercase, split on runs of non-alphanumeric
/// characters, drop empty tokens.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Tokenized view of one fact's text: term frequencies and token count.
#[derive(Debug, Clone, Default)]
pub struct DocTerms {
    /// Occurrences of each term within the document.
    pub term_freq: HashMap<String, usize>,
    /// Total token count (`|D|`).
    pub len: usize,
}

impl DocTerms {
    /// Tokenize `text` and count term frequencies.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let tokens = tokenize(text);
        let len = tokens.len();
        let mut term_freq = HashMap::new();
        for token in tokens {
            *term_freq.entry(token).or_insert(0) += 1;
        }
        Self { term_freq, len }
    }

    /// Term frequency `f(term, D)`, 0 for absent terms.
    #[must_use]
    pub fn freq(&self, term: &str) -> usize {
        self.term_freq.get(term).copied().unwrap_or(0)
    }
}

/// Corpus-level statistics over one candidate set.
#[derive(Debug, Clone, Default)]
pub struct CorpusStats {
    doc_freqs: HashMap<String, usize>,
    total_docs: usize,
    avg_doc_len: f64,
}

impl CorpusStats {
    /// Aggregate statistics from per-document term views.
    ///
    /// Degenerate case: zero documents yields `avgdl == 0`, which in
    /// turn makes every downstream BM25 score 0 (no divide-by-zero).
    #[must_use]
    pub fn from_docs(docs: &[DocTerms]) -> Self {
        let total_docs = docs.len();
        if total_docs == 0 {
            return Self::default();
        }

        let mut doc_freqs: HashMap<String, usize> = HashMap::new();
        let mut total_len = 0_usize;
        for doc in docs {
            total_len += doc.len;
            // df counts documents containing the term at least once.
            let unique: HashSet<&String> = doc.term_freq.keys().collect();
            for term in unique {
                *doc_freqs.entry(term.clone()).or_insert(0) += 1;
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let avg_doc_len = total_len as f64 / total_docs as f64;

        Self {
            doc_freqs,
            total_docs,
            avg_doc_len,
        }
    }

    /// Number of documents containing `term` at least once.
    #[must_use]
    pub fn doc_freq(&self, term: &str) -> usize {
        self.doc_freqs.get(term).copied().unwrap_or(0)
    }

    /// Total fact count `N`.
    #[must_use]
    pub const fn total_docs(&self) -> usize {
        self.total_docs
    }

    /// Average fact length `avgdl` in tokens. 0 when `N == 0`.
    #[must_use]
    pub const fn avg_doc_len(&self) -> f64 {
        self.avg_doc_len
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_splits_on_nonalnum() {
        assert_eq!(
            tokenize("Rust's borrow-checker, v2!"),
            vec!["rust", "s", "borrow", "checker", "v2"]
        );
    }

    #[test]
    fn tokenize_drops_empty_tokens() {
        assert_eq!(tokenize("  ...  !!  "), Vec::<String>::new());
        assert_eq!(tokenize(""), Vec::<String>::new());
    }

    #[test]
    fn doc_terms_counts_repeats() {
        let doc = DocTerms::from_text("the cat and the hat");
        assert_eq!(doc.len, 5);
        assert_eq!(doc.freq("the"), 2);
        assert_eq!(doc.freq("cat"), 1);
        assert_eq!(doc.freq("dog"), 0);
    }

    #[test]
    fn corpus_stats_df_counts_documents_not_occurrences() {
        let docs = vec![
            DocTerms::from_text("rust rust rust"),
            DocTerms::from_text("rust and go"),
            DocTerms::from_text("python"),
        ];
        let stats = CorpusStats::from_docs(&docs);
        assert_eq!(stats.total_docs(), 3);
        assert_eq!(stats.doc_freq("rust"), 2);
        assert_eq!(stats.doc_freq("python"), 1);
        assert_eq!(stats.doc_freq("absent"), 0);
        // (3 + 3 + 1) / 3
        assert!((stats.avg_doc_len() - 7.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_corpus_has_zero_avgdl() {
        let stats = CorpusStats::from_docs(&[]);
        assert_eq!(stats.total_docs(), 0);
        assert!((stats.avg_doc_len() - 0.0).abs() < f64::EPSILON);
    }
}

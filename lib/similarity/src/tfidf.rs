//! TF-IDF vectorization over the catalog notes corpus.
//!
//! Fitting produces an immutable [`TfidfModel`] (vocabulary + inverse
//! document frequencies) together with one L2-normalized sparse vector per
//! corpus document. The model can then weigh new text against the fitted
//! vocabulary without refitting.

use ahash::{AHashMap, AHashSet};
use dupex_core::SparseVector;
use serde::{Deserialize, Serialize};

/// Fixed English stop-word set discarded during tokenization.
const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "am", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being",
    "below", "between", "both", "but", "by", "could", "did", "do", "does",
    "doing", "down", "during", "each", "few", "for", "from", "further",
    "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "if", "in", "into", "is", "it", "its",
    "itself", "just", "me", "more", "most", "my", "myself", "no", "nor",
    "not", "now", "of", "off", "on", "once", "only", "or", "other", "our",
    "ours", "ourselves", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "we",
    "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Tokenize text for TF-IDF weighting.
/// Uses lowercase normalization, splits on non-alphanumeric characters,
/// and drops single-character tokens and stop words.
#[must_use]
pub fn tokenize(text: &str, bigrams: bool) -> Vec<String> {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() > 1 && !STOP_WORDS.contains(t))
        .collect();

    let mut tokens: Vec<String> = words.iter().map(|w| (*w).to_string()).collect();
    if bigrams {
        for pair in words.windows(2) {
            tokens.push(format!("{} {}", pair[0], pair[1]));
        }
    }
    tokens
}

/// Configuration for fitting a TF-IDF model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TfidfConfig {
    /// Minimum number of documents a term must appear in to enter the
    /// vocabulary. Suppresses noise from singleton tokens.
    pub min_doc_freq: usize,
    /// Whether to include word bigrams alongside unigrams.
    pub bigrams: bool,
}

impl Default for TfidfConfig {
    fn default() -> Self {
        Self {
            min_doc_freq: 2,
            bigrams: false,
        }
    }
}

/// A fitted vocabulary/term-weight model.
///
/// Derived deterministically from the full corpus at fit time: vocabulary
/// columns follow sorted term order, so fitting the same corpus twice
/// yields identical models. The model is an explicit immutable value, not
/// ambient state; it is shared by reference wherever weighing is needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfModel {
    vocab: AHashMap<String, usize>,
    idf: Vec<f32>,
    bigrams: bool,
}

impl TfidfModel {
    /// Fit a model over a corpus and produce one weighted sparse vector per
    /// input document, all of vocabulary dimensionality.
    ///
    /// An empty corpus, or one where every document reduces to zero valid
    /// terms after filtering, yields an empty vocabulary and all-zero rows;
    /// similarity against those rows is 0.0 everywhere.
    #[must_use]
    pub fn fit(corpus: &[&str], config: TfidfConfig) -> (Self, Vec<SparseVector>) {
        let docs: Vec<Vec<String>> = corpus
            .iter()
            .map(|text| tokenize(text, config.bigrams))
            .collect();

        // Document frequency per term
        let mut dfs: AHashMap<String, usize> = AHashMap::new();
        for doc in &docs {
            let unique: AHashSet<&String> = doc.iter().collect();
            for term in unique {
                *dfs.entry(term.clone()).or_insert(0) += 1;
            }
        }

        let min_df = config.min_doc_freq.max(1);
        let mut terms: Vec<String> = dfs
            .iter()
            .filter(|&(_, &df)| df >= min_df)
            .map(|(term, _)| term.clone())
            .collect();
        terms.sort_unstable();

        let vocab: AHashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(col, term)| (term.clone(), col))
            .collect();

        // Smoothed inverse document frequency: ln((1 + n) / (1 + df)) + 1
        let total_docs = corpus.len() as f32;
        let idf: Vec<f32> = terms
            .iter()
            .map(|term| {
                let df = dfs[term] as f32;
                ((1.0 + total_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let model = Self {
            vocab,
            idf,
            bigrams: config.bigrams,
        };
        let matrix = docs.iter().map(|doc| model.weigh(doc)).collect();
        (model, matrix)
    }

    /// Apply the fitted vocabulary/weights to a new string.
    /// Terms outside the fitted vocabulary contribute zero weight; this is
    /// expected, not an error.
    #[must_use]
    pub fn transform(&self, text: &str) -> SparseVector {
        self.weigh(&tokenize(text, self.bigrams))
    }

    fn weigh(&self, tokens: &[String]) -> SparseVector {
        let mut counts: AHashMap<usize, f32> = AHashMap::new();
        for token in tokens {
            if let Some(&col) = self.vocab.get(token) {
                *counts.entry(col).or_insert(0.0) += 1.0;
            }
        }

        let entries: Vec<(usize, f32)> = counts
            .into_iter()
            .map(|(col, tf)| (col, tf * self.idf[col]))
            .collect();

        let mut vector = SparseVector::new(entries);
        vector.normalize();
        vector
    }

    #[inline]
    #[must_use]
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vocab.is_empty()
    }
}

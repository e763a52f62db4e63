//! Dupe aggregation engine.
//!
//! Orchestrates name resolution and similarity ranking (or the curated-list
//! fallback) into the final deduplicated, annotated result list. The engine
//! is built once over a catalog; after a successful build it is immutable
//! and freely shareable across threads.

use crate::rank::Ranker;
use crate::resolver::resolve;
use crate::tfidf::{TfidfConfig, TfidfModel};
use ahash::AHashSet;
use dupex_core::{Catalog, Entry, Error, RawEntry, Result, SparseVector};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Configuration for building a [`DupeEngine`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub tfidf: TfidfConfig,
    /// Entries with fewer ratings than this are classified as budget.
    pub budget_threshold: u64,
    /// Entries with at least this many ratings are classified as premium.
    pub premium_threshold: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tfidf: TfidfConfig::default(),
            budget_threshold: 500,
            premium_threshold: 1000,
        }
    }
}

impl EngineConfig {
    fn validate(&self) -> Result<()> {
        if self.tfidf.min_doc_freq == 0 {
            return Err(Error::InvalidConfig(
                "min_doc_freq must be at least 1".to_string(),
            ));
        }
        if self.budget_threshold >= self.premium_threshold {
            return Err(Error::InvalidConfig(format!(
                "budget threshold {} must be below premium threshold {}",
                self.budget_threshold, self.premium_threshold
            )));
        }
        Ok(())
    }
}

/// Popularity-derived price tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceRange {
    Budget,
    MidRange,
    Premium,
    /// Synthesized placeholders whose popularity is not known.
    Unknown,
}

impl PriceRange {
    /// Three-bucket threshold classification on rating count.
    #[inline]
    #[must_use]
    pub fn classify(rating_count: u64, budget_threshold: u64, premium_threshold: u64) -> Self {
        if rating_count < budget_threshold {
            PriceRange::Budget
        } else if rating_count < premium_threshold {
            PriceRange::MidRange
        } else {
            PriceRange::Premium
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PriceRange::Budget => "budget",
            PriceRange::MidRange => "mid-range",
            PriceRange::Premium => "premium",
            PriceRange::Unknown => "unknown",
        };
        write!(f, "{}", label)
    }
}

/// One entry of a `find_similar` result list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DupeResult {
    pub name: String,
    pub brand: String,
    pub notes: String,
    /// Cosine similarity formatted to two decimals, or `"unknown"` when the
    /// result did not come from vector ranking.
    pub similarity: String,
    pub price_range: PriceRange,
    pub gender: String,
    /// Display name of the entry the query resolved to.
    pub query_name: String,
}

const SIMILARITY_UNKNOWN: &str = "unknown";

/// The similarity-search and ranking engine.
///
/// Construction normalizes the catalog, fits the TF-IDF model over the
/// notes corpus, and builds the vector matrix; no query is accepted before
/// the build completes. Catalog, model, and matrix are immutable afterward,
/// so concurrent callers share one engine with no locking.
#[derive(Debug)]
pub struct DupeEngine {
    catalog: Catalog,
    model: TfidfModel,
    ranker: Ranker,
    config: EngineConfig,
}

impl DupeEngine {
    /// Build an engine from raw catalog records.
    pub fn new(entries: Vec<RawEntry>, config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let catalog = Catalog::from_raw(entries);
        let corpus: Vec<&str> = catalog.iter().map(|e| e.notes.as_str()).collect();
        let (model, matrix) = TfidfModel::fit(&corpus, config.tfidf.clone());
        let ranker = Ranker::new(matrix);

        info!(
            entries = catalog.len(),
            vocabulary = model.vocab_size(),
            "dupe engine built"
        );

        Ok(Self {
            catalog,
            model,
            ranker,
            config,
        })
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub fn model(&self) -> &TfidfModel {
        &self.model
    }

    /// Find the catalog entries most similar to the named fragrance.
    ///
    /// The query is resolved to a single catalog entry; an unresolved query
    /// yields an empty list (a normal outcome, not a fault), a blank query
    /// is rejected up front. If the resolved entry carries a curated dupe
    /// list, that list wins and vector ranking is skipped; otherwise all
    /// entries are ranked by note similarity and the top `limit` distinct
    /// names are returned. One call never mixes the two modes.
    pub fn find_similar(&self, query: &str, limit: usize) -> Result<Vec<DupeResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::InvalidQuery(
                "query must not be blank".to_string(),
            ));
        }

        let Some(resolved) = resolve(&self.catalog, query) else {
            debug!(query, "query did not resolve to a catalog entry");
            return Ok(Vec::new());
        };
        let entry = self.entry(resolved);

        if entry.has_known_dupes() {
            debug!(query, index = resolved, "using curated dupe list");
            return Ok(self.curated_results(resolved, entry));
        }

        debug!(query, index = resolved, "ranking by note similarity");
        Ok(self.ranked_results(resolved, entry, limit))
    }

    /// Rank catalog entries against free text instead of a resolved entry.
    ///
    /// The text is weighed with the fitted model and scored against every
    /// row; zero-score rows are skipped, so a query with no vocabulary
    /// overlap yields an empty list.
    pub fn find_similar_text(&self, text: &str, limit: usize) -> Result<Vec<DupeResult>> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::InvalidQuery(
                "query must not be blank".to_string(),
            ));
        }

        let reference = self.model.transform(text);
        let mut seen = AHashSet::new();
        let mut results = Vec::new();

        for (index, score) in self.ranker.rank(&reference) {
            if results.len() == limit {
                break;
            }
            if score <= 0.0 {
                break;
            }
            let candidate = self.entry(index);
            if !seen.insert(candidate.name.clone()) {
                continue;
            }
            results.push(self.annotate(candidate, Some(score), text.to_lowercase()));
        }

        Ok(results)
    }

    fn ranked_results(&self, resolved: usize, entry: &Entry, limit: usize) -> Vec<DupeResult> {
        let reference = match self.ranker.row(resolved) {
            Some(row) => row.clone(),
            None => SparseVector::zero(),
        };

        let mut seen = AHashSet::new();
        let mut results = Vec::new();

        for (index, score) in self.ranker.rank(&reference) {
            if results.len() == limit {
                break;
            }
            if index == resolved {
                continue;
            }
            let candidate = self.entry(index);
            // Brand-identical re-listings of the query entry are the same item
            if candidate.name == entry.name && candidate.brand == entry.brand {
                continue;
            }
            // Dedup by name, first occurrence wins
            if !seen.insert(candidate.name.clone()) {
                continue;
            }
            results.push(self.annotate(candidate, Some(score), entry.name.clone()));
        }

        results
    }

    /// Exact-match-table path: each curated name resolves to its catalog
    /// entry, or is synthesized as a placeholder so the curated count is
    /// preserved. The curated list is returned whole, not truncated.
    fn curated_results(&self, resolved: usize, entry: &Entry) -> Vec<DupeResult> {
        let mut seen = AHashSet::new();
        let mut results = Vec::new();

        for dupe_name in &entry.known_dupes {
            match resolve(&self.catalog, dupe_name) {
                Some(index) if index != resolved => {
                    let candidate = self.entry(index);
                    if candidate.name == entry.name && candidate.brand == entry.brand {
                        continue;
                    }
                    if !seen.insert(candidate.name.clone()) {
                        continue;
                    }
                    results.push(self.annotate(candidate, None, entry.name.clone()));
                }
                Some(_) => {}
                None => {
                    let name = dupe_name.trim().to_lowercase();
                    if !seen.insert(name.clone()) {
                        continue;
                    }
                    results.push(DupeResult {
                        name,
                        brand: "Unknown".to_string(),
                        notes: String::new(),
                        similarity: SIMILARITY_UNKNOWN.to_string(),
                        price_range: PriceRange::Unknown,
                        gender: String::new(),
                        query_name: entry.name.clone(),
                    });
                }
            }
        }

        results
    }

    fn annotate(&self, candidate: &Entry, score: Option<f32>, query_name: String) -> DupeResult {
        let similarity = match score {
            Some(score) => format!("{:.2}", score),
            None => SIMILARITY_UNKNOWN.to_string(),
        };
        DupeResult {
            name: candidate.name.clone(),
            brand: candidate.brand.clone(),
            notes: candidate.notes.clone(),
            similarity,
            price_range: PriceRange::classify(
                candidate.rating_count,
                self.config.budget_threshold,
                self.config.premium_threshold,
            ),
            gender: candidate.gender.clone(),
            query_name,
        }
    }

    fn entry(&self, index: usize) -> &Entry {
        // Ranker indices are catalog positions by construction
        self.catalog.get(index).expect("matrix row has catalog entry")
    }
}

//! # dupex
//!
//! A content-based fragrance dupe finder.
//!
//! dupex resolves a free-text fragrance name against an in-memory catalog,
//! scores every catalog entry by TF-IDF/cosine similarity over its notes,
//! and returns a deduplicated, ranked list of the closest alternatives.
//! Entries with a curated dupe list bypass the vector ranking entirely.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install dupex
//! dupex catalog.json "sauvage" --limit 5
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use dupex::prelude::*;
//!
//! let entries = vec![
//!     RawEntry::new("Sauvage", "Dior")
//!         .with_notes("bergamot, pepper, ambroxan, lavender")
//!         .with_rating_count(1200),
//!     RawEntry::new("Luna Rossa", "Prada")
//!         .with_notes("bergamot, pepper, vetiver, lavender")
//!         .with_rating_count(300),
//! ];
//!
//! let engine = DupeEngine::new(entries, EngineConfig::default()).unwrap();
//! let dupes = engine.find_similar("sauvage", 5).unwrap();
//! assert_eq!(dupes[0].name, "luna rossa");
//! ```
//!
//! ## Crate Structure
//!
//! dupex is composed of two library crates:
//!
//! - [`dupex-core`](https://docs.rs/dupex-core) - Data model (RawEntry, Entry, Catalog, SparseVector)
//! - [`dupex-similarity`](https://docs.rs/dupex-similarity) - TF-IDF vectorizer, name resolver, ranker, dupe engine
//!
//! ## Features
//!
//! - **TF-IDF Vectorization**: Min-df pruned vocabulary, smoothed IDF, L2-normalized rows
//! - **Tiered Name Resolution**: Exact then substring matching, always literal
//! - **Cosine Ranking**: Deterministic descending order with index tie-breaks
//! - **Curated Fallback**: Hand-authored dupe lists win over vector ranking
//! - **Immutable Engine**: Build once, share across threads without locks

// Re-export core types
pub use dupex_core::{Catalog, Entry, Error, RawEntry, Result, SparseVector};

// Re-export the engine
pub use dupex_similarity::{
    resolve, DupeEngine, DupeResult, EngineConfig, PriceRange, Ranker, TfidfConfig, TfidfModel,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, DupeEngine, DupeResult, EngineConfig, Entry, Error, PriceRange, RawEntry,
        Result, SparseVector, TfidfConfig, TfidfModel,
    };
}

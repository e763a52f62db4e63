//! # dupex Similarity
//!
//! The matching and ranking engine of the dupex fragrance dupe finder.
//!
//! Given a free-text query naming a fragrance, the engine resolves it
//! against an in-memory catalog, computes pairwise textual similarity over
//! the entries' notes, and produces a deduplicated, ranked list of the most
//! similar entries - falling back to a curated lookup table when the
//! resolved entry carries pre-recorded dupes.
//!
//! ## Example
//!
//! ```rust
//! use dupex_core::RawEntry;
//! use dupex_similarity::{DupeEngine, EngineConfig};
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
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Catalog   │────>│   TF-IDF    │────>│   Ranker    │
//! │  (entries)  │     │ (fit once)  │     │  (matrix)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!       │                                        │
//!       │              ┌─────────────┐           │
//!       └─────────────>│ DupeEngine  │<──────────┘
//!                      │ (resolve,   │
//!                      │  dedup,     │
//!                      │  annotate)  │
//!                      └─────────────┘
//! ```

pub mod engine;
pub mod rank;
pub mod resolver;
pub mod tfidf;

// Re-export main types for convenience
pub use engine::{DupeEngine, DupeResult, EngineConfig, PriceRange};
pub use rank::Ranker;
pub use resolver::resolve;
pub use tfidf::{tokenize, TfidfConfig, TfidfModel};

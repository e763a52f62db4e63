//! # dupex Core
//!
//! Core data model for the dupex fragrance dupe finder.
//!
//! This crate provides the fundamental data structures:
//!
//! - [`RawEntry`] - A catalog record as supplied by the loader
//! - [`Entry`] - A normalized catalog entry with derived match keys
//! - [`Catalog`] - Immutable table of entries with positional lookup
//! - [`SparseVector`] - Sparse weighted-term vector with cosine similarity
//!
//! ## Example
//!
//! ```rust
//! use dupex_core::{Catalog, RawEntry};
//!
//! let catalog = Catalog::from_raw(vec![
//!     RawEntry::new("Sauvage", "Dior").with_notes("bergamot, pepper, ambroxan"),
//! ]);
//!
//! let entry = catalog.get(0).unwrap();
//! assert_eq!(entry.full_name, "dior sauvage");
//! ```

pub mod catalog;
pub mod entry;
pub mod error;
pub mod vector;

pub use catalog::Catalog;
pub use entry::{Entry, RawEntry};
pub use error::{Error, Result};
pub use vector::SparseVector;

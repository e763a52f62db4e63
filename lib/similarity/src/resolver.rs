//! Tiered name resolution for free-text queries.

use dupex_core::Catalog;

/// Map a free-text query to a catalog index.
///
/// Four tiers are checked in fixed order to maximize precision before
/// recall, returning the first hit; within a tier the lowest catalog index
/// wins:
///
/// 1. exact match on `name`
/// 2. exact match on `full_name`
/// 3. substring containment of the query inside `name`
/// 4. substring containment of the query inside `full_name`
///
/// Matching is case-insensitive (catalog names are already lower-cased).
/// Substring tiers use literal containment, never pattern syntax, so
/// metacharacters in the query stay inert.
#[must_use]
pub fn resolve(catalog: &Catalog, query: &str) -> Option<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let entries = catalog.entries();
    entries
        .iter()
        .position(|e| e.name == needle)
        .or_else(|| entries.iter().position(|e| e.full_name == needle))
        .or_else(|| entries.iter().position(|e| e.name.contains(&needle)))
        .or_else(|| entries.iter().position(|e| e.full_name.contains(&needle)))
}

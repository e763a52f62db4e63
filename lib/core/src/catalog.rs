use crate::{Entry, RawEntry};
use serde::{Deserialize, Serialize};

/// An immutable table of normalized catalog entries.
///
/// Built once from raw loader records; read-only for the lifetime of the
/// engine. Rebuilding the catalog invalidates any fitted model and vector
/// matrix derived from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// Normalize raw loader records into a catalog.
    ///
    /// Duplicate `(name, brand)` rows are tolerated here; dedup is the
    /// responsibility of result assembly downstream.
    #[must_use]
    pub fn from_raw(raw: Vec<RawEntry>) -> Self {
        Self {
            entries: raw.into_iter().map(Entry::from_raw).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_preserves_order() {
        let catalog = Catalog::from_raw(vec![
            RawEntry::new("Sauvage", "Dior"),
            RawEntry::new("Luna Rossa", "Prada"),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().name, "sauvage");
        assert_eq!(catalog.get(1).unwrap().name, "luna rossa");
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn test_duplicate_rows_are_tolerated() {
        let catalog = Catalog::from_raw(vec![
            RawEntry::new("Aventus", "Creed"),
            RawEntry::new("Aventus", "Creed"),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0), catalog.get(1));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_raw(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }
}

use serde::{Deserialize, Serialize};

/// A raw catalog record as supplied by the loader.
///
/// `name` and `brand` are required; a catalog row without them is malformed
/// and fails deserialization. Everything else is optional and coerced to a
/// concrete value during normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEntry {
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub rating_count: u64,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub known_dupes: Vec<String>,
}

impl RawEntry {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            notes: None,
            rating_count: 0,
            gender: None,
            known_dupes: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_rating_count(mut self, rating_count: u64) -> Self {
        self.rating_count = rating_count;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_known_dupes(mut self, known_dupes: Vec<String>) -> Self {
        self.known_dupes = known_dupes;
        self
    }
}

/// A normalized catalog entry.
///
/// `name` and `brand` are lower-cased, `full_name` is derived as
/// `brand + " " + name`, and `notes`/`gender` are never null (absent values
/// become empty strings). Entries never mutate after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub name: String,
    pub brand: String,
    pub notes: String,
    pub full_name: String,
    pub rating_count: u64,
    pub gender: String,
    pub known_dupes: Vec<String>,
}

impl Entry {
    #[must_use]
    pub fn from_raw(raw: RawEntry) -> Self {
        let name = raw.name.trim().to_lowercase();
        let brand = raw.brand.trim().to_lowercase();
        let full_name = format!("{} {}", brand, name);
        Self {
            name,
            brand,
            notes: raw.notes.unwrap_or_default(),
            full_name,
            rating_count: raw.rating_count,
            gender: raw.gender.unwrap_or_default(),
            known_dupes: raw.known_dupes,
        }
    }

    /// Whether this entry carries a curated dupe list.
    #[inline]
    #[must_use]
    pub fn has_known_dupes(&self) -> bool {
        !self.known_dupes.is_empty()
    }
}

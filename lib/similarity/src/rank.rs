//! Similarity ranking over the fitted vector matrix.

use dupex_core::SparseVector;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Owns one weighted sparse vector per catalog entry, indexed by catalog
/// position. Lifetime is tied to the fitted model the rows came from.
#[derive(Debug, Clone)]
pub struct Ranker {
    matrix: Vec<SparseVector>,
}

impl Ranker {
    #[inline]
    #[must_use]
    pub fn new(matrix: Vec<SparseVector>) -> Self {
        Self { matrix }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Fitted row for a catalog index, usable as a reference vector.
    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&SparseVector> {
        self.matrix.get(index)
    }

    /// Score every row against the reference vector by cosine similarity.
    ///
    /// Returns all `(index, score)` pairs sorted by descending score, ties
    /// broken by ascending catalog index. Scores stay in [0, 1] because
    /// TF-IDF weights are non-negative. The reference entry's own row is
    /// included; callers are responsible for excluding it.
    #[must_use]
    pub fn rank(&self, reference: &SparseVector) -> Vec<(usize, f32)> {
        let mut scored: Vec<(usize, f32)> = self
            .matrix
            .iter()
            .enumerate()
            .map(|(index, row)| (index, reference.cosine_similarity(row)))
            .collect();

        scored.sort_by_key(|&(index, score)| (Reverse(OrderedFloat(score)), index));
        scored
    }
}

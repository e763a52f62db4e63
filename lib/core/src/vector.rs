use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A sparse vector of non-negative term weights, stored as
/// `(column, weight)` pairs sorted by column.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f32)>,
}

impl SparseVector {
    /// Create a sparse vector from `(column, weight)` pairs.
    /// Entries are sorted by column; callers must not repeat a column.
    #[inline]
    #[must_use]
    pub fn new(mut entries: Vec<(usize, f32)>) -> Self {
        entries.sort_unstable_by_key(|&(col, _)| col);
        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Number of stored (non-zero) entries.
    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[(usize, f32)] {
        &self.entries
    }

    /// Dot product via merge-join over the sorted columns.
    #[inline]
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let a = &self.entries;
        let b = &other.entries;
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// L2 norm of the stored weights.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.entries
            .iter()
            .map(|&(_, w)| w * w)
            .sum::<f32>()
            .sqrt()
    }

    /// Compute cosine similarity with another vector.
    /// A zero-norm operand yields 0.0 rather than a division fault.
    #[inline]
    pub fn cosine_similarity(&self, other: &SparseVector) -> f32 {
        let norm_a = self.norm();
        let norm_b = other.norm();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        self.dot(other) / (norm_a * norm_b)
    }

    /// Normalize the vector to unit length.
    #[inline]
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > f32::EPSILON {
            let inv_norm = 1.0 / norm;
            for (_, w) in &mut self.entries {
                *w *= inv_norm;
            }
        }
    }

    /// Get normalized copy.
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut v = self.clone();
        v.normalize();
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity() {
        let v1 = SparseVector::new(vec![(0, 1.0)]);
        let v2 = SparseVector::new(vec![(0, 1.0)]);
        assert!((v1.cosine_similarity(&v2) - 1.0).abs() < 1e-6);

        let v3 = SparseVector::new(vec![(0, 1.0)]);
        let v4 = SparseVector::new(vec![(1, 1.0)]);
        assert!((v3.cosine_similarity(&v4) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_against_zero_vector_is_zero() {
        let v = SparseVector::new(vec![(0, 0.5), (3, 0.5)]);
        let zero = SparseVector::zero();
        assert_eq!(v.cosine_similarity(&zero), 0.0);
        assert_eq!(zero.cosine_similarity(&zero), 0.0);
    }

    #[test]
    fn test_dot_merge_join() {
        let v1 = SparseVector::new(vec![(0, 1.0), (2, 2.0), (5, 3.0)]);
        let v2 = SparseVector::new(vec![(2, 4.0), (5, 1.0), (7, 9.0)]);
        assert!((v1.dot(&v2) - 11.0).abs() < 1e-6);
    }

    #[test]
    fn test_entries_sorted_on_construction() {
        let v = SparseVector::new(vec![(5, 1.0), (1, 2.0), (3, 3.0)]);
        let cols: Vec<usize> = v.entries().iter().map(|&(c, _)| c).collect();
        assert_eq!(cols, vec![1, 3, 5]);
    }

    #[test]
    fn test_normalize() {
        let mut v = SparseVector::new(vec![(0, 3.0), (1, 4.0)]);
        v.normalize();
        assert!((v.norm() - 1.0).abs() < 1e-6);

        let normalized = SparseVector::new(vec![(0, 3.0), (1, 4.0)]).normalized();
        assert_eq!(v, normalized);
    }
}

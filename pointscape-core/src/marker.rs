//! Marker index bookkeeping

use crate::point::PointCategory;
use crate::point_set::PointSet;
use serde::{Deserialize, Serialize};

/// Indices into a [`PointSet`] identifying its interactive marker points.
///
/// Indices are unique, assigned in increasing order at generation time, and
/// stay valid for the lifetime of the set they were built from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkerIndex {
    indices: Vec<usize>,
}

impl MarkerIndex {
    /// Create an empty marker index
    pub fn new() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    /// Build a marker index from already-sorted, unique indices.
    ///
    /// Callers (marker placement, buffer assembly) produce indices in
    /// ascending order; this is debug-asserted rather than re-sorted.
    pub fn from_sorted(indices: Vec<usize>) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Self { indices }
    }

    /// Collect the indices of all `Marker`-category points in a set.
    ///
    /// This is how terrain scenes recover their inline points of interest.
    pub fn scan(set: &PointSet) -> Self {
        let indices = set
            .iter()
            .enumerate()
            .filter(|(_, p)| p.category == PointCategory::Marker)
            .map(|(i, _)| i)
            .collect();
        Self { indices }
    }

    /// Number of marker points
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if there are no markers
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Whether `index` refers to a marker point
    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// Iterate over the marker indices in ascending order
    pub fn iter(&self) -> std::slice::Iter<usize> {
        self.indices.iter()
    }

    /// The marker indices as a slice
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }
}

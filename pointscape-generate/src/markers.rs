//! Marker placement

use crate::rng_for;
use pointscape_core::{MarkerIndex, PointCategory, PointSet, ScenePoint};

/// Fixed highlight color for picked markers
pub const MARKER_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

/// Fixed render size for picked markers
pub const MARKER_SIZE: f32 = 0.2;

/// Seed interactive markers into a generated point set.
///
/// Samples `count` distinct points without replacement, clones their
/// positions into new `Marker`-category points (fixed color and size),
/// appends them, and returns the appended indices. When the set holds fewer
/// than `count` points, every point is used; an empty set yields an empty
/// index.
pub fn pick_markers(set: &mut PointSet, count: usize, seed: Option<u64>) -> MarkerIndex {
    let mut rng = rng_for(seed);
    let amount = count.min(set.len());
    if amount == 0 {
        return MarkerIndex::new();
    }

    let chosen = rand::seq::index::sample(&mut rng, set.len(), amount);

    let mut indices = Vec::with_capacity(amount);
    for source in chosen.iter() {
        let position = set[source].position;
        indices.push(set.len());
        set.push(ScenePoint::new(
            position,
            MARKER_COLOR,
            MARKER_SIZE,
            PointCategory::Marker,
        ));
    }

    MarkerIndex::from_sorted(indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointscape_core::Point3d;

    fn base_set(n: usize) -> PointSet {
        (0..n)
            .map(|i| {
                ScenePoint::new(
                    Point3d::new(i as f64, 0.0, 0.0),
                    [0.3, 0.3, 0.8],
                    0.05,
                    PointCategory::Structure,
                )
            })
            .collect()
    }

    #[test]
    fn test_markers_appended_with_fixed_appearance() {
        let mut set = base_set(100);
        let markers = pick_markers(&mut set, 3, Some(4));
        assert_eq!(markers.len(), 3);
        assert_eq!(set.len(), 103);
        assert_eq!(markers.as_slice(), &[100, 101, 102]);
        for &i in markers.iter() {
            assert_eq!(set[i].category, PointCategory::Marker);
            assert_eq!(set[i].color, MARKER_COLOR);
            assert_eq!(set[i].size, MARKER_SIZE);
        }
    }

    #[test]
    fn test_marker_positions_clone_existing_points() {
        let mut set = base_set(50);
        let original: Vec<_> = set.iter().map(|p| p.position).collect();
        let markers = pick_markers(&mut set, 5, Some(8));
        for &i in markers.iter() {
            assert!(original.contains(&set[i].position));
        }
    }

    #[test]
    fn test_count_clamped_to_set_size() {
        let mut set = base_set(2);
        let markers = pick_markers(&mut set, 10, Some(1));
        assert_eq!(markers.len(), 2);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_empty_set_yields_no_markers() {
        let mut set = PointSet::new();
        let markers = pick_markers(&mut set, 3, Some(1));
        assert!(markers.is_empty());
        assert!(set.is_empty());
    }

    #[test]
    fn test_sampling_without_replacement() {
        let mut set = base_set(20);
        let markers = pick_markers(&mut set, 20, Some(2));
        let mut positions: Vec<f64> = markers.iter().map(|&i| set[i].position.x).collect();
        positions.sort_by(|a, b| a.partial_cmp(b).unwrap());
        positions.dedup();
        assert_eq!(positions.len(), 20);
    }
}

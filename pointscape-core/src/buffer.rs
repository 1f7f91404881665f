//! Flattened point buffer for renderer consumption

use crate::marker::MarkerIndex;
use crate::point::PointCategory;
use crate::point_set::PointSet;

/// Structure-of-arrays form of a point set, as a renderer consumes it every
/// frame: parallel position/color/size/category arrays.
///
/// Marker points handed to [`PointBuffer::assemble`] are appended after the
/// generated points, so their buffer indices are contiguous and known in
/// advance. The buffer is assembled once per scene and read-only afterwards;
/// whole-object rotation is a renderer transform, not a per-point update.
#[derive(Debug, Clone)]
pub struct PointBuffer {
    /// x, y, z triples, one per point
    positions: Vec<f32>,
    /// r, g, b triples, one per point
    colors: Vec<f32>,
    sizes: Vec<f32>,
    categories: Vec<PointCategory>,
}

impl PointBuffer {
    /// Flatten a generated point set plus its picked marker points.
    ///
    /// Markers land after the generated points; the returned [`MarkerIndex`]
    /// covers the appended markers and any `Marker`-category points already
    /// inside `set` (terrain points of interest).
    pub fn assemble(set: &PointSet, markers: &PointSet) -> (Self, MarkerIndex) {
        let total = set.len() + markers.len();
        let mut buffer = Self {
            positions: Vec::with_capacity(total * 3),
            colors: Vec::with_capacity(total * 3),
            sizes: Vec::with_capacity(total),
            categories: Vec::with_capacity(total),
        };

        let mut marker_indices = Vec::new();
        for (i, point) in set.iter().chain(markers.iter()).enumerate() {
            buffer.push(point.position.coords.map(|c| c as f32).into(), point.color, point.size, point.category);
            if point.category == PointCategory::Marker {
                marker_indices.push(i);
            }
        }

        (buffer, MarkerIndex::from_sorted(marker_indices))
    }

    fn push(&mut self, position: [f32; 3], color: [f32; 3], size: f32, category: PointCategory) {
        self.positions.extend_from_slice(&position);
        self.colors.extend_from_slice(&color);
        self.sizes.push(size);
        self.categories.push(category);
    }

    /// Number of points in the buffer
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Flat x/y/z position array (3 components per point)
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat r/g/b color array (3 components per point)
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Per-point render sizes
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Per-point category tags
    pub fn categories(&self) -> &[PointCategory] {
        &self.categories
    }

    /// Position array as raw bytes, ready for GPU upload
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Color array as raw bytes, ready for GPU upload
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Size array as raw bytes, ready for GPU upload
    pub fn size_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.sizes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{Point3d, ScenePoint};

    fn point(x: f64, category: PointCategory) -> ScenePoint {
        let color = if category == PointCategory::Marker {
            [1.0, 0.0, 0.0]
        } else {
            [0.3, 0.3, 0.8]
        };
        ScenePoint::new(Point3d::new(x, 0.0, 0.0), color, 0.05, category)
    }

    #[test]
    fn test_assemble_appends_markers_contiguously() {
        let set = PointSet::from_points(vec![
            point(0.0, PointCategory::Structure),
            point(1.0, PointCategory::Structure),
            point(2.0, PointCategory::Pathway),
        ]);
        let markers = PointSet::from_points(vec![
            point(3.0, PointCategory::Marker),
            point(4.0, PointCategory::Marker),
        ]);

        let (buffer, index) = PointBuffer::assemble(&set, &markers);
        assert_eq!(buffer.len(), 5);
        assert_eq!(index.as_slice(), &[3, 4]);
        // Markers sit after the generated points
        assert_eq!(buffer.positions()[3 * 3], 3.0);
        assert_eq!(buffer.positions()[4 * 3], 4.0);
    }

    #[test]
    fn test_assemble_picks_up_inline_markers() {
        let set = PointSet::from_points(vec![
            point(0.0, PointCategory::Terrain),
            point(1.0, PointCategory::Marker),
            point(2.0, PointCategory::Terrain),
        ]);
        let (buffer, index) = PointBuffer::assemble(&set, &PointSet::new());
        assert_eq!(buffer.len(), 3);
        assert_eq!(index.as_slice(), &[1]);
    }

    #[test]
    fn test_parallel_array_lengths_agree() {
        let set = PointSet::from_points(vec![
            point(0.0, PointCategory::Structure),
            point(1.0, PointCategory::Terrain),
        ]);
        let (buffer, _) = PointBuffer::assemble(&set, &PointSet::new());
        assert_eq!(buffer.positions().len(), buffer.len() * 3);
        assert_eq!(buffer.colors().len(), buffer.len() * 3);
        assert_eq!(buffer.sizes().len(), buffer.len());
        assert_eq!(buffer.categories().len(), buffer.len());
        assert_eq!(buffer.position_bytes().len(), buffer.len() * 3 * 4);
    }

    #[test]
    fn test_empty_assembly() {
        let (buffer, index) = PointBuffer::assemble(&PointSet::new(), &PointSet::new());
        assert!(buffer.is_empty());
        assert!(index.is_empty());
    }
}

//! Spatial traits for scene content

use crate::point::Point3d;
use crate::point_set::PointSet;

/// Trait for objects with a spatial extent
pub trait Bounded {
    /// Get the axis-aligned bounding box of the object
    fn bounding_box(&self) -> (Point3d, Point3d);

    /// Get the center point of the object
    fn center(&self) -> Point3d;
}

impl Bounded for PointSet {
    fn bounding_box(&self) -> (Point3d, Point3d) {
        if self.is_empty() {
            return (Point3d::origin(), Point3d::origin());
        }

        let first = self[0].position;
        let mut min = first;
        let mut max = first;

        for point in self {
            let p = point.position;
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);

            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        (min, max)
    }

    fn center(&self) -> Point3d {
        let (min, max) = self.bounding_box();
        Point3d::new(
            (min.x + max.x) / 2.0,
            (min.y + max.y) / 2.0,
            (min.z + max.z) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{PointCategory, ScenePoint};

    #[test]
    fn test_bounding_box() {
        let set = PointSet::from_points(vec![
            ScenePoint::new(
                Point3d::new(-1.0, 0.0, 2.0),
                [0.5, 0.5, 0.5],
                0.1,
                PointCategory::Terrain,
            ),
            ScenePoint::new(
                Point3d::new(3.0, -2.0, 0.0),
                [0.5, 0.5, 0.5],
                0.1,
                PointCategory::Terrain,
            ),
        ]);
        let (min, max) = set.bounding_box();
        assert_eq!(min, Point3d::new(-1.0, -2.0, 0.0));
        assert_eq!(max, Point3d::new(3.0, 0.0, 2.0));
        assert_eq!(set.center(), Point3d::new(1.0, -1.0, 1.0));
    }

    #[test]
    fn test_empty_set_bounds() {
        let set = PointSet::new();
        let (min, max) = set.bounding_box();
        assert_eq!(min, Point3d::origin());
        assert_eq!(max, Point3d::origin());
    }
}

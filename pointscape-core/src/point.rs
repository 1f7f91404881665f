//! Scene point types and categories

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// The role a point plays within a scene.
///
/// Marker points are the interactive subset; everything else is decorative
/// structure the renderer draws but never picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointCategory {
    /// Points sampled on an organ surface
    Structure,
    /// Points along a branching pathway network
    Pathway,
    /// Interactive points of interest, eligible for picking
    Marker,
    /// Points of a terrain height field
    Terrain,
}

/// A single generated point: position, render color, render size and category.
///
/// Points are immutable once generated; scenes are rebuilt wholesale rather
/// than edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenePoint {
    pub position: Point3d,
    /// RGB components, each in [0, 1]
    pub color: [f32; 3],
    /// Render size, strictly positive
    pub size: f32,
    pub category: PointCategory,
}

impl ScenePoint {
    /// Create a new scene point
    pub fn new(position: Point3d, color: [f32; 3], size: f32, category: PointCategory) -> Self {
        Self {
            position,
            color,
            size,
            category,
        }
    }

    /// Check that every numeric component is finite and within its
    /// documented range.
    pub fn is_valid(&self) -> bool {
        self.position.coords.iter().all(|c| c.is_finite())
            && self.color.iter().all(|c| c.is_finite() && (0.0..=1.0).contains(c))
            && self.size.is_finite()
            && self.size > 0.0
    }
}

//! Ordered point-set container

use crate::point::ScenePoint;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered sequence of scene points.
///
/// Insertion order matters only in that marker points must keep a stable
/// index for picking. A set is owned by one scene session and rebuilt
/// wholesale on scene load, never mutated in place afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointSet {
    pub points: Vec<ScenePoint>,
}

impl PointSet {
    /// Create a new empty point set
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a new point set with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a point set from a vector of points
    pub fn from_points(points: Vec<ScenePoint>) -> Self {
        Self { points }
    }

    /// Get the number of points in the set
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point set is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point to the set
    pub fn push(&mut self, point: ScenePoint) {
        self.points.push(point);
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::slice::Iter<ScenePoint> {
        self.points.iter()
    }

    /// Reserve capacity for additional points
    pub fn reserve(&mut self, additional: usize) {
        self.points.reserve(additional);
    }
}

impl Index<usize> for PointSet {
    type Output = ScenePoint;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl IntoIterator for PointSet {
    type Item = ScenePoint;
    type IntoIter = std::vec::IntoIter<ScenePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a ScenePoint;
    type IntoIter = std::slice::Iter<'a, ScenePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Extend<ScenePoint> for PointSet {
    fn extend<I: IntoIterator<Item = ScenePoint>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl FromIterator<ScenePoint> for PointSet {
    fn from_iter<I: IntoIterator<Item = ScenePoint>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}

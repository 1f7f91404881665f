//! Core data structures for pointscape
//!
//! This crate provides the fundamental types shared by the generators and the
//! camera layer: scene points, point sets, marker indices, and the flattened
//! buffer handed to a renderer.

pub mod point;
pub mod point_set;
pub mod marker;
pub mod buffer;
pub mod traits;
pub mod error;

pub use point::*;
pub use point_set::*;
pub use marker::*;
pub use buffer::*;
pub use traits::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Matrix4};

/// Common result type for pointscape operations
pub type Result<T> = std::result::Result<T, Error>;

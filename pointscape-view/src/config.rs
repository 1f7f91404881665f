//! Camera configuration and per-scene presets

use nalgebra::Point3;
use pointscape_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Camera control modes.
///
/// The two scene variants, kept distinct rather than reconciled:
/// `FirstPerson` looks around from a fixed eye on left/middle drag and
/// ignores the right button; `PanOrbit` additionally pans position and
/// target along the world x/y axes on right drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraMode {
    FirstPerson,
    PanOrbit,
}

/// Tuning and bounds for a [`crate::FreeCamera`].
///
/// Speeds are per reference frame (60 Hz); `tick` scales them by elapsed
/// time so motion is frame-rate independent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    pub mode: CameraMode,
    /// Forward/strafe speed per reference frame
    pub move_speed: f32,
    /// Look speed in radians per pixel of pointer movement
    pub rotate_speed: f32,
    /// Global-vertical speed per reference frame
    pub vertical_speed: f32,
    /// Yaw speed of the turn keys, radians per reference frame
    pub turn_speed: f32,
    /// Fixed zoom step per wheel event
    pub zoom_step: f32,
    /// Pan speed per pixel (PanOrbit right-drag)
    pub pan_speed: f32,
    /// Closest allowed eye-to-target distance, strictly positive
    pub min_distance: f32,
    /// Farthest allowed eye-to-target distance
    pub max_distance: f32,
    /// Largest pointer delta applied per event, in pixels
    pub max_pointer_delta: f32,
    pub initial_position: Point3<f32>,
    pub initial_target: Point3<f32>,
}

impl CameraConfig {
    /// Heart scene: slow first-person camera in a small volume.
    pub fn heart() -> Self {
        Self {
            mode: CameraMode::FirstPerson,
            move_speed: 0.025,
            rotate_speed: 0.002,
            vertical_speed: 0.025,
            turn_speed: 0.01,
            zoom_step: 0.5,
            pan_speed: 0.01,
            min_distance: 0.5,
            max_distance: 20.0,
            max_pointer_delta: 20.0,
            initial_position: Point3::new(0.0, 0.0, 8.0),
            initial_target: Point3::origin(),
        }
    }

    /// Mountain scene: fast first-person camera over a large extent.
    pub fn mountain() -> Self {
        Self {
            mode: CameraMode::FirstPerson,
            move_speed: 0.525,
            rotate_speed: 0.002,
            vertical_speed: 0.525,
            turn_speed: 0.01,
            zoom_step: 2.0,
            pan_speed: 0.25,
            min_distance: 5.0,
            max_distance: 200.0,
            max_pointer_delta: 20.0,
            initial_position: Point3::new(0.0, 50.0, 150.0),
            initial_target: Point3::origin(),
        }
    }

    /// Brain scene: pan-orbit camera, right-drag pans.
    pub fn brain() -> Self {
        Self {
            mode: CameraMode::PanOrbit,
            move_speed: 0.025,
            rotate_speed: 0.002,
            vertical_speed: 0.025,
            turn_speed: 0.01,
            zoom_step: 0.5,
            pan_speed: 0.01,
            min_distance: 1.0,
            max_distance: 20.0,
            max_pointer_delta: 20.0,
            initial_position: Point3::new(0.0, 0.0, 10.0),
            initial_target: Point3::origin(),
        }
    }

    /// Check the distance bounds, the initial pose and the speeds.
    ///
    /// `min_distance` must be strictly positive (a zero eye-to-target
    /// distance degenerates the look direction) and below `max_distance`.
    /// The initial pose must already satisfy the distance bounds: zooming
    /// only accepts moves whose resulting distance is in range, so a camera
    /// constructed outside the bounds could never scroll back in.
    pub fn validate(&self) -> Result<()> {
        if !self.min_distance.is_finite() || self.min_distance <= 0.0 {
            return Err(Error::InvalidConfig(
                "min_distance must be positive and finite".to_string(),
            ));
        }
        if !self.max_distance.is_finite() || self.max_distance <= self.min_distance {
            return Err(Error::InvalidConfig(
                "max_distance must exceed min_distance".to_string(),
            ));
        }
        let initial_distance = (self.initial_target - self.initial_position).norm();
        if !initial_distance.is_finite()
            || initial_distance < self.min_distance
            || initial_distance > self.max_distance
        {
            return Err(Error::InvalidConfig(
                "initial pose must satisfy the distance bounds".to_string(),
            ));
        }
        if self.max_pointer_delta <= 0.0 {
            return Err(Error::InvalidConfig(
                "max_pointer_delta must be positive".to_string(),
            ));
        }
        let speeds = [
            self.move_speed,
            self.rotate_speed,
            self.vertical_speed,
            self.turn_speed,
            self.zoom_step,
            self.pan_speed,
        ];
        if speeds.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(Error::InvalidConfig(
                "speeds must be non-negative and finite".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::heart()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(CameraConfig::heart().validate().is_ok());
        assert!(CameraConfig::mountain().validate().is_ok());
        assert!(CameraConfig::brain().validate().is_ok());
    }

    #[test]
    fn test_zero_min_distance_rejected() {
        let mut config = CameraConfig::heart();
        config.min_distance = 0.0;
        assert!(config.validate().is_err());

        config.min_distance = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let mut config = CameraConfig::heart();
        config.max_distance = config.min_distance;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_initial_pose_outside_bounds_rejected() {
        // Starting beyond max_distance would leave the camera stuck: zoom
        // only accepts moves that land in range.
        let mut config = CameraConfig::heart();
        config.initial_position = Point3::new(0.0, 0.0, 30.0);
        assert!(config.validate().is_err());

        config.initial_position = Point3::new(0.0, 0.0, 0.1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nan_speed_rejected() {
        let mut config = CameraConfig::mountain();
        config.move_speed = f32::NAN;
        assert!(config.validate().is_err());
    }
}

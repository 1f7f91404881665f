//! Scene session lifecycle
//!
//! One session owns everything a scene needs after generation: the
//! flattened buffer, its marker index, the camera and the picker. Sessions
//! replace module-level globals; tearing one down releases the buffer
//! before a successor is built, so no stale callback can reference a
//! disposed scene.

use crate::config::CameraConfig;
use crate::controller::FreeCamera;
use crate::picking::MarkerPicker;
use pointscape_core::{MarkerIndex, PointBuffer, PointSet, Result};
use std::time::Instant;

/// Notification emitted when a marker is clicked.
///
/// The surrounding application decides what a selection means (switching to
/// an annotation view, navigation); the session only reports the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSelected {
    pub index: usize,
}

/// A loaded scene: buffer, markers, camera and picker under one owner.
///
/// Single-threaded by design; the buffer is immutable after assembly and
/// safe to share read-only if a host ever fans rendering out.
#[derive(Debug)]
pub struct SceneSession {
    buffer: PointBuffer,
    markers: MarkerIndex,
    camera: FreeCamera,
    picker: MarkerPicker,
}

impl SceneSession {
    /// Assemble a session from generated points and a camera configuration.
    ///
    /// `marker_points` are appended after `points` in the buffer, keeping
    /// marker indices contiguous; markers already inline in `points`
    /// (terrain points of interest) are picked up as well.
    pub fn new(
        points: &PointSet,
        marker_points: &PointSet,
        camera_config: CameraConfig,
    ) -> Result<Self> {
        let (buffer, markers) = PointBuffer::assemble(points, marker_points);
        let camera = FreeCamera::new(camera_config)?;
        let picker = MarkerPicker::new(markers.clone());
        Ok(Self {
            buffer,
            markers,
            camera,
            picker,
        })
    }

    /// The flattened point buffer the renderer reads every frame
    pub fn buffer(&self) -> &PointBuffer {
        &self.buffer
    }

    /// The scene's marker indices
    pub fn markers(&self) -> &MarkerIndex {
        &self.markers
    }

    pub fn camera(&self) -> &FreeCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut FreeCamera {
        &mut self.camera
    }

    /// Resolve a click against the markers; a hit is a selection.
    pub fn click(&self, candidates: &[usize]) -> Option<MarkerSelected> {
        self.picker
            .select(candidates)
            .map(|index| MarkerSelected { index })
    }

    /// Rate-limited hover resolution; see [`MarkerPicker::hover`].
    pub fn hover(&mut self, candidates: &[usize], now: Instant) -> Option<Option<usize>> {
        self.picker.hover(candidates, now)
    }

    /// Tear the session down, releasing the buffer and picker.
    ///
    /// Call before building the next scene: input callbacks registered by
    /// the host must be unhooked first, since a callback outliving its
    /// session would reference a disposed buffer.
    pub fn teardown(self) {
        drop(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointscape_core::{Point3d, PointCategory, ScenePoint};

    fn sample_scene() -> (PointSet, PointSet) {
        let points = PointSet::from_points(vec![
            ScenePoint::new(
                Point3d::new(0.0, 0.0, 0.0),
                [0.3, 0.3, 0.8],
                0.05,
                PointCategory::Structure,
            ),
            ScenePoint::new(
                Point3d::new(1.0, 0.0, 0.0),
                [0.3, 0.3, 0.8],
                0.05,
                PointCategory::Structure,
            ),
        ]);
        let markers = PointSet::from_points(vec![ScenePoint::new(
            Point3d::new(0.5, 0.0, 0.0),
            [1.0, 0.0, 0.0],
            0.2,
            PointCategory::Marker,
        )]);
        (points, markers)
    }

    #[test]
    fn test_session_wires_buffer_and_markers() {
        let (points, markers) = sample_scene();
        let session = SceneSession::new(&points, &markers, CameraConfig::heart()).unwrap();
        assert_eq!(session.buffer().len(), 3);
        assert_eq!(session.markers().as_slice(), &[2]);
    }

    #[test]
    fn test_click_resolves_marker() {
        let (points, markers) = sample_scene();
        let session = SceneSession::new(&points, &markers, CameraConfig::heart()).unwrap();
        assert_eq!(session.click(&[0, 2]), Some(MarkerSelected { index: 2 }));
        assert_eq!(session.click(&[0, 1]), None);
    }

    #[test]
    fn test_buffer_is_shareable_read_only() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<PointBuffer>();
    }

    #[test]
    fn test_invalid_camera_config_fails_session() {
        let (points, markers) = sample_scene();
        let mut config = CameraConfig::heart();
        config.max_distance = 0.1;
        assert!(SceneSession::new(&points, &markers, config).is_err());
    }
}

//! Free camera controller
//!
//! Converts pointer, wheel and key events into camera motion. The camera is
//! first-person: dragging orbits the look-at point around the fixed eye
//! position, not the eye around a subject. Movement keys translate eye and
//! target together; the turn keys adjust yaw only.

use crate::config::{CameraConfig, CameraMode};
use crate::input::{KeyState, PointerButton};
use nalgebra::{Matrix4, Point3, Vector2, Vector3};
use pointscape_core::Result;
use std::f32::consts::FRAC_PI_2;

/// Margin keeping pitch away from the poles; `cos(pitch)` must stay
/// comfortably non-zero or the look direction degenerates.
const PITCH_MARGIN: f32 = 0.1;

/// Speeds in [`CameraConfig`] are per frame at this reference rate.
const REFERENCE_TICK_HZ: f32 = 60.0;

#[derive(Debug, Clone, Copy)]
struct DragState {
    button: PointerButton,
    last: Vector2<f32>,
}

/// A first-person free camera driven by discrete input events.
///
/// All mutation goes through the event handlers and [`FreeCamera::tick`];
/// `reset` restores the configured initial pose in one atomic assignment.
#[derive(Debug, Clone)]
pub struct FreeCamera {
    config: CameraConfig,
    position: Point3<f32>,
    target: Point3<f32>,
    yaw: f32,
    pitch: f32,
    drag: Option<DragState>,
}

impl FreeCamera {
    /// Create a camera at the configured initial pose.
    ///
    /// Fails when the configuration is invalid (non-positive or inverted
    /// distance bounds, negative speeds).
    pub fn new(config: CameraConfig) -> Result<Self> {
        config.validate()?;
        let position = config.initial_position;
        let target = config.initial_target;
        let (yaw, pitch) = look_angles(&position, &target);
        Ok(Self {
            config,
            position,
            target,
            yaw,
            pitch,
            drag: None,
        })
    }

    pub fn position(&self) -> Point3<f32> {
        self.position
    }

    pub fn target(&self) -> Point3<f32> {
        self.target
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Current eye-to-target distance
    pub fn distance(&self) -> f32 {
        (self.target - self.position).norm()
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// View matrix for the renderer (right-handed, +Y up)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &Vector3::y())
    }

    /// Begin a drag. Only one button is tracked at a time; presses while a
    /// drag is active are ignored. `FirstPerson` mode tracks left and middle
    /// buttons, `PanOrbit` also tracks right for panning.
    pub fn on_pointer_down(&mut self, button: PointerButton, x: f32, y: f32) {
        if self.drag.is_some() {
            return;
        }
        let tracked = match self.config.mode {
            CameraMode::FirstPerson => matches!(button, PointerButton::Left | PointerButton::Middle),
            CameraMode::PanOrbit => true,
        };
        if tracked {
            self.drag = Some(DragState {
                button,
                last: Vector2::new(x, y),
            });
        }
    }

    /// End a drag. Only the tracked button releases it.
    pub fn on_pointer_up(&mut self, button: PointerButton) {
        if let Some(drag) = self.drag {
            if drag.button == button {
                self.drag = None;
            }
        }
    }

    /// Apply pointer movement while dragging.
    ///
    /// The delta magnitude is clamped to `max_pointer_delta` so a dropped
    /// frame cannot teleport the view. Left/middle drag looks around:
    /// `yaw -= dx * rotate_speed`, `pitch -= dy * rotate_speed` (clamped),
    /// then the target orbits the fixed eye position. Right drag in
    /// `PanOrbit` mode translates eye and target along the world x/y axes.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let Some(drag) = &mut self.drag else {
            return;
        };

        let next = Vector2::new(x, y);
        let mut delta = next - drag.last;
        drag.last = next;

        let magnitude = delta.norm();
        if magnitude > self.config.max_pointer_delta {
            delta *= self.config.max_pointer_delta / magnitude;
        }

        match drag.button {
            PointerButton::Left | PointerButton::Middle => {
                self.yaw -= delta.x * self.config.rotate_speed;
                self.pitch = (self.pitch - delta.y * self.config.rotate_speed)
                    .clamp(-FRAC_PI_2 + PITCH_MARGIN, FRAC_PI_2 - PITCH_MARGIN);
                self.retarget();
            }
            PointerButton::Right => {
                // Only reachable in PanOrbit mode
                let pan = Vector3::new(
                    -delta.x * self.config.pan_speed,
                    delta.y * self.config.pan_speed,
                    0.0,
                );
                self.position += pan;
                self.target += pan;
            }
        }
    }

    /// Apply a wheel event.
    ///
    /// A fixed step along the view direction, sign-inverted so scrolling
    /// down zooms in. The move is accepted only if the resulting distance
    /// stays within `[min_distance, max_distance]`; otherwise the state is
    /// left unchanged.
    pub fn on_scroll(&mut self, delta_y: f32) {
        if delta_y == 0.0 {
            return;
        }
        let step = if delta_y > 0.0 {
            -self.config.zoom_step
        } else {
            self.config.zoom_step
        };

        let to_target = self.target - self.position;
        let distance = to_target.norm();
        if distance <= f32::EPSILON {
            return;
        }

        let new_position = self.position + to_target / distance * step;
        let new_distance = (self.target - new_position).norm();
        if new_distance >= self.config.min_distance && new_distance <= self.config.max_distance {
            self.position = new_position;
        }
    }

    /// Advance held-key movement by `dt` seconds.
    ///
    /// Forward/back/strafe move along the camera's local axes (the full
    /// look direction, pitch included), up/down move on the global vertical;
    /// every translation is applied to eye and target identically. Turn
    /// keys adjust yaw only and re-derive the target. Motion scales with
    /// `dt` relative to the 60 Hz reference rate.
    pub fn tick(&mut self, keys: &KeyState, dt: f32) {
        if !keys.any_active() || dt <= 0.0 {
            return;
        }
        let scale = dt * REFERENCE_TICK_HZ;

        let forward = self.direction();
        let right = normalize_or(forward.cross(&Vector3::y()), Vector3::x());

        let mut translation = Vector3::zeros();
        if keys.forward {
            translation += forward * self.config.move_speed;
        }
        if keys.back {
            translation -= forward * self.config.move_speed;
        }
        if keys.right {
            translation += right * self.config.move_speed;
        }
        if keys.left {
            translation -= right * self.config.move_speed;
        }
        if keys.up {
            translation.y += self.config.vertical_speed;
        }
        if keys.down {
            translation.y -= self.config.vertical_speed;
        }

        if translation != Vector3::zeros() {
            let step = translation * scale;
            self.position += step;
            self.target += step;
        }

        let mut turned = false;
        if keys.turn_left {
            self.yaw += self.config.turn_speed * scale;
            turned = true;
        }
        if keys.turn_right {
            self.yaw -= self.config.turn_speed * scale;
            turned = true;
        }
        if turned {
            self.retarget();
        }
    }

    /// Restore the configured initial pose in one atomic assignment.
    pub fn reset(&mut self) {
        self.position = self.config.initial_position;
        self.target = self.config.initial_target;
        let (yaw, pitch) = look_angles(&self.position, &self.target);
        self.yaw = yaw;
        self.pitch = pitch;
    }

    /// Unit look direction from the current yaw and pitch
    fn direction(&self) -> Vector3<f32> {
        Vector3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
    }

    /// Re-derive the target from yaw/pitch, preserving the eye-to-target
    /// distance: the look-at point orbits the fixed eye position.
    fn retarget(&mut self) {
        let mut distance = self.distance();
        if distance <= f32::EPSILON {
            distance = self.config.min_distance;
        }
        self.target = self.position + self.direction() * distance;
    }
}

/// Derive yaw and pitch looking from `position` toward `target`.
///
/// Falls back to looking at the origin when the two coincide.
fn look_angles(position: &Point3<f32>, target: &Point3<f32>) -> (f32, f32) {
    let mut direction = target - position;
    if direction.norm() <= f32::EPSILON {
        direction = -position.coords;
    }
    let direction = normalize_or(direction, -Vector3::z());

    let yaw = direction.x.atan2(direction.z);
    let horizontal = (direction.x * direction.x + direction.z * direction.z).sqrt();
    let pitch = direction.y.atan2(horizontal);
    (yaw, pitch)
}

fn normalize_or(v: Vector3<f32>, fallback: Vector3<f32>) -> Vector3<f32> {
    let norm = v.norm();
    if norm > f32::EPSILON {
        v / norm
    } else {
        fallback
    }
}

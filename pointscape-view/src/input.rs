//! Input state types

use serde::{Deserialize, Serialize};

/// Pointer buttons the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// Movement key vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKey {
    Forward,
    Back,
    Left,
    Right,
    TurnLeft,
    TurnRight,
    Up,
    Down,
}

/// Per-frame snapshot of held movement keys.
///
/// Transient state: refreshed on every key event, never persisted across a
/// scene switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub up: bool,
    pub down: bool,
}

impl KeyState {
    /// Record a key press or release
    pub fn set(&mut self, key: MoveKey, pressed: bool) {
        match key {
            MoveKey::Forward => self.forward = pressed,
            MoveKey::Back => self.back = pressed,
            MoveKey::Left => self.left = pressed,
            MoveKey::Right => self.right = pressed,
            MoveKey::TurnLeft => self.turn_left = pressed,
            MoveKey::TurnRight => self.turn_right = pressed,
            MoveKey::Up => self.up = pressed,
            MoveKey::Down => self.down = pressed,
        }
    }

    /// Whether any movement key is held
    pub fn any_active(&self) -> bool {
        self.forward
            || self.back
            || self.left
            || self.right
            || self.turn_left
            || self.turn_right
            || self.up
            || self.down
    }

    /// Release every key
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut keys = KeyState::default();
        assert!(!keys.any_active());

        keys.set(MoveKey::Forward, true);
        keys.set(MoveKey::Up, true);
        assert!(keys.forward);
        assert!(keys.up);
        assert!(keys.any_active());

        keys.set(MoveKey::Forward, false);
        assert!(!keys.forward);
        assert!(keys.any_active());

        keys.clear();
        assert!(!keys.any_active());
    }
}

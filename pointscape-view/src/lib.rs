//! # pointscape-view
//!
//! Camera control and marker picking for pointscape scenes.
//!
//! The [`FreeCamera`] converts pointer, wheel and key input into camera
//! motion independent of any renderer; a [`SceneSession`] ties one scene's
//! buffer, camera and picker together so nothing outlives a scene switch.

pub mod config;
pub mod input;
pub mod controller;
pub mod picking;
pub mod session;

pub use config::*;
pub use input::*;
pub use controller::*;
pub use picking::*;
pub use session::*;

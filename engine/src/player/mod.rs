//! Player Module
//!
//! The player as seen by the camera: a pose with an orthonormal basis.
//!
//! - [`PlayerAnchor`] - trait passed into every camera update
//! - [`PlayerPose`] - value type implementing it

pub mod anchor;

pub use anchor::{DEFAULT_CENTER_OFFSET, PlayerAnchor, PlayerPose};

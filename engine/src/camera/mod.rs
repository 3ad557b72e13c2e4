//! Camera Module
//!
//! Third-person/first-person camera rig for a voxel world.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod clipping;
pub mod config;
pub mod controller;
pub mod first_person;
pub mod follow;
pub mod mode;
pub mod rig;
pub mod zoom;

pub use clipping::{ClipOutcome, ClippingResolver};
pub use config::CameraConfig;
pub use controller::CameraController;
pub use first_person::FirstPersonBinder;
pub use follow::{AutoFollowCache, FollowSolver};
pub use mode::{CameraEvent, CameraMode, ModeSwitcher};
pub use rig::CameraRig;
pub use zoom::ZoomController;

//! Voxel Camera Engine Library
//!
//! Camera rig for a voxel action game: follows the player from behind,
//! switches to first person when zoomed all the way in, and keeps the
//! camera out of solid blocks.
//!
//! # Modules
//!
//! - [`camera`] - Rig state, follow/first-person solvers, zoom, clipping, mode switching
//! - [`world`] - Voxel solidity query and a chunked reference grid
//! - [`player`] - Player pose the camera follows
//! - [`input`] - Platform-agnostic movement, mouse and scroll state
//! - [`frame`] - Per-frame timing context
//! - [`error`] - Config loading errors
//!
//! # Example
//!
//! ```no_run
//! use glam::IVec3;
//! use voxel_camera_engine::camera::CameraController;
//! use voxel_camera_engine::frame::{FrameClock, GameMode};
//! use voxel_camera_engine::input::{CameraInput, KeyCode};
//! use voxel_camera_engine::player::PlayerPose;
//! use voxel_camera_engine::world::VoxelGrid;
//!
//! let mut world = VoxelGrid::default();
//! world.fill_box(IVec3::new(-4, 0, 3), IVec3::new(4, 3, 3), true);
//!
//! let mut player = PlayerPose::default();
//! let mut camera = CameraController::default();
//! camera.initialize(&player);
//!
//! let mut clock = FrameClock::new();
//! clock.set_game_mode(GameMode::Game);
//! let mut input = CameraInput::new();
//!
//! loop {
//!     input.keyboard.handle_key(KeyCode::W, true);
//!     let frame = clock.tick();
//!     camera.update(&frame, &mut input, &mut player, &world);
//!     for _event in camera.drain_events() {
//!         // Update mode selector widgets
//!     }
//!     let _eye = camera.position();
//! }
//! ```

pub mod camera;
pub mod error;
pub mod frame;
pub mod input;
pub mod player;
pub mod world;

// Re-export the types a game loop touches every frame
pub use camera::{CameraConfig, CameraController, CameraEvent, CameraMode, CameraRig};
pub use error::{CameraError, Result};
pub use frame::{FrameClock, FrameContext, GameMode};
pub use input::{CameraInput, KeyCode};
pub use player::{PlayerAnchor, PlayerPose};
pub use world::{VoxelGrid, VoxelWorldQuery};

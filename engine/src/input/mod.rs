//! Input Module
//!
//! Platform-agnostic input state the camera consumes each frame. The
//! windowing layer translates its events into these types.
//!
//! # Example
//!
//! ```rust,ignore
//! use voxel_camera_engine::input::{CameraInput, KeyCode};
//!
//! let mut input = CameraInput::new();
//!
//! input.keyboard.handle_key(KeyCode::W, true);
//! input.mouse.set_captured(true);
//! input.mouse.accumulate_delta(12.0, 0.0);
//!
//! assert!(input.is_moving());
//! ```

pub mod gamepad;
pub mod keyboard;
pub mod mouse_state;

pub use gamepad::{DEFAULT_STICK_DEADZONE, GamepadState};
pub use keyboard::{KeyCode, MovementKeys};
pub use mouse_state::MouseLookState;

/// Combined keyboard, gamepad and mouse state for one camera.
#[derive(Debug, Clone, Default)]
pub struct CameraInput {
    pub keyboard: MovementKeys,
    pub gamepad: GamepadState,
    pub mouse: MouseLookState,
}

impl CameraInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the player is issuing movement input from any device.
    pub fn is_moving(&self) -> bool {
        self.keyboard.is_moving() || self.gamepad.is_moving()
    }

    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.gamepad.disconnect();
        self.mouse.reset();
    }
}

//! Gamepad Input Module
//!
//! Left-stick state with a radial dead-zone. Only used to decide whether the
//! player is moving; the windowing layer feeds raw axis values in.

use glam::Vec2;

/// Stick deflection below which the stick counts as centred.
pub const DEFAULT_STICK_DEADZONE: f32 = 0.2;

/// Movement stick state.
#[derive(Debug, Clone, Copy)]
pub struct GamepadState {
    /// Raw left-stick axes in `[-1, 1]`
    pub left_stick: Vec2,
    /// Radial dead-zone
    pub deadzone: f32,
    /// Whether a gamepad is connected at all
    pub connected: bool,
}

impl Default for GamepadState {
    fn default() -> Self {
        Self {
            left_stick: Vec2::ZERO,
            deadzone: DEFAULT_STICK_DEADZONE,
            connected: false,
        }
    }
}

impl GamepadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw stick axes, clamped to the unit square.
    pub fn set_left_stick(&mut self, x: f32, y: f32) {
        self.left_stick = Vec2::new(x, y).clamp(Vec2::NEG_ONE, Vec2::ONE);
    }

    /// Stick vector with the dead-zone removed and rescaled to `[0, 1]`.
    pub fn movement(&self) -> Vec2 {
        if !self.connected {
            return Vec2::ZERO;
        }
        let magnitude = self.left_stick.length();
        if magnitude <= self.deadzone || self.deadzone >= 1.0 {
            return Vec2::ZERO;
        }
        let scaled = ((magnitude - self.deadzone) / (1.0 - self.deadzone)).min(1.0);
        self.left_stick / magnitude * scaled
    }

    /// Whether the stick is pushed past the dead-zone.
    pub fn is_moving(&self) -> bool {
        self.movement() != Vec2::ZERO
    }

    pub fn disconnect(&mut self) {
        *self = Self {
            deadzone: self.deadzone,
            ..Default::default()
        };
    }
}

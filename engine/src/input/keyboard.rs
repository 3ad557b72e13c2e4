//! Keyboard Input Module
//!
//! Held movement directions as a bit set. The follow camera asks only
//! whether the player is moving; debug free-fly reads the per-axis sums.
//! Decoupled from any windowing system through a local [`KeyCode`].

use glam::Vec3;

/// Key codes the camera layer understands, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    Q,
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Catch-all for unhandled keys
    Unknown,
}

/// A direction a movement key pushes in, in camera-local terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    #[inline]
    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl KeyCode {
    fn direction(self) -> Option<Direction> {
        match self {
            KeyCode::W | KeyCode::ArrowUp => Some(Direction::Forward),
            KeyCode::S | KeyCode::ArrowDown => Some(Direction::Backward),
            KeyCode::A | KeyCode::ArrowLeft => Some(Direction::Left),
            KeyCode::D | KeyCode::ArrowRight => Some(Direction::Right),
            KeyCode::Space => Some(Direction::Up),
            KeyCode::Q => Some(Direction::Down),
            KeyCode::Unknown => None,
        }
    }
}

/// Set of held movement directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    held: u8,
}

impl MovementKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release. Returns `false` for keys that do not
    /// move the player.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let Some(direction) = key.direction() else {
            return false;
        };
        if pressed {
            self.held |= direction.bit();
        } else {
            self.held &= !direction.bit();
        }
        true
    }

    /// Whether any movement direction is held. Drives the follow modifier.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.held != 0
    }

    pub fn reset(&mut self) {
        self.held = 0;
    }

    /// Held directions summed per axis: `x` right, `y` up, `z` forward.
    ///
    /// Opposite keys cancel, so every component is -1, 0 or 1.
    pub fn fly_axes(&self) -> Vec3 {
        Vec3::new(
            self.axis(Direction::Right, Direction::Left),
            self.axis(Direction::Up, Direction::Down),
            self.axis(Direction::Forward, Direction::Backward),
        )
    }

    #[inline]
    fn axis(&self, positive: Direction, negative: Direction) -> f32 {
        let held = |d: Direction| ((self.held & d.bit()) != 0) as i8;
        (held(positive) - held(negative)) as f32
    }
}

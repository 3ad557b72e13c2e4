//! Mouse Look State
//!
//! Accumulates raw mouse motion and scroll-wheel steps between frames so the
//! camera can consume them once per update.
//!
//! # Example
//!
//! ```rust,ignore
//! use voxel_camera_engine::input::MouseLookState;
//!
//! let mut mouse = MouseLookState::new();
//!
//! // In event loop: accumulate raw motion and wheel steps
//! mouse.accumulate_delta(10.0, -5.0);
//! mouse.accumulate_scroll(-1.0);
//!
//! // In update loop: consume once per frame
//! let (dx, dy) = mouse.consume_delta();
//! let steps = mouse.consume_scroll();
//! ```

/// Mouse motion and wheel accumulator.
#[derive(Debug, Clone, Default)]
pub struct MouseLookState {
    /// Accumulated horizontal delta since last consume.
    delta_x: f32,
    /// Accumulated vertical delta since last consume.
    delta_y: f32,
    /// Accumulated wheel steps since last consume (positive = towards the player).
    scroll: f32,
    /// Whether mouse motion currently drives the camera.
    captured: bool,
}

impl MouseLookState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate raw mouse motion. Ignored while not captured.
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        if self.captured {
            self.delta_x += dx;
            self.delta_y += dy;
        }
    }

    /// Accumulate scroll-wheel steps in lines.
    ///
    /// Scrolling up (positive) zooms in.
    #[inline]
    pub fn accumulate_scroll(&mut self, lines: f32) {
        self.scroll += lines;
    }

    /// Accumulate a pixel-based scroll (trackpads), about 100 px per line.
    #[inline]
    pub fn accumulate_scroll_pixels(&mut self, pixels: f64) {
        self.scroll += (pixels / 100.0) as f32;
    }

    /// Return the accumulated motion and reset it to zero.
    #[inline]
    pub fn consume_delta(&mut self) -> (f32, f32) {
        let delta = (self.delta_x, self.delta_y);
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        delta
    }

    /// Return the accumulated wheel steps and reset them to zero.
    #[inline]
    pub fn consume_scroll(&mut self) -> f32 {
        std::mem::take(&mut self.scroll)
    }

    /// Discard any accumulated motion without using it.
    pub fn clear_delta(&mut self) {
        self.delta_x = 0.0;
        self.delta_y = 0.0;
    }

    /// Start or stop routing mouse motion to the camera.
    ///
    /// Releasing the capture drops pending motion so the next capture does
    /// not jump.
    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
        if !captured {
            self.clear_delta();
        }
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    #[inline]
    pub fn peek_delta(&self) -> (f32, f32) {
        (self.delta_x, self.delta_y)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

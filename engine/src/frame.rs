//! Frame Timing Module
//!
//! Per-frame context threaded through every camera update instead of a global
//! timer. The update loop builds one [`FrameContext`] per rendered frame.

use std::time::Instant;

/// Longest frame step fed to the camera, in seconds.
///
/// A stalled frame (debugger break, window drag) would otherwise push the
/// explicit-Euler smoothing past its target.
pub const DEFAULT_MAX_DT: f32 = 0.25;

/// Top-level game state, as far as the camera cares.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GameMode {
    /// Menus and title screens
    #[default]
    Frontend,
    /// Active play - the only state where clipping and mode switching run
    Game,
    /// Simulation halted, camera frozen in place
    Paused,
}

impl GameMode {
    #[inline]
    pub fn is_active_play(&self) -> bool {
        *self == GameMode::Game
    }
}

/// Everything an update needs to know about the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameContext {
    /// Elapsed time since the previous frame in seconds (never negative)
    pub dt: f32,
    /// Monotonic clock sample in seconds since the clock started
    pub time: f64,
    /// Game state this frame runs in
    pub game_mode: GameMode,
}

impl FrameContext {
    /// Build a frame context for active play.
    pub fn playing(dt: f32) -> Self {
        Self::new(dt, 0.0, GameMode::Game)
    }

    pub fn new(dt: f32, time: f64, game_mode: GameMode) -> Self {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        Self {
            dt,
            time,
            game_mode,
        }
    }
}

/// Measures frame deltas from a monotonic clock.
///
/// `tick()` reads the wall clock; `tick_at()` takes an explicit sample so
/// tests can step time deterministically. A new clock reports
/// [`GameMode::default()`]; the game loop switches it with
/// [`FrameClock::set_game_mode`] once play starts.
#[derive(Clone, Debug)]
pub struct FrameClock {
    start: Instant,
    last_sample: Option<f64>,
    max_dt: f32,
    game_mode: GameMode,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            start: Instant::now(),
            last_sample: None,
            max_dt: DEFAULT_MAX_DT,
            game_mode: GameMode::default(),
        }
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock that clamps each step to `max_dt` seconds.
    pub fn with_max_dt(max_dt: f32) -> Self {
        Self {
            max_dt: max_dt.max(0.0),
            ..Default::default()
        }
    }

    pub fn set_game_mode(&mut self, game_mode: GameMode) {
        self.game_mode = game_mode;
    }

    pub fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    /// Sample the monotonic clock and produce this frame's context.
    pub fn tick(&mut self) -> FrameContext {
        let now = self.start.elapsed().as_secs_f64();
        self.tick_at(now)
    }

    /// Produce a frame context from an explicit clock sample (seconds).
    ///
    /// The first sample yields `dt = 0`. Samples that go backwards also
    /// yield `dt = 0`.
    pub fn tick_at(&mut self, time: f64) -> FrameContext {
        let dt = match self.last_sample {
            Some(previous) => ((time - previous) as f32).clamp(0.0, self.max_dt),
            None => 0.0,
        };
        self.last_sample = Some(time);
        FrameContext::new(dt, time, self.game_mode)
    }
}

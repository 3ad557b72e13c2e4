//! Camera Configuration
//!
//! Every tuning constant of the camera rig in one serde struct, so a game can
//! ship a JSON tuning file and fall back to the defaults for missing fields.
//!
//! ```json
//! { "max_zoom_distance": 20.0, "settled_modifier": 8.0 }
//! ```

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

use crate::error::{CameraError, Result};

/// Distance below which the rig is forced into first person.
pub const FIRST_PERSON_THRESHOLD: f32 = 1.5;
/// Closest the user can zoom. Below the threshold so zooming in reaches first person.
pub const MIN_ZOOM_DISTANCE: f32 = 1.0;
/// Farthest the user can zoom.
pub const MAX_ZOOM_DISTANCE: f32 = 15.0;
/// Distance beyond which the follow catch-up speed reaches zero.
pub const CATCHUP_FALLOFF_DISTANCE: f32 = 20.0;
/// Movement modifier while the player is actively moving.
pub const MOVING_MODIFIER: f32 = 0.125;
/// Movement modifier once the player has stopped for a while.
pub const SETTLED_MODIFIER: f32 = 10.0;
/// Maximum clipping iterations per frame.
pub const MAX_CLIP_ITERATIONS: u32 = 100;

const_assert!(MIN_ZOOM_DISTANCE > 0.0);
const_assert!(MIN_ZOOM_DISTANCE < FIRST_PERSON_THRESHOLD);
const_assert!(FIRST_PERSON_THRESHOLD < MAX_ZOOM_DISTANCE);
const_assert!(MAX_ZOOM_DISTANCE <= CATCHUP_FALLOFF_DISTANCE);
const_assert!(MOVING_MODIFIER < SETTLED_MODIFIER);

/// Camera rig tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Behind/above ratio of the follow anchor, normalized before use
    pub follow_ratio: Vec2,
    /// Modifier used while the player moves (fast settle)
    pub moving_modifier: f32,
    /// Modifier the camera relaxes back to when the player stops
    pub settled_modifier: f32,
    /// How fast the modifier relaxes back, per second
    pub modifier_relax_rate: f32,
    /// Distance at which catch-up speed falls to zero
    pub catchup_falloff_distance: f32,
    /// Heading error below which auto-follow does not rotate
    pub rotation_deadband_degrees: f32,
    /// Offset of each clipping probe from the camera center
    pub probe_offset: f32,
    /// Iteration budget of the clipping resolver
    pub max_clip_iterations: u32,
    /// Distance that forces first person
    pub first_person_threshold: f32,
    /// Smallest zoom target
    pub min_zoom_distance: f32,
    /// Largest zoom target
    pub max_zoom_distance: f32,
    /// Distance (and zoom target) the rig starts with
    pub initial_distance: f32,
    /// Zoom target change per scroll line
    pub scroll_zoom_step: f32,
    /// Mouse-orbit rotation in radians per pixel
    pub orbit_sensitivity: f32,
    /// First-person/debug look rotation in radians per pixel
    pub look_sensitivity: f32,
    /// Pitch limit for orbit and look rotation
    pub pitch_limit_degrees: f32,
    /// Debug free-fly speed in world units per second
    pub debug_fly_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            follow_ratio: Vec2::new(2.5, 1.0),
            moving_modifier: MOVING_MODIFIER,
            settled_modifier: SETTLED_MODIFIER,
            modifier_relax_rate: 2.0,
            catchup_falloff_distance: CATCHUP_FALLOFF_DISTANCE,
            rotation_deadband_degrees: 1.0,
            probe_offset: 0.25,
            max_clip_iterations: MAX_CLIP_ITERATIONS,
            first_person_threshold: FIRST_PERSON_THRESHOLD,
            min_zoom_distance: MIN_ZOOM_DISTANCE,
            max_zoom_distance: MAX_ZOOM_DISTANCE,
            initial_distance: 5.0,
            scroll_zoom_step: 0.5,
            orbit_sensitivity: 0.005,
            look_sensitivity: 0.002,
            pitch_limit_degrees: 89.0,
            debug_fly_speed: 10.0,
        }
    }
}

impl CameraConfig {
    /// Parse and validate a JSON tuning string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CameraConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON tuning file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json).inspect_err(|e| {
            log::warn!("[CameraConfig] rejected {}: {e}", path.display());
        })?;
        log::debug!("[CameraConfig] loaded {}", path.display());
        Ok(config)
    }

    /// Serialize as pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Normalized `(rx, ry, 0)` follow ratio.
    pub fn normalized_follow_ratio(&self) -> Vec2 {
        self.follow_ratio.normalize_or(Vec2::new(1.0, 0.0))
    }

    pub fn pitch_limit_radians(&self) -> f32 {
        self.pitch_limit_degrees.to_radians()
    }

    /// Clamp a distance request into the zoom range.
    #[inline]
    pub fn clamp_zoom(&self, distance: f32) -> f32 {
        distance.clamp(self.min_zoom_distance, self.max_zoom_distance)
    }

    /// Check every field the rig relies on.
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("moving_modifier", self.moving_modifier),
            ("settled_modifier", self.settled_modifier),
            ("modifier_relax_rate", self.modifier_relax_rate),
            ("catchup_falloff_distance", self.catchup_falloff_distance),
            ("rotation_deadband_degrees", self.rotation_deadband_degrees),
            ("probe_offset", self.probe_offset),
            ("first_person_threshold", self.first_person_threshold),
            ("min_zoom_distance", self.min_zoom_distance),
            ("max_zoom_distance", self.max_zoom_distance),
            ("initial_distance", self.initial_distance),
            ("scroll_zoom_step", self.scroll_zoom_step),
            ("orbit_sensitivity", self.orbit_sensitivity),
            ("look_sensitivity", self.look_sensitivity),
            ("pitch_limit_degrees", self.pitch_limit_degrees),
            ("debug_fly_speed", self.debug_fly_speed),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(CameraError::invalid(field, "must be finite"));
            }
            if value < 0.0 {
                return Err(CameraError::invalid(field, "must not be negative"));
            }
        }
        if !self.follow_ratio.is_finite() || self.follow_ratio.length_squared() == 0.0 {
            return Err(CameraError::invalid(
                "follow_ratio",
                "must be finite and non-zero",
            ));
        }
        if self.min_zoom_distance <= 0.0 {
            return Err(CameraError::invalid("min_zoom_distance", "must be positive"));
        }
        if self.min_zoom_distance >= self.first_person_threshold {
            return Err(CameraError::invalid(
                "min_zoom_distance",
                format!(
                    "{} must be below first_person_threshold {}",
                    self.min_zoom_distance, self.first_person_threshold
                ),
            ));
        }
        if self.first_person_threshold >= self.max_zoom_distance {
            return Err(CameraError::invalid(
                "first_person_threshold",
                format!(
                    "{} must be below max_zoom_distance {}",
                    self.first_person_threshold, self.max_zoom_distance
                ),
            ));
        }
        if self.catchup_falloff_distance <= 0.0 {
            return Err(CameraError::invalid(
                "catchup_falloff_distance",
                "must be positive",
            ));
        }
        if self.settled_modifier < self.moving_modifier {
            return Err(CameraError::invalid(
                "settled_modifier",
                "must not be below moving_modifier",
            ));
        }
        if self.max_clip_iterations == 0 {
            return Err(CameraError::invalid(
                "max_clip_iterations",
                "must be at least 1",
            ));
        }
        if self.pitch_limit_degrees >= 90.0 {
            return Err(CameraError::invalid(
                "pitch_limit_degrees",
                "must be below 90",
            ));
        }
        Ok(())
    }
}

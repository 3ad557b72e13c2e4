//! Follow Solver
//!
//! Keeps the camera behind and above the player in the two follow modes.
//!
//! Per frame:
//! 1. The movement modifier snaps to the responsive value while the player
//!    moves and relaxes linearly back to the settled value otherwise.
//! 2. The behind-player anchor is computed from the player basis and the
//!    current distance, then low-pass filtered into `smoothed_anchor`.
//! 3. The camera is carried along with the look-at point, its height is
//!    damped towards the smoothed anchor, and (auto-follow only) it swings
//!    around the player towards the smoothed anchor's heading.
//! 4. The basis is rebuilt to look at the player.
//!
//! Horizontal tracking is rotation only. Blending the horizontal position
//! directly makes the camera strafe when the player turns.

use glam::Vec3;

use super::config::CameraConfig;
use super::rig::CameraRig;
use crate::player::PlayerAnchor;

/// Vectors the follow solver carries between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoFollowCache {
    /// Instantaneous desired anchor point this frame
    pub behind_player_target: Vec3,
    /// Low-pass filtered anchor the camera actually chases
    pub smoothed_anchor: Vec3,
    /// Between the moving and settled modifiers
    pub movement_modifier: f32,
    /// Look-at point from the previous frame, `None` before the first frame
    pub last_look_at: Option<Vec3>,
}

impl Default for AutoFollowCache {
    fn default() -> Self {
        Self {
            behind_player_target: Vec3::ZERO,
            smoothed_anchor: Vec3::ZERO,
            movement_modifier: super::config::SETTLED_MODIFIER,
            last_look_at: None,
        }
    }
}

/// Follow-mode position and orientation solver.
#[derive(Clone, Debug, Default)]
pub struct FollowSolver {
    pub cache: AutoFollowCache,
}

impl FollowSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point `distance` behind and above the player's look-at point.
    ///
    /// `anchor = center + offset - forward·(distance·rx) + up·(distance·ry)`
    pub fn behind_player_anchor(
        config: &CameraConfig,
        player: &impl PlayerAnchor,
        distance: f32,
    ) -> Vec3 {
        let ratio = config.normalized_follow_ratio();
        player.look_at_point() - player.forward() * (distance * ratio.x)
            + player.up() * (distance * ratio.y)
    }

    /// Catch-up speed: faster for close cameras, zero at the falloff distance.
    pub fn catchup_speed(config: &CameraConfig, distance: f32, modifier: f32) -> f32 {
        let falloff = config.catchup_falloff_distance;
        let distance = distance.clamp(0.0, falloff);
        (1.0 - distance / falloff) * modifier
    }

    /// Advance the movement modifier by one frame.
    pub fn update_modifier(&mut self, config: &CameraConfig, moving: bool, dt: f32) {
        let modifier = &mut self.cache.movement_modifier;
        if moving {
            *modifier = config.moving_modifier;
        } else if *modifier < config.settled_modifier {
            *modifier = (*modifier + config.modifier_relax_rate * dt).min(config.settled_modifier);
        } else {
            *modifier = config.settled_modifier;
        }
    }

    /// Snap the camera to the behind-player anchor with no lag.
    ///
    /// Used on mode recovery so stale cached vectors cannot cause a lurch.
    pub fn initialize_anchor(
        &mut self,
        rig: &mut CameraRig,
        player: &impl PlayerAnchor,
        config: &CameraConfig,
    ) {
        let anchor = Self::behind_player_anchor(config, player, rig.distance);
        self.cache.behind_player_target = anchor;
        self.cache.smoothed_anchor = anchor;
        self.cache.last_look_at = Some(player.look_at_point());
        rig.set_fake_position(anchor);
        rig.look_at(player.look_at_point(), player.up());
        log::debug!("[FollowSolver] anchor initialized at {anchor:?}");
    }

    /// Run one follow frame.
    ///
    /// `auto_follow` selects auto-follow (camera controls orientation) over
    /// mouse-orbit (player controls orientation). Both keep the cache fresh;
    /// mouse-orbit only carries the camera with the player and re-aims it.
    pub fn update(
        &mut self,
        rig: &mut CameraRig,
        player: &impl PlayerAnchor,
        config: &CameraConfig,
        moving: bool,
        dt: f32,
        auto_follow: bool,
    ) {
        let look_at = player.look_at_point();
        let player_up = player.up();

        if let Some(last) = self.cache.last_look_at {
            let carried = look_at - last;
            if carried.is_finite() {
                rig.set_fake_position(rig.fake_position() + carried);
            }
        }
        self.cache.last_look_at = Some(look_at);

        self.update_modifier(config, moving, dt);
        let modifier = self.cache.movement_modifier;
        let catchup = Self::catchup_speed(config, rig.distance, modifier);

        let anchor = Self::behind_player_anchor(config, player, rig.distance);
        self.cache.behind_player_target = anchor;

        let blend = (catchup * 2.0 * dt).clamp(0.0, 1.0);
        self.cache.smoothed_anchor += (anchor - self.cache.smoothed_anchor) * blend;

        if auto_follow {
            let vertical_gap = (self.cache.smoothed_anchor - rig.fake_position()).dot(player_up);
            let vertical_blend = (catchup * dt).clamp(0.0, 1.0);
            rig.set_fake_position(rig.fake_position() + player_up * (vertical_gap * vertical_blend));

            self.swing_towards_anchor(rig, look_at, player_up, config, modifier, dt);
        }

        rig.look_at(look_at, player_up);
    }

    /// Rotate the camera around the player towards the heading from the
    /// smoothed anchor to the look-at point.
    fn swing_towards_anchor(
        &self,
        rig: &mut CameraRig,
        look_at: Vec3,
        player_up: Vec3,
        config: &CameraConfig,
        modifier: f32,
        dt: f32,
    ) {
        let flatten = |v: Vec3| (v - player_up * v.dot(player_up)).normalize_or_zero();

        let target_facing = flatten(look_at - self.cache.smoothed_anchor);
        let camera_facing = flatten(rig.facing());
        if target_facing == Vec3::ZERO || camera_facing == Vec3::ZERO {
            log::trace!("[FollowSolver] degenerate heading, skipping rotation");
            return;
        }

        let mut degrees = target_facing
            .dot(camera_facing)
            .clamp(-1.0, 1.0)
            .acos()
            .to_degrees();
        if degrees <= config.rotation_deadband_degrees {
            return;
        }
        if target_facing.cross(camera_facing).dot(player_up) > 0.0 {
            degrees = -degrees;
        }

        let step = (modifier * dt).clamp(0.0, 1.0);
        rig.rotate_around_point(degrees * step, look_at, player_up);
    }
}

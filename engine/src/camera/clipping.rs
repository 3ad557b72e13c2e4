//! Clipping Resolver
//!
//! Keeps the render position out of solid voxels by walking the camera
//! forward along its facing, towards the player, until a small cross of
//! probes around it is clear.
//!
//! The probes sit `probe_offset` to the right, left, below and above the
//! candidate, along the player's right and up vectors. A single point test
//! lets the camera slip through block edges and corners; four offsets
//! approximate a small disk around the optical center.
//!
//! The walk is bounded by `max_clip_iterations`. Running out of iterations
//! while still inside geometry is accepted; the camera then shows a bounded
//! interpenetration instead of stalling the frame.

use glam::Vec3;

use super::config::CameraConfig;
use super::mode::CameraMode;
use super::rig::CameraRig;
use crate::frame::FrameContext;
use crate::player::PlayerAnchor;
use crate::world::VoxelWorldQuery;

/// Result of one clipping pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipOutcome {
    /// Collision-free (within budget) render position
    pub position: Vec3,
    /// Candidates tested, never more than the iteration budget
    pub iterations: u32,
    /// Steps the candidate was advanced along the facing
    pub advances: u32,
    /// Step length used for each advance
    pub increment: f32,
    /// Whether the final position still has a solid probe
    pub still_colliding: bool,
}

impl ClipOutcome {
    /// Outcome for a position passed through untouched.
    pub fn passthrough(position: Vec3) -> Self {
        Self {
            position,
            iterations: 0,
            advances: 0,
            increment: 0.0,
            still_colliding: false,
        }
    }
}

/// Iterative voxel clipping for the camera render position.
#[derive(Clone, Copy, Debug)]
pub struct ClippingResolver {
    pub probe_offset: f32,
    pub max_iterations: u32,
}

impl Default for ClippingResolver {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl ClippingResolver {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            probe_offset: config.probe_offset,
            max_iterations: config.max_clip_iterations,
        }
    }

    /// Whether any of the four probes around `candidate` is solid.
    pub fn probes_solid(
        &self,
        candidate: Vec3,
        player: &impl PlayerAnchor,
        world: &impl VoxelWorldQuery,
    ) -> bool {
        let right = player.right() * self.probe_offset;
        let up = player.up() * self.probe_offset;
        [candidate + right, candidate - right, candidate - up, candidate + up]
            .into_iter()
            .any(|probe| world.is_solid_at(probe))
    }

    /// Clip the rig's logical position and commit the result as its render
    /// position.
    ///
    /// Outside active play, or in debug mode, the logical position is
    /// committed unchanged.
    pub fn apply(
        &self,
        rig: &mut CameraRig,
        player: &impl PlayerAnchor,
        world: &impl VoxelWorldQuery,
        mode: CameraMode,
        frame: &FrameContext,
    ) -> ClipOutcome {
        let before_clipping = rig.fake_position();
        let outcome = if frame.game_mode.is_active_play() && mode.is_gameplay() {
            self.resolve(before_clipping, rig.facing(), player, world)
        } else {
            ClipOutcome::passthrough(before_clipping)
        };
        rig.set_position(outcome.position);
        outcome
    }

    /// Walk `before_clipping` along `facing` until the probes are clear.
    ///
    /// The step is the camera-to-player distance divided by the iteration
    /// budget. Each iteration tests the candidate once, and it only
    /// advances while budget remains, so the returned position is always the
    /// last one tested and the walk stops one step short of the look-at point.
    pub fn resolve(
        &self,
        before_clipping: Vec3,
        facing: Vec3,
        player: &impl PlayerAnchor,
        world: &impl VoxelWorldQuery,
    ) -> ClipOutcome {
        let facing = facing.normalize_or_zero();
        let budget = self.max_iterations.max(1);
        let increment = (player.look_at_point() - before_clipping).length() / budget as f32;
        let can_advance = facing != Vec3::ZERO && increment > 0.0 && increment.is_finite();

        let mut outcome = ClipOutcome {
            increment,
            ..ClipOutcome::passthrough(before_clipping)
        };

        loop {
            outcome.iterations += 1;
            outcome.still_colliding = self.probes_solid(outcome.position, player, world);
            if !outcome.still_colliding {
                return outcome;
            }
            if outcome.iterations >= budget {
                break;
            }
            if !can_advance {
                log::trace!("[ClippingResolver] no direction to advance along");
                break;
            }
            outcome.position += facing * increment;
            outcome.advances += 1;
            log::trace!(
                "[ClippingResolver] step {} -> {:?}",
                outcome.advances,
                outcome.position
            );
        }

        log::debug!(
            "[ClippingResolver] stopped after {} of {budget} tests, camera still inside geometry",
            outcome.iterations
        );
        outcome
    }
}

//! Camera Controller Module
//!
//! Per-frame orchestration of the camera rig. One [`CameraController::update`]
//! call runs the whole pipeline in a fixed order:
//!
//! 1. Input: mouse deltas and scroll lines are consumed; scroll edits the
//!    zoom target (or recovers from a forced first person).
//! 2. [`ModeSwitcher`] may force first person.
//! 3. The mode solver runs: [`FollowSolver`] for the two follow modes (plus
//!    the mouse orbit), [`FirstPersonBinder`] for first person, free-fly for debug.
//! 4. [`ZoomController`] eases the distance.
//! 5. [`ClippingResolver`] commits the render position.
//!
//! The controller is window-system agnostic. The player and the voxel world
//! are passed in every frame rather than stored.

use glam::Vec3;

use super::clipping::{ClipOutcome, ClippingResolver};
use super::config::CameraConfig;
use super::first_person::FirstPersonBinder;
use super::follow::FollowSolver;
use super::mode::{CameraEvent, CameraMode, ModeSwitcher};
use super::rig::CameraRig;
use super::zoom::ZoomController;
use crate::error::Result;
use crate::frame::FrameContext;
use crate::input::CameraInput;
use crate::player::PlayerAnchor;
use crate::world::VoxelWorldQuery;

/// Camera controller state
///
/// Owns the rig and every camera component. Input is handed in through
/// [`CameraInput`]; the renderer reads [`CameraController::rig`] afterwards.
#[derive(Clone, Debug)]
pub struct CameraController {
    rig: CameraRig,
    switcher: ModeSwitcher,
    follow: FollowSolver,
    clipping: ClippingResolver,
    config: CameraConfig,
    /// Outcome of the most recent clipping pass
    last_clip: ClipOutcome,
    /// Set when the anchor was re-seated; the next update drops mouse motion
    /// gathered against the old pose.
    discard_mouse_delta: bool,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::from_valid_config(CameraConfig::default())
    }
}

impl CameraController {
    /// Create a controller from a validated config, starting in auto-follow.
    pub fn new(config: CameraConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: CameraConfig) -> Self {
        let distance = config.clamp_zoom(config.initial_distance);
        Self {
            rig: CameraRig::with_distance(Vec3::ZERO, distance),
            switcher: ModeSwitcher::new(CameraMode::default(), config.first_person_threshold),
            follow: FollowSolver::new(),
            clipping: ClippingResolver::from_config(&config),
            last_clip: ClipOutcome::passthrough(Vec3::ZERO),
            discard_mouse_delta: false,
            config,
        }
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Direct rig access for scripted camera moves and tests.
    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn mode(&self) -> CameraMode {
        self.switcher.mode()
    }

    pub fn previous_mode(&self) -> Option<CameraMode> {
        self.switcher.previous_mode()
    }

    pub fn is_forced_first_person(&self) -> bool {
        self.switcher.is_forced_first_person()
    }

    pub fn follow_solver(&self) -> &FollowSolver {
        &self.follow
    }

    pub fn last_clip(&self) -> &ClipOutcome {
        &self.last_clip
    }

    /// Render position after clipping.
    pub fn position(&self) -> Vec3 {
        self.rig.position()
    }

    /// Set both the distance and the zoom target, clamped to the zoom range.
    pub fn set_distance(&mut self, distance: f32) {
        let distance = self.config.clamp_zoom(distance);
        self.rig.distance = distance;
        self.rig.target_distance = distance;
    }

    /// Place the camera behind the player with no smoothing and commit the
    /// render position. Call once after spawning the player.
    pub fn initialize(&mut self, player: &impl PlayerAnchor) {
        self.reseat_anchor(player);
        self.rig.set_position(self.rig.fake_position());
        self.last_clip = ClipOutcome::passthrough(self.rig.position());
    }

    /// User command: select the desired camera mode.
    pub fn select_mode(&mut self, mode: CameraMode, player: &impl PlayerAnchor) {
        let from = self.switcher.mode();
        self.switcher.select(mode);
        if mode.is_follow() && !from.is_follow() && from != mode {
            self.reseat_anchor(player);
        }
    }

    /// External recovery event: leave a forced first person.
    ///
    /// Restores the preempted mode and re-seats the follow anchor on the
    /// player's current pose. Returns the restored mode, or `None` when
    /// there was nothing to recover.
    pub fn recover_from_first_person(
        &mut self,
        player: &impl PlayerAnchor,
        frame: &FrameContext,
    ) -> Option<CameraMode> {
        let restored = self.switcher.recover(&mut self.rig, frame)?;
        self.reseat_anchor(player);
        Some(restored)
    }

    /// Snap to the behind-player anchor and drop pending mouse motion.
    fn reseat_anchor(&mut self, player: &impl PlayerAnchor) {
        self.follow
            .initialize_anchor(&mut self.rig, player, &self.config);
        self.discard_mouse_delta = true;
    }

    /// Take the queued mode events, oldest first.
    pub fn drain_events(&mut self) -> Vec<CameraEvent> {
        self.switcher.drain_events().collect()
    }

    /// Run one camera frame.
    pub fn update(
        &mut self,
        frame: &FrameContext,
        input: &mut CameraInput,
        player: &mut impl PlayerAnchor,
        world: &impl VoxelWorldQuery,
    ) -> &ClipOutcome {
        let dt = frame.dt;
        let moving = input.is_moving();
        let scroll = input.mouse.consume_scroll();

        self.handle_zoom_input(scroll, player, frame);
        let (dx, dy) = input.mouse.consume_delta();
        let (dx, dy) = if std::mem::take(&mut self.discard_mouse_delta) {
            (0.0, 0.0)
        } else {
            (dx, dy)
        };

        self.switcher.update(&mut self.rig, frame);

        match self.switcher.mode() {
            CameraMode::MouseOrbit => {
                // Carry with the player first so the orbit pivots on this frame's look-at
                self.follow
                    .update(&mut self.rig, player, &self.config, moving, dt, false);
                let sensitivity = self.config.orbit_sensitivity;
                self.rig.orbit(
                    -dx * sensitivity,
                    dy * sensitivity,
                    player.look_at_point(),
                    player.up(),
                    self.config.pitch_limit_radians(),
                );
            }
            CameraMode::AutoFollow => {
                self.follow
                    .update(&mut self.rig, player, &self.config, moving, dt, true);
            }
            CameraMode::FirstPerson => {
                let sensitivity = self.config.look_sensitivity;
                self.rig.rotate_in_place(
                    -dx * sensitivity,
                    -dy * sensitivity,
                    player.up(),
                    self.config.pitch_limit_radians(),
                );
                FirstPersonBinder::bind(&mut self.rig, player);
            }
            CameraMode::Debug => self.fly(dx, dy, input, dt),
        }

        ZoomController::update(&mut self.rig, self.switcher.mode(), dt);

        self.last_clip =
            self.clipping
                .apply(&mut self.rig, player, world, self.switcher.mode(), frame);
        &self.last_clip
    }

    fn handle_zoom_input(
        &mut self,
        steps: f32,
        player: &impl PlayerAnchor,
        frame: &FrameContext,
    ) {
        if steps == 0.0 {
            return;
        }
        if self.switcher.mode() == CameraMode::FirstPerson {
            // Zooming out of a forced first person is the recovery event
            if steps < 0.0 && self.recover_from_first_person(player, frame).is_some() {
                ZoomController::apply_zoom_input(&mut self.rig, steps, &self.config);
            }
            return;
        }
        ZoomController::apply_zoom_input(&mut self.rig, steps, &self.config);
    }

    /// Debug free-fly: movement keys along the camera basis, mouse look
    /// around world up.
    fn fly(&mut self, dx: f32, dy: f32, input: &CameraInput, dt: f32) {
        let sensitivity = self.config.look_sensitivity;
        self.rig.rotate_in_place(
            -dx * sensitivity,
            -dy * sensitivity,
            Vec3::Y,
            self.config.pitch_limit_radians(),
        );

        let axes = input.keyboard.fly_axes();
        let stick = input.gamepad.movement();
        let step = self.config.debug_fly_speed * dt;
        self.rig.translate_local(
            (axes.z + stick.y) * step,
            (axes.x + stick.x) * step,
            axes.y * step,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;
    use crate::player::PlayerPose;
    use crate::world::EmptyWorld;

    fn setup() -> (CameraController, PlayerPose, CameraInput) {
        let player = PlayerPose::at(Vec3::ZERO, Vec3::Z);
        let mut camera = CameraController::default();
        camera.initialize(&player);
        (camera, player, CameraInput::new())
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = CameraConfig {
            max_clip_iterations: 0,
            ..Default::default()
        };
        assert!(CameraController::new(config).is_err());
    }

    #[test]
    fn test_initialize_places_camera_behind_player() {
        let (camera, player, _) = setup();
        assert!(camera.position().z < player.look_at_point().z);
        assert!(camera.position().y > player.look_at_point().y);
        assert_eq!(camera.position(), camera.rig().fake_position());
    }

    #[test]
    fn test_scroll_zooms_target() {
        let (mut camera, mut player, mut input) = setup();
        input.mouse.accumulate_scroll(2.0);
        camera.update(&FrameContext::playing(0.016), &mut input, &mut player, &EmptyWorld);
        assert_eq!(camera.rig().target_distance, 4.0);
        assert!(camera.rig().distance < 5.0);
    }

    #[test]
    fn test_first_person_drives_player_facing() {
        let (mut camera, mut player, mut input) = setup();
        camera.select_mode(CameraMode::FirstPerson, &player);
        input.mouse.set_captured(true);
        input
            .mouse
            .accumulate_delta(-std::f32::consts::FRAC_PI_2 / 0.002, 0.0);

        camera.update(&FrameContext::playing(0.016), &mut input, &mut player, &EmptyWorld);
        assert!(player.forward().abs_diff_eq(Vec3::X, 1e-3));
        assert_eq!(camera.position(), player.look_at_point());
    }

    #[test]
    fn test_debug_fly_moves_camera() {
        let (mut camera, mut player, mut input) = setup();
        camera.select_mode(CameraMode::Debug, &player);
        let start = camera.rig().fake_position();
        input.keyboard.handle_key(KeyCode::W, true);

        camera.update(&FrameContext::playing(0.1), &mut input, &mut player, &EmptyWorld);
        let moved = camera.rig().fake_position() - start;
        assert!((moved.length() - 1.0).abs() < 1e-4);
        assert_eq!(camera.position(), camera.rig().fake_position());
    }
}

//! Zoom Controller
//!
//! Eases `distance` towards `target_distance` and moves the logical camera
//! position along its facing by the same amount, so the orbit radius and the
//! stored distance stay in step.

use super::config::CameraConfig;
use super::mode::CameraMode;
use super::rig::CameraRig;

#[derive(Clone, Copy, Debug, Default)]
pub struct ZoomController;

impl ZoomController {
    /// Per-frame zoom easing. Does nothing in first person.
    ///
    /// The step is `|distance - target| * min(dt, 1)`, so the distance never
    /// overshoots the target and converges geometrically at normal frame
    /// rates. Returns the applied change.
    pub fn update(rig: &mut CameraRig, mode: CameraMode, dt: f32) -> f32 {
        if mode == CameraMode::FirstPerson {
            return 0.0;
        }
        let gap = rig.target_distance - rig.distance;
        if gap == 0.0 || !gap.is_finite() {
            return 0.0;
        }

        let change = gap.abs() * dt.clamp(0.0, 1.0) * gap.signum();
        rig.distance += change;
        rig.zoom(change);
        change
    }

    /// Apply `steps` scroll lines to the zoom target. Positive steps zoom in.
    ///
    /// The target is clamped to the configured zoom range. Returns the new
    /// target.
    pub fn apply_zoom_input(rig: &mut CameraRig, steps: f32, config: &CameraConfig) -> f32 {
        if steps == 0.0 || !steps.is_finite() {
            return rig.target_distance;
        }
        let target = config.clamp_zoom(rig.target_distance - steps * config.scroll_zoom_step);
        if target != rig.target_distance {
            log::trace!(
                "[ZoomController] target {:.2} -> {:.2}",
                rig.target_distance,
                target
            );
        }
        rig.target_distance = target;
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_zoom_out_moves_camera_back() {
        let mut rig = CameraRig::with_distance(Vec3::ZERO, 5.0);
        rig.set_facing(Vec3::Z, Vec3::Y);
        rig.target_distance = 7.0;

        let change = ZoomController::update(&mut rig, CameraMode::AutoFollow, 0.5);
        assert!((change - 1.0).abs() < 1e-6);
        assert!((rig.distance - 6.0).abs() < 1e-6);
        assert!(rig.fake_position().abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-6));
    }

    #[test]
    fn test_zoom_in_moves_camera_forward() {
        let mut rig = CameraRig::with_distance(Vec3::ZERO, 5.0);
        rig.set_facing(Vec3::Z, Vec3::Y);
        rig.target_distance = 3.0;

        ZoomController::update(&mut rig, CameraMode::MouseOrbit, 0.25);
        assert!((rig.distance - 4.5).abs() < 1e-6);
        assert!(rig.fake_position().z > 0.0);
    }

    #[test]
    fn test_large_dt_lands_exactly_on_target() {
        let mut rig = CameraRig::with_distance(Vec3::ZERO, 5.0);
        rig.target_distance = 9.0;
        ZoomController::update(&mut rig, CameraMode::AutoFollow, 3.0);
        assert_eq!(rig.distance, 9.0);
    }

    #[test]
    fn test_first_person_skips_zoom() {
        let mut rig = CameraRig::with_distance(Vec3::ZERO, 1.2);
        rig.target_distance = 1.5;
        assert_eq!(ZoomController::update(&mut rig, CameraMode::FirstPerson, 0.1), 0.0);
        assert_eq!(rig.distance, 1.2);
    }

    #[test]
    fn test_scroll_input_is_clamped() {
        let config = CameraConfig::default();
        let mut rig = CameraRig::with_distance(Vec3::ZERO, 5.0);

        assert_eq!(ZoomController::apply_zoom_input(&mut rig, 2.0, &config), 4.0);
        assert_eq!(ZoomController::apply_zoom_input(&mut rig, 100.0, &config), 1.0);
        assert_eq!(ZoomController::apply_zoom_input(&mut rig, -100.0, &config), 15.0);
    }
}

//! First-Person Binder
//!
//! Rigid camera/player coupling in first person: the camera sits at the
//! player's look-at point and the player faces wherever the camera faces.
//! No smoothing; first person has no tolerance for visible lag.

use super::rig::CameraRig;
use crate::player::PlayerAnchor;

#[derive(Clone, Copy, Debug, Default)]
pub struct FirstPersonBinder;

impl FirstPersonBinder {
    /// Pin the logical position to the eyes and hand the facing to the player.
    pub fn bind(rig: &mut CameraRig, player: &mut impl PlayerAnchor) {
        rig.set_fake_position(player.look_at_point());
        player.set_forward(rig.facing());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerPose;
    use glam::Vec3;

    #[test]
    fn test_camera_pinned_to_eyes() {
        let mut rig = CameraRig::with_distance(Vec3::new(9.0, 9.0, 9.0), 1.5);
        let mut player = PlayerPose::at(Vec3::new(1.0, 0.0, 2.0), Vec3::Z);

        FirstPersonBinder::bind(&mut rig, &mut player);
        assert_eq!(rig.fake_position(), player.look_at_point());
    }

    #[test]
    fn test_player_follows_camera_heading() {
        let mut rig = CameraRig::new();
        rig.set_facing(Vec3::new(1.0, -0.3, 0.0), Vec3::Y);
        let mut player = PlayerPose::at(Vec3::ZERO, Vec3::Z);

        FirstPersonBinder::bind(&mut rig, &mut player);
        // Player heading follows the camera, flattened to stay upright
        assert!(player.forward().abs_diff_eq(Vec3::X, 1e-5));
    }
}

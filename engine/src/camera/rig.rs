//! Camera Rig
//!
//! Extrinsic camera state shared by every camera component:
//!
//! - `position` - post-clip, render-authoritative position
//! - `fake_position` - pre-clip logical position the smoothing chases
//! - `facing` / `right` / `up` - orthonormal right-handed basis
//! - `distance` / `target_distance` - current and desired zoom
//!
//! The rig only stores state and offers small geometric mutators; deciding
//! where the camera goes is left to the solvers.

use glam::{Quat, Vec3};

/// Camera extrinsic state.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    position: Vec3,
    fake_position: Vec3,
    facing: Vec3,
    right: Vec3,
    up: Vec3,
    /// Current scalar offset from the follow anchor
    pub distance: f32,
    /// Desired offset, set by zoom input
    pub target_distance: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        let facing = Vec3::Z;
        Self {
            position: Vec3::ZERO,
            fake_position: Vec3::ZERO,
            facing,
            right: facing.cross(Vec3::Y),
            up: Vec3::Y,
            distance: 5.0,
            target_distance: 5.0,
        }
    }
}

impl CameraRig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rig at `distance` with both positions at `position`.
    pub fn with_distance(position: Vec3, distance: f32) -> Self {
        Self {
            position,
            fake_position: position,
            distance,
            target_distance: distance,
            ..Default::default()
        }
    }

    /// Render position, after clipping.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Commit the post-clip render position.
    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Logical position, before clipping.
    #[inline]
    pub fn fake_position(&self) -> Vec3 {
        self.fake_position
    }

    #[inline]
    pub fn set_fake_position(&mut self, position: Vec3) {
        self.fake_position = position;
    }

    #[inline]
    pub fn facing(&self) -> Vec3 {
        self.facing
    }

    #[inline]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    #[inline]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Point the camera along `facing`, keeping `reference_up` as the roll
    /// reference, and rebuild an orthonormal basis.
    ///
    /// A zero `facing` keeps the current basis. A `facing` parallel to
    /// `reference_up` keeps the current right vector as far as possible.
    pub fn set_facing(&mut self, facing: Vec3, reference_up: Vec3) {
        let facing = facing.normalize_or_zero();
        if facing == Vec3::ZERO {
            log::trace!("[CameraRig] zero facing, keeping previous basis");
            return;
        }

        let mut right = facing.cross(reference_up).normalize_or_zero();
        if right == Vec3::ZERO {
            // Looking straight along the reference up: reuse the old right.
            right = (self.right - facing * self.right.dot(facing)).normalize_or_zero();
            if right == Vec3::ZERO {
                right = facing.any_orthonormal_vector();
            }
        }
        let up = right.cross(facing).normalize();

        self.facing = facing;
        self.right = right;
        self.up = up;
    }

    /// Face from the logical position towards `target`.
    pub fn look_at(&mut self, target: Vec3, reference_up: Vec3) {
        self.set_facing(target - self.fake_position, reference_up);
    }

    /// Orbit the logical position around `point` about `axis` by `degrees`.
    ///
    /// The basis rotates with it so the camera keeps looking at the same
    /// relative direction.
    pub fn rotate_around_point(&mut self, degrees: f32, point: Vec3, axis: Vec3) {
        let axis = axis.normalize_or_zero();
        if axis == Vec3::ZERO || degrees == 0.0 || !degrees.is_finite() {
            return;
        }
        let rotation = Quat::from_axis_angle(axis, degrees.to_radians());
        self.fake_position = point + rotation * (self.fake_position - point);
        self.facing = (rotation * self.facing).normalize();
        self.right = (rotation * self.right).normalize();
        self.up = (rotation * self.up).normalize();
    }

    /// Orbit the logical position around `point`: yaw about `world_up`, then
    /// pitch about the camera right vector.
    ///
    /// Pitch stops `pitch_limit` radians short of either pole, measured as the
    /// elevation of the camera above the horizontal plane through `point`.
    pub fn orbit(&mut self, yaw: f32, pitch: f32, point: Vec3, world_up: Vec3, pitch_limit: f32) {
        let offset = self.fake_position - point;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }

        let yawed = Quat::from_axis_angle(world_up, yaw) * offset;
        let current = (yawed.dot(world_up) / radius).clamp(-1.0, 1.0).asin();
        let target = (current + pitch).clamp(-pitch_limit, pitch_limit);

        let horizontal = (yawed - world_up * yawed.dot(world_up)).normalize_or_zero();
        let horizontal = if horizontal == Vec3::ZERO {
            -(self.facing - world_up * self.facing.dot(world_up)).normalize_or(Vec3::Z)
        } else {
            horizontal
        };
        let new_offset = (horizontal * target.cos() + world_up * target.sin()) * radius;

        self.fake_position = point + new_offset;
        self.set_facing(-new_offset, world_up);
    }

    /// Turn the facing in place: yaw about `world_up`, pitch about right.
    ///
    /// Pitch is limited to `pitch_limit` radians above or below the horizon.
    pub fn rotate_in_place(&mut self, yaw: f32, pitch: f32, world_up: Vec3, pitch_limit: f32) {
        let facing = Quat::from_axis_angle(world_up, yaw) * self.facing;
        let current = facing.dot(world_up).clamp(-1.0, 1.0).asin();
        let target = (current + pitch).clamp(-pitch_limit, pitch_limit);

        let horizontal = (facing - world_up * facing.dot(world_up)).normalize_or_zero();
        if horizontal == Vec3::ZERO {
            self.set_facing(facing, world_up);
            return;
        }
        let facing = horizontal * target.cos() + world_up * target.sin();
        self.set_facing(facing, world_up);
    }

    /// Move the logical position back along the facing by `amount`
    /// (negative moves it forward). Keeps the orbit radius in step with a
    /// change of `distance`.
    pub fn zoom(&mut self, amount: f32) {
        self.fake_position -= self.facing * amount;
    }

    /// Move both positions along the camera basis.
    pub fn translate_local(&mut self, forward: f32, right: f32, up: f32) {
        let delta = self.facing * forward + self.right * right + self.up * up;
        self.fake_position += delta;
        self.position += delta;
    }

    /// Whether the basis is unit-length and mutually orthogonal within `eps`.
    pub fn is_orthonormal(&self, eps: f32) -> bool {
        (self.facing.length() - 1.0).abs() <= eps
            && (self.right.length() - 1.0).abs() <= eps
            && (self.up.length() - 1.0).abs() <= eps
            && self.facing.dot(self.right).abs() <= eps
            && self.facing.dot(self.up).abs() <= eps
            && self.right.dot(self.up).abs() <= eps
    }
}

//! Player Anchor
//!
//! The camera follows a player but never stores a reference to one. Each
//! per-frame call receives the player as a [`PlayerAnchor`].

use glam::Vec3;

/// Height of the look-at point above the player's center by default.
pub const DEFAULT_CENTER_OFFSET: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// What the camera needs to know about the player it follows.
///
/// Everything is read-only except [`set_forward`](PlayerAnchor::set_forward),
/// which only the first-person binder calls.
pub trait PlayerAnchor {
    /// Center of the player body in world space.
    fn center(&self) -> Vec3;

    /// Constant offset from [`center`](PlayerAnchor::center) to the point
    /// the camera looks at (roughly the eyes).
    fn center_offset(&self) -> Vec3;

    /// Unit forward vector.
    fn forward(&self) -> Vec3;

    /// Unit right vector.
    fn right(&self) -> Vec3;

    /// Unit up vector.
    fn up(&self) -> Vec3;

    /// Point the player to face `forward`.
    fn set_forward(&mut self, forward: Vec3);

    /// Look-at point: center plus center offset.
    #[inline]
    fn look_at_point(&self) -> Vec3 {
        self.center() + self.center_offset()
    }
}

/// Plain player pose implementing [`PlayerAnchor`].
///
/// Keeps an orthonormal, right-handed basis: `right = forward × up`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerPose {
    pub center: Vec3,
    pub center_offset: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Default for PlayerPose {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            center_offset: DEFAULT_CENTER_OFFSET,
            forward: Vec3::Z,
            right: Vec3::Z.cross(Vec3::Y),
            up: Vec3::Y,
        }
    }
}

impl PlayerPose {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pose at `center` facing `forward`, with world Y as up.
    pub fn at(center: Vec3, forward: Vec3) -> Self {
        let mut pose = Self {
            center,
            ..Default::default()
        };
        pose.set_forward(forward);
        pose
    }

    pub fn with_center_offset(mut self, offset: Vec3) -> Self {
        self.center_offset = offset;
        self
    }

    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }

    /// Heading in radians around the up axis, 0 facing +Z.
    pub fn yaw(&self) -> f32 {
        self.forward.x.atan2(self.forward.z)
    }
}

impl PlayerAnchor for PlayerPose {
    #[inline]
    fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    fn center_offset(&self) -> Vec3 {
        self.center_offset
    }

    #[inline]
    fn forward(&self) -> Vec3 {
        self.forward
    }

    #[inline]
    fn right(&self) -> Vec3 {
        self.right
    }

    #[inline]
    fn up(&self) -> Vec3 {
        self.up
    }

    /// The player stays upright: `forward` is flattened onto the ground
    /// plane. A vertical or zero `forward` leaves the pose unchanged.
    fn set_forward(&mut self, forward: Vec3) {
        let flat = (forward - self.up * forward.dot(self.up)).normalize_or_zero();
        if flat == Vec3::ZERO {
            return;
        }
        self.forward = flat;
        self.right = flat.cross(self.up).normalize();
    }
}

//! Clipping Tests - Voxel Probe Walk
//!
//! Tests for ClippingResolver against a VoxelGrid world.

use std::cell::Cell;

use approx::assert_relative_eq;
use glam::{IVec3, Vec3};
use voxel_camera_engine::camera::{
    CameraController, CameraMode, CameraRig, ClippingResolver,
};
use voxel_camera_engine::frame::{FrameContext, GameMode};
use voxel_camera_engine::input::CameraInput;
use voxel_camera_engine::player::{PlayerAnchor, PlayerPose};
use voxel_camera_engine::world::{BlockQuery, EmptyWorld, VoxelGrid, VoxelWorldQuery};

// ============================================================================
// Helpers
// ============================================================================

/// Player whose look-at point is `look_at`, facing +Z.
fn player_looking_from(look_at: Vec3) -> PlayerPose {
    let player = PlayerPose::at(Vec3::ZERO, Vec3::Z);
    PlayerPose::at(look_at - player.center_offset, Vec3::Z)
}

/// World wrapper that counts block lookups.
struct CountingWorld<W> {
    inner: W,
    lookups: Cell<u32>,
}

impl<W: VoxelWorldQuery> CountingWorld<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            lookups: Cell::new(0),
        }
    }
}

impl<W: VoxelWorldQuery> VoxelWorldQuery for CountingWorld<W> {
    fn block_at(&self, point: Vec3) -> BlockQuery {
        self.lookups.set(self.lookups.get() + 1);
        self.inner.block_at(point)
    }
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_clear_position_is_returned_unchanged() {
    let resolver = ClippingResolver::default();
    let mut world = VoxelGrid::default();
    world.fill_box(IVec3::new(-5, -5, 3), IVec3::new(5, 5, 3), true);

    let player = player_looking_from(Vec3::new(0.5, 1.5, 10.5));
    let start = Vec3::new(0.5, 1.5, 0.5);
    let outcome = resolver.resolve(start, Vec3::Z, &player, &world);

    assert_eq!(outcome.position, start);
    assert_eq!(outcome.advances, 0);
    assert!(!outcome.still_colliding);
}

#[test]
fn test_terminates_within_budget() {
    let resolver = ClippingResolver::default();
    let mut world = VoxelGrid::default();
    world.fill_box(IVec3::splat(-40), IVec3::splat(40), true);
    let player = player_looking_from(Vec3::new(0.0, 1.0, 0.0));

    let starts = [
        Vec3::new(0.0, 3.0, -5.0),
        Vec3::new(-20.0, 10.0, 20.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(30.0, -30.0, 30.0),
    ];
    for start in starts {
        let facing = (player.look_at_point() - start).normalize_or_zero();
        let outcome = resolver.resolve(start, facing, &player, &world);
        assert!(outcome.iterations <= 100, "{start}: {outcome:?}");
        assert!(outcome.advances <= 100);
        assert!(outcome.position.is_finite());
    }
}

#[test]
fn test_exhausted_budget_stops_one_step_short_of_player() {
    let resolver = ClippingResolver::default();
    let mut world = VoxelGrid::default();
    world.fill_box(IVec3::splat(-20), IVec3::splat(20), true);
    let player = player_looking_from(Vec3::new(0.5, 1.5, 0.5));

    let start = Vec3::new(0.5, 1.5, -9.5);
    let outcome = resolver.resolve(start, Vec3::Z, &player, &world);

    assert!(outcome.still_colliding);
    assert_eq!(outcome.iterations, 100);
    assert_eq!(outcome.advances, 99);
    assert_relative_eq!(outcome.increment, 0.1, epsilon = 1e-6);
    let expected = player.look_at_point() - Vec3::Z * outcome.increment;
    assert!(outcome.position.abs_diff_eq(expected, 1e-3), "{outcome:?}");
}

#[test]
fn test_world_lookups_stay_within_budget() {
    let resolver = ClippingResolver::default();
    let mut grid = VoxelGrid::default();
    grid.fill_box(IVec3::splat(-20), IVec3::splat(20), true);
    let world = CountingWorld::new(grid);
    let player = player_looking_from(Vec3::new(0.5, 1.5, 0.5));

    let outcome = resolver.resolve(Vec3::new(0.5, 1.5, -9.5), Vec3::Z, &player, &world);

    assert!(outcome.still_colliding);
    // Four offsets per round, short-circuiting on the first solid one
    assert!(world.lookups.get() >= outcome.iterations);
    assert!(world.lookups.get() <= 4 * 100, "{} lookups", world.lookups.get());
    assert!(outcome.iterations <= resolver.max_iterations);
}

#[test]
fn test_final_position_matches_last_tested_round() {
    let resolver = ClippingResolver {
        probe_offset: 0.25,
        max_iterations: 10,
    };
    let mut grid = VoxelGrid::default();
    grid.fill_box(IVec3::splat(-20), IVec3::splat(20), true);
    let world = CountingWorld::new(grid);
    let player = player_looking_from(Vec3::new(0.5, 1.5, 0.5));

    let outcome = resolver.resolve(Vec3::new(0.5, 1.5, -9.5), Vec3::Z, &player, &world);

    // Every solid round stops at its first offset, so lookups equal rounds
    assert_eq!(world.lookups.get(), outcome.iterations);
    assert_eq!(outcome.iterations, 10);
    assert_eq!(outcome.advances, 9);
    assert!(resolver.probes_solid(outcome.position, &player, &world.inner));
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_empty_world_is_never_clipped() {
    let resolver = ClippingResolver::default();
    let player = PlayerPose::at(Vec3::ZERO, Vec3::Z);
    let mut rig = CameraRig::with_distance(Vec3::ZERO, 5.0);
    rig.set_facing(Vec3::Z, Vec3::Y);

    let start = player.look_at_point() - Vec3::Z * 5.0;
    let outcome = resolver.resolve(start, rig.facing(), &player, &EmptyWorld);
    assert_eq!(outcome.position, start);
    assert_eq!(outcome.advances, 0);
}

#[test]
fn test_up_probe_block_is_walked_clear() {
    let resolver = ClippingResolver::default();
    let mut world = VoxelGrid::default();
    world.set_block(IVec3::new(0, 1, 0), true);

    // Only the up probe (y = 1.15) lands in the block
    let start = Vec3::new(0.5, 0.9, 0.5);
    let player = player_looking_from(start + Vec3::Z * 5.0);
    assert!(world.is_solid_at(start + Vec3::Y * 0.25));
    assert!(!world.is_solid_at(start - Vec3::Y * 0.25));
    assert!(!world.is_solid_at(start + Vec3::X * 0.25));
    assert!(!world.is_solid_at(start - Vec3::X * 0.25));

    let outcome = resolver.resolve(start, Vec3::Z, &player, &world);
    assert_relative_eq!(outcome.increment, 0.05, epsilon = 1e-6);
    assert!(!outcome.still_colliding);
    assert!(!world.is_solid_at(outcome.position + Vec3::Y * 0.25));

    // Smallest k with 0.5 + 0.05·k >= 1.0 is 10; float accumulation may need one more
    assert!((10..=11).contains(&outcome.advances), "{outcome:?}");
    let travelled = (outcome.position - start).length();
    assert_relative_eq!(
        travelled,
        outcome.increment * outcome.advances as f32,
        epsilon = 1e-4
    );
    assert_relative_eq!(outcome.position.x, start.x);
    assert_relative_eq!(outcome.position.y, start.y);
}

#[test]
fn test_controller_commits_clipped_position() {
    let mut player = PlayerPose::at(Vec3::new(0.5, 0.0, 0.5), Vec3::Z);
    let mut camera = CameraController::default();
    camera.initialize(&player);
    let behind = camera.rig().fake_position();

    // Wall straddling the camera, between it and nothing else
    let mut world = VoxelGrid::default();
    let block = IVec3::new(
        behind.x.floor() as i32,
        behind.y.floor() as i32,
        behind.z.floor() as i32,
    );
    world.fill_box(block - IVec3::new(3, 3, 0), block + IVec3::new(3, 3, 0), true);

    let mut input = CameraInput::new();
    let outcome = *camera.update(&FrameContext::playing(0.016), &mut input, &mut player, &world);

    assert!(outcome.advances > 0);
    assert!(!outcome.still_colliding);
    assert_eq!(camera.position(), outcome.position);
    // Logical position stays where the smoothing put it
    assert!(camera.rig().fake_position().abs_diff_eq(behind, 1e-3));
    assert!(
        (camera.position() - player.look_at_point()).length()
            < (behind - player.look_at_point()).length()
    );
}

#[test]
fn test_controller_skips_clipping_outside_play() {
    let mut player = PlayerPose::at(Vec3::ZERO, Vec3::Z);
    let mut camera = CameraController::default();
    camera.initialize(&player);
    let mut world = VoxelGrid::default();
    world.fill_box(IVec3::splat(-10), IVec3::splat(10), true);

    let mut input = CameraInput::new();
    let paused = FrameContext::new(0.016, 1.0, GameMode::Paused);
    let outcome = *camera.update(&paused, &mut input, &mut player, &world);
    assert_eq!(outcome.advances, 0);
    assert_eq!(camera.position(), camera.rig().fake_position());

    camera.select_mode(CameraMode::Debug, &player);
    let outcome = *camera.update(&FrameContext::playing(0.016), &mut input, &mut player, &world);
    assert_eq!(outcome.advances, 0);
}

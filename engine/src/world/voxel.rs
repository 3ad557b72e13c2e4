//! Voxel World Query
//!
//! The camera never owns world storage. It asks a [`VoxelWorldQuery`] whether
//! a world-space point lies inside a solid block, and nothing else.

use glam::{IVec3, Vec3};

/// Number of blocks along each edge of a chunk.
pub const CHUNK_SIZE: i32 = 16;

/// Coordinate of a chunk in chunk space (block coordinate / [`CHUNK_SIZE`]).
pub type ChunkCoord = IVec3;

/// Result of looking up the block that contains a world-space point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockQuery {
    /// Whether the block is solid
    pub solid: bool,
    /// Block coordinate that contains the point
    pub block: IVec3,
    /// Chunk holding the block, `None` when that chunk is not loaded
    pub chunk: Option<ChunkCoord>,
}

impl BlockQuery {
    /// A not-solid answer for a point whose chunk is not loaded.
    pub fn unloaded(block: IVec3) -> Self {
        Self {
            solid: false,
            block,
            chunk: None,
        }
    }
}

/// Read-only solidity lookup against voxel geometry.
///
/// Implementations must answer for any finite point, including points in
/// chunks that are not loaded (those report not-solid).
pub trait VoxelWorldQuery {
    /// Look up the block containing `point`.
    fn block_at(&self, point: Vec3) -> BlockQuery;

    /// Whether `point` lies inside a solid block.
    #[inline]
    fn is_solid_at(&self, point: Vec3) -> bool {
        self.block_at(point).solid
    }
}

impl<W: VoxelWorldQuery + ?Sized> VoxelWorldQuery for &W {
    #[inline]
    fn block_at(&self, point: Vec3) -> BlockQuery {
        (**self).block_at(point)
    }
}

/// A world with no solid blocks anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyWorld;

impl VoxelWorldQuery for EmptyWorld {
    fn block_at(&self, point: Vec3) -> BlockQuery {
        BlockQuery::unloaded(world_to_block(point, 1.0))
    }
}

/// Block coordinate containing `point` for blocks of edge length `block_size`.
///
/// Block `b` spans `[b * size, (b + 1) * size)` on every axis.
#[inline]
pub fn world_to_block(point: Vec3, block_size: f32) -> IVec3 {
    (point / block_size).floor().as_ivec3()
}

/// Chunk coordinate holding `block`.
#[inline]
pub fn block_to_chunk(block: IVec3) -> ChunkCoord {
    IVec3::new(
        block.x.div_euclid(CHUNK_SIZE),
        block.y.div_euclid(CHUNK_SIZE),
        block.z.div_euclid(CHUNK_SIZE),
    )
}

/// Position of `block` inside its chunk, each component in `0..CHUNK_SIZE`.
#[inline]
pub fn block_to_local(block: IVec3) -> IVec3 {
    IVec3::new(
        block.x.rem_euclid(CHUNK_SIZE),
        block.y.rem_euclid(CHUNK_SIZE),
        block.z.rem_euclid(CHUNK_SIZE),
    )
}

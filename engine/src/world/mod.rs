//! World Module
//!
//! The voxel-world seam the camera queries against.
//!
//! - [`VoxelWorldQuery`] - trait the clipping resolver consumes
//! - [`VoxelGrid`] - sparse chunked reference implementation
//! - [`EmptyWorld`] - a world with nothing in it

pub mod grid;
pub mod voxel;

pub use grid::VoxelGrid;
pub use voxel::{
    BlockQuery, CHUNK_SIZE, ChunkCoord, EmptyWorld, VoxelWorldQuery, block_to_chunk,
    block_to_local, world_to_block,
};

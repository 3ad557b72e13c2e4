//! Voxel Grid Module
//!
//! Chunked boolean voxel storage implementing [`VoxelWorldQuery`].
//!
//! Chunks are stored sparsely in a `HashMap` keyed by chunk coordinate, so
//! only regions that contain blocks cost memory. Lookups in chunks that were
//! never written report not-solid.

use glam::{IVec3, Vec3};
use std::collections::HashMap;

use super::voxel::{
    BlockQuery, CHUNK_SIZE, ChunkCoord, VoxelWorldQuery, block_to_chunk, block_to_local,
    world_to_block,
};

const CHUNK_VOLUME: usize = (CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE) as usize;

/// One `CHUNK_SIZE`³ block of voxels.
#[derive(Debug, Clone)]
struct Chunk {
    blocks: Box<[bool]>,
    solid_count: usize,
}

impl Chunk {
    fn new() -> Self {
        Self {
            blocks: vec![false; CHUNK_VOLUME].into_boxed_slice(),
            solid_count: 0,
        }
    }

    #[inline]
    fn index(local: IVec3) -> usize {
        (local.x + local.y * CHUNK_SIZE + local.z * CHUNK_SIZE * CHUNK_SIZE) as usize
    }

    #[inline]
    fn get(&self, local: IVec3) -> bool {
        self.blocks[Self::index(local)]
    }

    /// Returns the previous value.
    fn set(&mut self, local: IVec3, solid: bool) -> bool {
        let slot = &mut self.blocks[Self::index(local)];
        let previous = *slot;
        if previous != solid {
            *slot = solid;
            if solid {
                self.solid_count += 1;
            } else {
                self.solid_count -= 1;
            }
        }
        previous
    }
}

/// Sparse chunked voxel world.
///
/// # Coordinate System
///
/// - Block `b` covers world space `[b * block_size, (b + 1) * block_size)`
/// - Chunk `c` covers blocks `[c * CHUNK_SIZE, (c + 1) * CHUNK_SIZE)`
#[derive(Debug, Clone)]
pub struct VoxelGrid {
    chunks: HashMap<ChunkCoord, Chunk>,
    /// Edge length of one block in world units
    pub block_size: f32,
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl VoxelGrid {
    /// Create an empty grid with blocks of edge length `block_size`.
    pub fn new(block_size: f32) -> Self {
        Self {
            chunks: HashMap::new(),
            block_size,
        }
    }

    /// Set a single block. Clearing the last block of a chunk unloads it.
    pub fn set_block(&mut self, block: IVec3, solid: bool) {
        let coord = block_to_chunk(block);
        let local = block_to_local(block);
        if solid {
            self.chunks
                .entry(coord)
                .or_insert_with(Chunk::new)
                .set(local, true);
        } else if let Some(chunk) = self.chunks.get_mut(&coord) {
            chunk.set(local, false);
            if chunk.solid_count == 0 {
                self.chunks.remove(&coord);
            }
        }
    }

    /// Set the block containing a world-space point.
    pub fn set_block_at(&mut self, point: Vec3, solid: bool) {
        self.set_block(world_to_block(point, self.block_size), solid);
    }

    /// Set every block in the inclusive box `min..=max`.
    pub fn fill_box(&mut self, min: IVec3, max: IVec3, solid: bool) {
        let lo = min.min(max);
        let hi = min.max(max);
        for z in lo.z..=hi.z {
            for y in lo.y..=hi.y {
                for x in lo.x..=hi.x {
                    self.set_block(IVec3::new(x, y, z), solid);
                }
            }
        }
    }

    /// Whether `block` is solid.
    pub fn is_block_solid(&self, block: IVec3) -> bool {
        self.chunks
            .get(&block_to_chunk(block))
            .is_some_and(|chunk| chunk.get(block_to_local(block)))
    }

    /// Whether the chunk at `coord` is loaded.
    pub fn is_chunk_loaded(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    /// Number of loaded chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Total number of solid blocks.
    pub fn solid_count(&self) -> usize {
        self.chunks.values().map(|c| c.solid_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Remove all blocks and unload every chunk.
    pub fn clear(&mut self) {
        self.chunks.clear();
    }
}

impl VoxelWorldQuery for VoxelGrid {
    fn block_at(&self, point: Vec3) -> BlockQuery {
        if !point.is_finite() {
            return BlockQuery::unloaded(IVec3::ZERO);
        }
        let block = world_to_block(point, self.block_size);
        let coord = block_to_chunk(block);
        match self.chunks.get(&coord) {
            Some(chunk) => BlockQuery {
                solid: chunk.get(block_to_local(block)),
                block,
                chunk: Some(coord),
            },
            None => BlockQuery::unloaded(block),
        }
    }
}

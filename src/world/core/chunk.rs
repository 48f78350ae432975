//! Chunk - fixed-size cubic block grid
//!
//! The basic unit of world generation. A chunk owns a dense `size^3` array
//! of blocks anchored at a world-space origin; block (x, y, z) always sits
//! at `origin + (x, y, z)`.

use super::{Block, BlockType};
use crate::constants::core::CHUNK_SIZE;
use crate::world::error::{WorldError, WorldResult};
use glam::Vec3;

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

/// Fixed-size cubic grid of blocks anchored at a world-space origin.
///
/// Shape is immutable after construction; block contents are mutable via
/// [`Chunk::set`]. Every chunk in a world shares one dimension
/// ([`CHUNK_SIZE`] by default); boundary and neighbor logic depends on that.
#[derive(Debug, Clone)]
pub struct Chunk {
    world_origin: Vec3,
    size: u32,
    blocks: Box<[Block]>,
}

impl Chunk {
    /// Create a chunk of the world-wide default dimension, all blocks `Air`.
    pub fn new(world_origin: Vec3) -> Self {
        Self::with_size(world_origin, CHUNK_SIZE)
    }

    /// Create a chunk with an explicit dimension. All blocks start as `Air`
    /// at their derived world positions.
    pub fn with_size(world_origin: Vec3, size: u32) -> Self {
        debug_assert!(size > 0, "chunk size must be nonzero");
        let total = (size * size * size) as usize;
        let mut blocks = vec![Block::default(); total].into_boxed_slice();

        for z in 0..size {
            for y in 0..size {
                for x in 0..size {
                    let index = Self::index_for(size, x, y, z);
                    blocks[index].world = world_origin + Vec3::new(x as f32, y as f32, z as f32);
                }
            }
        }

        Self {
            world_origin,
            size,
            blocks,
        }
    }

    /// World-space anchor of local coordinate (0, 0, 0).
    pub fn world_origin(&self) -> Vec3 {
        self.world_origin
    }

    /// Blocks per axis.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// World-space bounding box covering every block in the chunk.
    pub fn aabb(&self) -> Aabb {
        let extent = self.size as f32;
        Aabb {
            min: self.world_origin,
            max: self.world_origin + Vec3::splat(extent),
        }
    }

    /// Block at local coordinate (x, y, z).
    ///
    /// Out-of-range coordinates are a caller defect; use [`Chunk::try_at`]
    /// when the coordinate is not already known to be in bounds.
    pub fn at(&self, x: u32, y: u32, z: u32) -> Block {
        self.blocks[Self::index_for(self.size, x, y, z)]
    }

    /// Checked variant of [`Chunk::at`].
    pub fn try_at(&self, x: u32, y: u32, z: u32) -> WorldResult<Block> {
        if x >= self.size || y >= self.size || z >= self.size {
            return Err(WorldError::BlockOutOfBounds {
                x,
                y,
                z,
                size: self.size,
            });
        }
        Ok(self.at(x, y, z))
    }

    /// Set the block type at local coordinate (x, y, z). The block's world
    /// position is derived from the chunk origin and never supplied by the
    /// caller.
    pub fn set(&mut self, x: u32, y: u32, z: u32, block_type: BlockType) {
        let world = self.world_origin + Vec3::new(x as f32, y as f32, z as f32);
        self.blocks[Self::index_for(self.size, x, y, z)] = Block::new(block_type, world);
    }

    /// Whether local coordinate (x, y, z) lies on any face of the chunk.
    /// Border blocks have at least one neighbor outside this chunk.
    pub fn is_chunk_border(&self, x: u32, y: u32, z: u32) -> bool {
        let edge = self.size - 1;
        x == 0 || y == 0 || z == 0 || x == edge || y == edge || z == edge
    }

    #[inline]
    fn index_for(size: u32, x: u32, y: u32, z: u32) -> usize {
        debug_assert!(x < size && y < size && z < size);
        (x + y * size + z * size * size) as usize
    }
}

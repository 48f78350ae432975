//! Block types and the per-voxel block value

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The type of a block/voxel.
///
/// Limited to 255 types (u8). `Air` is the canonical empty sentinel: face
/// culling and any future chunk serialization both treat 0 as "nothing
/// here", so it must stay at discriminant 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BlockType {
    Air = 0,
    Dirt = 1,
    Wood = 2,
    Stone = 3,
}

impl Default for BlockType {
    fn default() -> Self {
        BlockType::Air
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockType::Air => write!(f, "Air"),
            BlockType::Dirt => write!(f, "Dirt"),
            BlockType::Wood => write!(f, "Wood"),
            BlockType::Stone => write!(f, "Stone"),
        }
    }
}

impl BlockType {
    /// Whether this block occupies space. Everything except `Air` is solid.
    #[inline]
    pub const fn is_solid(self) -> bool {
        !self.is_air()
    }

    #[inline]
    pub const fn is_air(self) -> bool {
        matches!(self, BlockType::Air)
    }

    /// Convert from a raw u8 tag. Unknown values decode as `Air`.
    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            1 => BlockType::Dirt,
            2 => BlockType::Wood,
            3 => BlockType::Stone,
            _ => BlockType::Air,
        }
    }
}

/// A single voxel cell: its type tag plus its world-space position.
///
/// Equality is structural over both fields.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Block {
    pub block_type: BlockType,
    pub world: Vec3,
}

impl Block {
    pub fn new(block_type: BlockType, world: Vec3) -> Self {
        Self { block_type, world }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air_is_zero_and_empty() {
        assert_eq!(BlockType::Air as u8, 0);
        assert!(BlockType::Air.is_air());
        assert!(!BlockType::Air.is_solid());
        assert!(BlockType::Dirt.is_solid());
    }

    #[test]
    fn test_from_u8_round_trip() {
        for ty in [
            BlockType::Air,
            BlockType::Dirt,
            BlockType::Wood,
            BlockType::Stone,
        ] {
            assert_eq!(BlockType::from_u8(ty as u8), ty);
        }
        // Unknown tags decode as Air.
        assert_eq!(BlockType::from_u8(200), BlockType::Air);
    }

    #[test]
    fn test_block_equality_is_structural() {
        let a = Block::new(BlockType::Dirt, Vec3::new(1.0, 2.0, 3.0));
        let b = Block::new(BlockType::Dirt, Vec3::new(1.0, 2.0, 3.0));
        let c = Block::new(BlockType::Dirt, Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

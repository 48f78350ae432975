//! Voxel World Module
//!
//! Chunk-based block storage plus procedural terrain generation.
//!
//! # Architecture Overview
//!
//! - **Core**: fundamental data types (BlockType, Block, Chunk)
//! - **Generation**: seeded noise sources and the fractal terrain generator
//!
//! Chunks own their blocks exclusively; generation is a pure function of
//! (seed, parameters, origin), which is the contract the tests lean on.

pub mod core;
pub mod error;
pub mod generation;

// Re-export core types for convenience
pub use self::core::{Aabb, Block, BlockType, Chunk};

// Re-export generation systems
pub use generation::{NoiseSource, OpenSimplexNoise, TerrainGenerator};

pub use error::WorldError;

//! World Error Handling
//!
//! Error type for checked world operations. Unchecked accessors assert
//! instead; see `Chunk::at`.

/// Errors produced by checked world operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("block position ({x}, {y}, {z}) out of bounds for chunk size {size}")]
    BlockOutOfBounds { x: u32, y: u32, z: u32, size: u32 },
}

/// World-specific result type.
pub type WorldResult<T> = Result<T, WorldError>;

//! Unified error handling for Embervox
//!
//! One crate-wide error enum covers the failures that can surface past a
//! module boundary. Precondition violations inside the fixed enumerations
//! (side indices, pool capacity) are programming defects and assert at the
//! call site instead of appearing here.

use std::error::Error as StdError;
use std::fmt;

/// Main error type for Embervox.
#[derive(Debug)]
pub enum EngineError {
    // World errors
    BlockOutOfBounds {
        pos: (u32, u32, u32),
        chunk_size: u32,
    },
    InvalidBlockType {
        id: u8,
    },

    // Mesh errors
    MeshGeneration {
        origin: (i32, i32, i32),
        error: String,
    },

    // GPU errors
    AdapterNotFound,
    DeviceRequestFailed {
        error: String,
    },
    SurfaceCreationFailed {
        error: String,
    },
    SurfaceLost,

    // Configuration errors
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    // System errors
    InitializationError(String),
    IoError {
        path: String,
        error: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::BlockOutOfBounds { pos, chunk_size } => write!(
                f,
                "Block position {:?} out of bounds for chunk size {}",
                pos, chunk_size
            ),
            EngineError::InvalidBlockType { id } => write!(f, "Invalid block type ID: {}", id),
            EngineError::MeshGeneration { origin, error } => write!(
                f,
                "Mesh generation failed for chunk at {:?}: {}",
                origin, error
            ),
            EngineError::AdapterNotFound => write!(f, "No compatible GPU adapter found"),
            EngineError::DeviceRequestFailed { error } => {
                write!(f, "GPU device request failed: {}", error)
            }
            EngineError::SurfaceCreationFailed { error } => {
                write!(f, "Surface creation failed: {}", error)
            }
            EngineError::SurfaceLost => write!(f, "Render surface lost"),
            EngineError::InvalidConfig {
                field,
                value,
                reason,
            } => write!(f, "Invalid config: {} = {} ({})", field, value, reason),
            EngineError::InitializationError(msg) => write!(f, "Initialization error: {}", msg),
            EngineError::IoError { path, error } => write!(f, "IO error for {}: {}", path, error),
        }
    }
}

impl StdError for EngineError {}

/// Type alias for Results in Embervox.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<std::io::Error> for EngineError {
    fn from(error: std::io::Error) -> Self {
        EngineError::IoError {
            path: String::new(),
            error: error.to_string(),
        }
    }
}

impl From<wgpu::CreateSurfaceError> for EngineError {
    fn from(error: wgpu::CreateSurfaceError) -> Self {
        EngineError::SurfaceCreationFailed {
            error: error.to_string(),
        }
    }
}

impl From<wgpu::RequestDeviceError> for EngineError {
    fn from(error: wgpu::RequestDeviceError) -> Self {
        EngineError::DeviceRequestFailed {
            error: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::BlockOutOfBounds {
            pos: (16, 0, 3),
            chunk_size: 16,
        };
        assert_eq!(
            err.to_string(),
            "Block position (16, 0, 3) out of bounds for chunk size 16"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: EngineError = io.into();
        assert!(matches!(err, EngineError::IoError { .. }));
    }
}

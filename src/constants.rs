//! Engine-wide constants
//!
//! Every tunable that more than one module depends on lives here, namespaced
//! by subsystem. Changing a value here is the only supported way to retune
//! the engine; modules must not shadow these with local copies.

/// Core world constants.
pub mod core {
    /// Blocks per chunk axis. Chunks are cubic; every chunk in a world shares
    /// this dimension. Boundary and neighbor-lookup logic is written against
    /// this value.
    pub const CHUNK_SIZE: u32 = 16;

    /// Total blocks in one chunk.
    pub const VOXELS_PER_CHUNK: u32 = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;
}

/// Terrain generation constants.
pub mod terrain {
    /// Maximum column height produced by the fractal height map.
    pub const MAX_COLUMN_HEIGHT: f32 = 14.0;

    /// Default octave count for fractal accumulation.
    pub const DEFAULT_OCTAVES: u32 = 6;

    /// Default base frequency for the first octave.
    pub const DEFAULT_FREQUENCY: f32 = 0.25;

    /// Default base amplitude for the first octave.
    pub const DEFAULT_AMPLITUDE: f32 = 0.5;
}

/// Geometry pool sizing.
pub mod mesh {
    use super::core::VOXELS_PER_CHUNK;

    /// Vertex capacity of one geometry pool. Sized for the worst case: every
    /// block in a chunk solid with all six faces emitted.
    pub const MAX_VERTICES: usize = 98_304;

    /// Index capacity of one geometry pool.
    pub const MAX_INDICES: usize = 262_144;

    // Capacity must cover the worst-case chunk exactly: size^3 blocks * 6
    // faces * 4 vertices.
    static_assertions::const_assert_eq!(MAX_VERTICES, (VOXELS_PER_CHUNK as usize) * 6 * 4);
    static_assertions::const_assert!(MAX_INDICES >= (VOXELS_PER_CHUNK as usize) * 6 * 6);
}

/// Texture atlas addressing.
pub mod atlas {
    /// Atlas texture width/height in pixels.
    pub const TEXTURE_SIZE: f32 = 2048.0;

    /// Tiles per atlas row.
    pub const TILES_PER_ROW: f32 = 16.0;

    /// Normalized width of one atlas cell.
    pub const UV_CELL: f32 = (TEXTURE_SIZE / TILES_PER_ROW) / TEXTURE_SIZE;

    /// Default tile column used for every block face.
    pub const DEFAULT_TILE_X: u32 = 2;

    /// Default tile row used for every block face.
    pub const DEFAULT_TILE_Y: u32 = 15;
}

/// Render loop constants.
pub mod render {
    /// Minimum milliseconds between rendered frames.
    pub const FRAME_TIME_MS: u64 = 16;

    /// Camera movement step per frame while a movement key is held.
    pub const MOVE_INCREMENT: f32 = 0.1;
}

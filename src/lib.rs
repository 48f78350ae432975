//! Embervox - voxel terrain sandbox
//!
//! Opens a window, builds a small procedurally generated voxel world, and
//! renders it from a movable first-person camera. The interesting part is
//! the terrain pipeline: seeded noise -> fractal height-map chunk
//! generation -> face-culling mesh construction through a reusable
//! fixed-capacity geometry pool -> GPU upload.
//!
//! Module conventions: data structures live in `*_data.rs` files with no
//! methods, transformations live in `*_operations.rs` as pure functions.

// Constants module
pub mod constants;

// Core engine modules
pub mod error;

// Essential systems
pub mod camera;
pub mod input;
pub mod meshing;
pub mod renderer;
pub mod utils;
pub mod world;

use anyhow::Result;
use winit::event_loop::EventLoop;

pub use camera::{CameraData, CameraTransformBatch, CameraUniform};
pub use error::{EngineError, EngineResult};
pub use input::InputState;
pub use meshing::{mesh_chunk, AtlasTile, GeometryPool, MeshData, Quad, Side, UvVertex};
pub use renderer::{RendererData, Vertex};
pub use world::{Aabb, Block, BlockType, Chunk, NoiseSource, OpenSimplexNoise, TerrainGenerator};

/// Main engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// World seed; drives terrain noise and the procedural atlas.
    pub seed: i64,
    /// Startup world is a view_chunks x view_chunks grid of chunks at y = 0.
    pub view_chunks: u32,
    pub octaves: u32,
    pub frequency: f32,
    pub amplitude: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_title: "Embervox".to_string(),
            window_width: 1280,
            window_height: 720,
            seed: 123_456,
            view_chunks: 3,
            octaves: constants::terrain::DEFAULT_OCTAVES,
            frequency: constants::terrain::DEFAULT_FREQUENCY,
            amplitude: constants::terrain::DEFAULT_AMPLITUDE,
        }
    }
}

impl EngineConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.window_width < 320 || self.window_height < 240 {
            return Err(anyhow::anyhow!(
                "EngineConfig: Window dimensions too small (min 320x240)"
            ));
        }

        if self.window_width > 16384 || self.window_height > 16384 {
            return Err(anyhow::anyhow!(
                "EngineConfig: Window dimensions too large (max 16384x16384)"
            ));
        }

        if self.view_chunks == 0 {
            return Err(anyhow::anyhow!("EngineConfig: view_chunks cannot be 0"));
        }

        if self.view_chunks > 32 {
            return Err(anyhow::anyhow!(
                "EngineConfig: view_chunks {} exceeds maximum of 32",
                self.view_chunks
            ));
        }

        if self.octaves == 0 {
            return Err(anyhow::anyhow!("EngineConfig: octaves cannot be 0"));
        }

        if self.frequency <= 0.0 || self.amplitude <= 0.0 {
            return Err(anyhow::anyhow!(
                "EngineConfig: frequency and amplitude must be positive"
            ));
        }

        log::info!(
            "[EngineConfig] Validated: {}x{}, seed={}, {}x{} chunks",
            self.window_width,
            self.window_height,
            self.seed,
            self.view_chunks,
            self.view_chunks
        );
        Ok(())
    }
}

/// Main engine struct that owns the event loop and runs the sandbox.
pub struct Engine {
    config: EngineConfig,
    event_loop: EventLoop<()>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        log::debug!("[Engine::new] Starting engine initialization");
        config.validate()?;

        // Force X11 for WSL compatibility
        #[cfg(target_os = "linux")]
        let event_loop = {
            use winit::event_loop::EventLoopBuilder;
            use winit::platform::x11::EventLoopBuilderExtX11;
            EventLoopBuilder::new().with_x11().build()?
        };

        #[cfg(not(target_os = "linux"))]
        let event_loop = EventLoop::new()?;

        log::info!("[Engine::new] Engine initialization complete");

        Ok(Self { config, event_loop })
    }

    /// Run the sandbox until the window closes.
    pub fn run(self) -> Result<()> {
        log::info!("[Engine::run] Starting with config: {:?}", self.config);

        let result = renderer::run(self.event_loop, self.config);

        match &result {
            Ok(()) => log::info!("[Engine::run] Renderer returned successfully"),
            Err(error) => log::error!("[Engine::run] Renderer error: {}", error),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_rejects_tiny_window() {
        let config = EngineConfig {
            window_width: 100,
            window_height: 100,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_zero_chunks() {
        let config = EngineConfig {
            view_chunks: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

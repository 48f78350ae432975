//! Renderer data structures
//!
//! GPU state owned by the render submission layer. All resources are
//! created at init time; the per-frame path only writes the camera uniform
//! and records draw calls.

use super::mesh::{ChunkMesh, DebugMesh};

/// Point light parameters for the terrain pass. Must match LightUniform in
/// terrain.wgsl.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    /// Light position (vec3 + padding).
    pub position: [f32; 4],

    /// Ambient contribution.
    pub ambient: [f32; 4],

    /// Diffuse color.
    pub diffuse: [f32; 4],

    /// Attenuation factors: constant, linear, quadratic, padding.
    pub attenuation: [f32; 4],
}

impl Default for LightUniform {
    fn default() -> Self {
        Self {
            position: [5.0, 5.0, -2.0, 1.0],
            ambient: [0.3, 0.3, 0.3, 1.0],
            diffuse: [1.0, 1.0, 1.0, 1.0],
            attenuation: [1.0, 0.045, 0.0075, 0.0],
        }
    }
}

/// All GPU resources for one window.
pub struct RendererData {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface_config: wgpu::SurfaceConfiguration,

    pub depth_view: wgpu::TextureView,

    pub terrain_pipeline: wgpu::RenderPipeline,
    pub axes_pipeline: wgpu::RenderPipeline,

    pub camera_buffer: wgpu::Buffer,
    pub uniform_bind_group: wgpu::BindGroup,
    pub atlas_bind_group: wgpu::BindGroup,

    /// Uploaded terrain meshes, one per chunk.
    pub chunk_meshes: Vec<ChunkMesh>,

    /// Uploaded axis overlay geometry.
    pub axis_meshes: Vec<DebugMesh>,
}

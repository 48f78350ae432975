//! Renderer Module
//!
//! Opaque draw-submission layer: takes finished meshes plus a camera and
//! draws them. Split into data (GPU resource ownership) and operations
//! (setup, upload, frame submission, event loop).

pub mod mesh;
pub mod mesh_utils;
pub mod renderer_data;
pub mod renderer_operations;
pub mod texture_atlas;
pub mod vertex;

pub use mesh::{ChunkMesh, DebugMesh};
pub use renderer_data::{LightUniform, RendererData};
pub use renderer_operations::{
    init_renderer, render_frame, resize, run, upload_axis_overlay, upload_world_mesh,
};
pub use vertex::{DebugVertex, Vertex};

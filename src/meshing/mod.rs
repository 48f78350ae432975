//! Chunk meshing
//!
//! Turns a chunk's solid blocks into a visible-surface triangle mesh:
//! per-side quad templates, a reusable fixed-capacity geometry pool, and the
//! face-emission walk that culls internal faces.

mod geometry_pool;
mod mesher;
mod quad;

pub use geometry_pool::{GeometryPool, MeshData};
pub use mesher::{mesh_chunk, AtlasTile};
pub use quad::{direction_for, quad_for, Quad, Side, UvVertex};

//! GPU mesh upload
//!
//! Interleaves the geometry pool's exported arrays into vertex buffers and
//! wraps the resulting GPU buffers for draw submission.

use super::vertex::{DebugVertex, Vertex};
use crate::meshing::MeshData;
use wgpu::util::DeviceExt;

/// One chunk's uploaded mesh.
#[derive(Debug)]
pub struct ChunkMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

/// Uploaded debug geometry (axis boxes).
#[derive(Debug)]
pub struct DebugMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

/// Interleave a pool export into the GPU vertex format. The pool guarantees
/// the three arrays run in lockstep.
pub fn interleave_vertices(mesh: &MeshData) -> Vec<Vertex> {
    debug_assert_eq!(mesh.positions.len(), mesh.normals.len());
    debug_assert_eq!(mesh.positions.len(), mesh.uvs.len());

    mesh.positions
        .iter()
        .zip(&mesh.normals)
        .zip(&mesh.uvs)
        .map(|((&position, &normal), &uv)| Vertex {
            position,
            normal,
            uv,
        })
        .collect()
}

/// Upload one chunk's mesh data. The source arrays can be reused (the pool
/// resets) as soon as this returns.
pub fn upload_chunk_mesh(device: &wgpu::Device, mesh: &MeshData) -> ChunkMesh {
    let vertices = interleave_vertices(mesh);

    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("chunk-vertices"),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("chunk-indices"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    ChunkMesh {
        vertex_buffer,
        index_buffer,
        index_count: mesh.index_count() as u32,
    }
}

/// Upload flat-colored debug geometry.
pub fn upload_debug_mesh(
    device: &wgpu::Device,
    vertices: &[DebugVertex],
    indices: &[u32],
) -> DebugMesh {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("debug-vertices"),
        contents: bytemuck::cast_slice(vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("debug-indices"),
        contents: bytemuck::cast_slice(indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    DebugMesh {
        vertex_buffer,
        index_buffer,
        index_count: indices.len() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interleave_preserves_order() {
        let mesh = MeshData {
            positions: vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]],
            uvs: vec![[0.1, 0.2], [0.3, 0.4]],
            normals: vec![[0.0, 1.0, 0.0], [0.0, -1.0, 0.0]],
            indices: vec![0, 1],
        };

        let vertices = interleave_vertices(&mesh);
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(vertices[0].normal, [0.0, 1.0, 0.0]);
        assert_eq!(vertices[1].uv, [0.3, 0.4]);
    }
}

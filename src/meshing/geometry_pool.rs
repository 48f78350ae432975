//! Geometry pool - reusable fixed-capacity mesh accumulator
//!
//! Preallocates worst-case storage once and is reused across chunks:
//! accumulate one chunk's faces, export, reset, repeat. Appending past
//! capacity is a sizing defect and asserts; the pool never grows.

use super::quad::Quad;
use crate::constants::mesh::{MAX_INDICES, MAX_VERTICES};
use glam::{Vec2, Vec3};

/// Accumulating buffer of vertex/UV/normal/index data.
///
/// Every face appended contributes 4 vertices and the index pattern
/// (0, 1, 2), (2, 3, 0) relative to the running vertex cursor.
#[derive(Debug)]
pub struct GeometryPool {
    positions: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    normals: Vec<[f32; 3]>,
    indices: Vec<u32>,
    vertex_count: u32,
}

/// Immutable mesh export: right-sized copies of the pool's buffers, safe to
/// hand to a GPU upload while the pool is reused.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl GeometryPool {
    /// Create a pool sized for the worst-case chunk (every block solid,
    /// all six faces emitted).
    pub fn new() -> Self {
        Self {
            positions: Vec::with_capacity(MAX_VERTICES),
            uvs: Vec::with_capacity(MAX_VERTICES),
            normals: Vec::with_capacity(MAX_VERTICES),
            indices: Vec::with_capacity(MAX_INDICES),
            vertex_count: 0,
        }
    }

    /// Append one quad face: 4 vertices translated by `position`, UVs from
    /// the base atlas coordinate plus the per-vertex conditional offset, and
    /// the two-triangle index fan.
    ///
    /// A template UV of exactly 0 on an axis keeps the base coordinate on
    /// that axis; nonzero adds the cell offset. This pins every face to one
    /// atlas tile without per-face atlas lookups.
    pub fn add_face(&mut self, quad: &Quad, position: Vec3, uv: Vec2, uv_offset: Vec2) {
        assert!(
            self.vertex_count as usize + 4 <= MAX_VERTICES,
            "geometry pool vertex capacity exceeded ({} + 4 > {})",
            self.vertex_count,
            MAX_VERTICES
        );
        assert!(
            self.indices.len() + 6 <= MAX_INDICES,
            "geometry pool index capacity exceeded"
        );

        let normal = quad.normal.to_array();
        for vertex in &quad.vertices {
            let world = vertex.position + position;
            let u = if vertex.uv.x == 0.0 {
                uv.x
            } else {
                uv.x + uv_offset.x
            };
            let v = if vertex.uv.y == 0.0 {
                uv.y
            } else {
                uv.y + uv_offset.y
            };

            self.positions.push(world.to_array());
            self.uvs.push([u, v]);
            self.normals.push(normal);
        }

        let base = self.vertex_count;
        self.indices.push(base);
        self.indices.push(base + 1);
        self.indices.push(base + 2);
        self.indices.push(base + 2);
        self.indices.push(base + 3);
        self.indices.push(base);

        self.vertex_count += 4;
    }

    /// Rewind all buffer cursors without deallocating. O(1).
    pub fn reset(&mut self) {
        self.positions.clear();
        self.uvs.clear();
        self.normals.clear();
        self.indices.clear();
        self.vertex_count = 0;
    }

    /// Export right-sized copies of the accumulated buffers.
    pub fn to_mesh_data(&self) -> MeshData {
        MeshData {
            positions: self.positions.clone(),
            uvs: self.uvs.clone(),
            normals: self.normals.clone(),
            indices: self.indices.clone(),
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl Default for GeometryPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meshing::quad::{quad_for, Side};

    #[test]
    fn test_add_face_counts() {
        let mut pool = GeometryPool::new();
        pool.add_face(quad_for(Side::Up), Vec3::ZERO, Vec2::ZERO, Vec2::ZERO);

        assert_eq!(pool.vertex_count(), 4);
        assert_eq!(pool.index_count(), 6);

        let mesh = pool.to_mesh_data();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 2, 3, 0]);
    }

    #[test]
    fn test_index_fan_offsets_per_face() {
        let mut pool = GeometryPool::new();
        pool.add_face(quad_for(Side::Up), Vec3::ZERO, Vec2::ZERO, Vec2::ZERO);
        pool.add_face(quad_for(Side::Down), Vec3::ZERO, Vec2::ZERO, Vec2::ZERO);

        let mesh = pool.to_mesh_data();
        assert_eq!(mesh.indices[6..], [4, 5, 6, 6, 7, 4]);
        assert!(mesh.indices.iter().all(|&i| i < 8));
    }

    #[test]
    fn test_vertices_translated_by_position() {
        let mut pool = GeometryPool::new();
        let position = Vec3::new(10.0, 20.0, 30.0);
        pool.add_face(quad_for(Side::Up), position, Vec2::ZERO, Vec2::ZERO);

        let mesh = pool.to_mesh_data();
        let quad = quad_for(Side::Up);
        for (out, vertex) in mesh.positions.iter().zip(&quad.vertices) {
            assert_eq!(*out, (vertex.position + position).to_array());
        }
        for normal in &mesh.normals {
            assert_eq!(*normal, [0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn test_uv_base_and_offset_selection() {
        let mut pool = GeometryPool::new();
        let base = Vec2::new(0.125, 0.9375);
        let offset = Vec2::new(0.0625, 0.0625);
        pool.add_face(quad_for(Side::Up), Vec3::ZERO, base, offset);

        // Template UVs for Up are (0,0), (0,1), (1,0), (1,1): zero keeps the
        // base coordinate, one adds the cell offset.
        let mesh = pool.to_mesh_data();
        assert_eq!(mesh.uvs[0], [0.125, 0.9375]);
        assert_eq!(mesh.uvs[1], [0.125, 1.0]);
        assert_eq!(mesh.uvs[2], [0.1875, 0.9375]);
        assert_eq!(mesh.uvs[3], [0.1875, 1.0]);
    }

    #[test]
    fn test_reset_then_reaccumulate_is_identical() {
        let mut pool = GeometryPool::new();
        let base = Vec2::new(0.125, 0.9375);
        let offset = Vec2::new(0.0625, 0.0625);

        let accumulate = |pool: &mut GeometryPool| {
            for side in Side::ALL {
                pool.add_face(quad_for(side), Vec3::new(1.0, 2.0, 3.0), base, offset);
            }
        };

        accumulate(&mut pool);
        let first = pool.to_mesh_data();

        pool.reset();
        assert!(pool.is_empty());
        assert_eq!(pool.index_count(), 0);

        accumulate(&mut pool);
        let second = pool.to_mesh_data();

        assert_eq!(first, second);
    }
}

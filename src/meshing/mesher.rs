//! Face emission - chunk to visible-surface mesh
//!
//! Walks every block in a chunk and emits a quad per visible side into the
//! geometry pool. A side is visible when its neighbor is `Air`, or when the
//! neighbor lies outside the chunk: adjacent chunks are meshed
//! independently, so boundary faces are emitted conservatively. That
//! over-draws at chunk seams; accepted behavior, not to be "fixed" without a
//! cross-chunk neighbor query.

use super::geometry_pool::GeometryPool;
use super::quad::{direction_for, quad_for, Side};
use crate::constants::atlas::{DEFAULT_TILE_X, DEFAULT_TILE_Y, UV_CELL};
use crate::world::core::Chunk;
use glam::{IVec3, Vec2};

/// One cell of the texture atlas, addressed as base coordinate + cell
/// offset. Every face of every block maps to the same tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasTile {
    pub base: Vec2,
    pub cell_offset: Vec2,
}

impl AtlasTile {
    /// Tile at (column, row) in the atlas grid.
    pub fn new(column: u32, row: u32) -> Self {
        Self {
            base: Vec2::new(UV_CELL * column as f32, UV_CELL * row as f32),
            cell_offset: Vec2::splat(UV_CELL),
        }
    }
}

impl Default for AtlasTile {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_X, DEFAULT_TILE_Y)
    }
}

/// Accumulate one chunk's visible faces into the pool.
///
/// The caller owns the accumulation cycle: export with
/// [`GeometryPool::to_mesh_data`] and [`GeometryPool::reset`] before meshing
/// the next chunk. O(size^3) block visits, O(1) per visible face, no
/// allocation.
pub fn mesh_chunk(chunk: &Chunk, pool: &mut GeometryPool, tile: AtlasTile) {
    let size = chunk.size();
    for x in 0..size {
        for y in 0..size {
            for z in 0..size {
                let block = chunk.at(x, y, z);
                if block.block_type.is_air() {
                    continue;
                }

                for side in Side::ALL {
                    if face_visible(chunk, IVec3::new(x as i32, y as i32, z as i32), side) {
                        pool.add_face(quad_for(side), block.world, tile.base, tile.cell_offset);
                    }
                }
            }
        }
    }
}

/// Whether the given side of the block at `local` should be drawn.
fn face_visible(chunk: &Chunk, local: IVec3, side: Side) -> bool {
    let neighbor = local + direction_for(side);
    let size = chunk.size() as i32;

    // Neighbor outside this chunk: unknown, draw conservatively.
    if neighbor.min_element() < 0 || neighbor.max_element() >= size {
        return true;
    }

    chunk
        .at(neighbor.x as u32, neighbor.y as u32, neighbor.z as u32)
        .block_type
        .is_air()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::core::BlockType;
    use glam::Vec3;

    fn filled_chunk(size: u32, block_type: BlockType) -> Chunk {
        let mut chunk = Chunk::with_size(Vec3::ZERO, size);
        for x in 0..size {
            for y in 0..size {
                for z in 0..size {
                    chunk.set(x, y, z, block_type);
                }
            }
        }
        chunk
    }

    fn meshed(chunk: &Chunk) -> crate::meshing::MeshData {
        let mut pool = GeometryPool::new();
        mesh_chunk(chunk, &mut pool, AtlasTile::default());
        pool.to_mesh_data()
    }

    #[test]
    fn test_single_block_chunk_emits_six_faces() {
        let mut chunk = Chunk::with_size(Vec3::ZERO, 1);
        chunk.set(0, 0, 0, BlockType::Dirt);

        let mesh = meshed(&chunk);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
    }

    #[test]
    fn test_all_air_chunk_emits_nothing() {
        let chunk = Chunk::new(Vec3::ZERO);
        let mesh = meshed(&chunk);
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.index_count(), 0);
    }

    #[test]
    fn test_full_chunk_emits_exactly_the_shell() {
        // All blocks solid: only boundary-facing sides of border blocks are
        // drawn, one 16x16 sheet per chunk face.
        let chunk = filled_chunk(16, BlockType::Dirt);
        let mesh = meshed(&chunk);

        let faces = 6 * 16 * 16;
        assert_eq!(mesh.vertex_count(), faces * 4);
        assert_eq!(mesh.index_count(), faces * 6);
    }

    #[test]
    fn test_index_range_covers_vertices() {
        let chunk = filled_chunk(4, BlockType::Dirt);
        let mesh = meshed(&chunk);

        let vertex_count = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < vertex_count));
        // 6N indices for 4N vertices.
        assert_eq!(mesh.index_count() * 4, mesh.vertex_count() * 6);
    }

    #[test]
    fn test_interior_air_pocket_exposes_neighbor_faces() {
        let mut chunk = filled_chunk(16, BlockType::Dirt);
        chunk.set(8, 8, 8, BlockType::Air);

        let mesh = meshed(&chunk);
        // The shell plus the six faces now facing into the pocket.
        let faces = 6 * 16 * 16 + 6;
        assert_eq!(mesh.vertex_count(), faces * 4);
        assert_eq!(mesh.index_count(), faces * 6);
    }

    #[test]
    fn test_border_block_emits_outward_face_regardless_of_state() {
        // Lone block on the -X border: the Left face is a chunk-boundary
        // face and must be emitted even though nothing is known beyond it;
        // the other five sides face Air neighbors.
        let mut chunk = Chunk::new(Vec3::ZERO);
        chunk.set(0, 5, 5, BlockType::Dirt);

        let mesh = meshed(&chunk);
        assert_eq!(mesh.vertex_count(), 6 * 4);
    }

    #[test]
    fn test_solid_neighbors_suppress_shared_faces() {
        // Two adjacent interior blocks hide exactly the pair of faces
        // between them: 12 faces total instead of 12 + 2.
        let mut chunk = Chunk::new(Vec3::ZERO);
        chunk.set(5, 5, 5, BlockType::Dirt);
        chunk.set(6, 5, 5, BlockType::Dirt);

        let mesh = meshed(&chunk);
        assert_eq!(mesh.vertex_count(), 10 * 4);
        assert_eq!(mesh.index_count(), 10 * 6);
    }

    #[test]
    fn test_faces_are_translated_to_world_positions() {
        let origin = Vec3::new(32.0, 0.0, 64.0);
        let mut chunk = Chunk::with_size(origin, 1);
        chunk.set(0, 0, 0, BlockType::Dirt);

        let mesh = meshed(&chunk);
        for position in &mesh.positions {
            for (axis, &coord) in position.iter().enumerate() {
                let base = origin.to_array()[axis];
                assert!(coord == base || coord == base + 1.0);
            }
        }
    }

    #[test]
    fn test_remesh_after_reset_is_byte_identical() {
        let gen_chunk = filled_chunk(8, BlockType::Dirt);
        let mut pool = GeometryPool::new();

        mesh_chunk(&gen_chunk, &mut pool, AtlasTile::default());
        let first = pool.to_mesh_data();

        pool.reset();
        mesh_chunk(&gen_chunk, &mut pool, AtlasTile::default());
        let second = pool.to_mesh_data();

        assert_eq!(first, second);
    }
}

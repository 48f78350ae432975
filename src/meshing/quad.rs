//! Cube sides and per-side quad templates
//!
//! `Side` indexes two parallel const tables: the outward direction vector
//! and the unit-cube face quad. The enumeration order is a wire-level
//! contract; reordering one table without the other breaks face emission,
//! so the tests below lock them together.

use glam::{IVec3, Vec2, Vec3};

/// The side of a cube/block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Up = 0,
    Down = 1,
    Right = 2,
    Left = 3,
    Front = 4,
    Back = 5,
}

impl Side {
    /// All sides, in table order.
    pub const ALL: [Side; 6] = [
        Side::Up,
        Side::Down,
        Side::Right,
        Side::Left,
        Side::Front,
        Side::Back,
    ];
}

/// One corner of a face quad: unit-cube position plus template UV.
///
/// Template UVs are selector flags as much as coordinates: a 0 on an axis
/// keeps the caller's base atlas coordinate, a 1 adds the cell offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvVertex {
    pub position: Vec3,
    pub uv: Vec2,
}

impl UvVertex {
    pub const fn new(x: f32, y: f32, z: f32, u: f32, v: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            uv: Vec2::new(u, v),
        }
    }
}

/// Canonical 4-vertex description of one unit-cube face.
///
/// Vertex order is fixed; the geometry pool splits every quad into the
/// triangles (0, 1, 2) and (2, 3, 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub normal: Vec3,
    pub vertices: [UvVertex; 4],
}

/// Outward direction vectors, ordered by [`Side`].
const DIRECTIONS: [IVec3; 6] = [
    IVec3::Y,
    IVec3::NEG_Y,
    IVec3::X,
    IVec3::NEG_X,
    IVec3::Z,
    IVec3::NEG_Z,
];

/// Unit-cube face quads, ordered by [`Side`].
const QUADS: [Quad; 6] = [
    // Up
    Quad {
        normal: Vec3::Y,
        vertices: [
            UvVertex::new(0.0, 1.0, 0.0, 0.0, 0.0),
            UvVertex::new(1.0, 1.0, 0.0, 0.0, 1.0),
            UvVertex::new(0.0, 1.0, 1.0, 1.0, 0.0),
            UvVertex::new(1.0, 1.0, 1.0, 1.0, 1.0),
        ],
    },
    // Down
    Quad {
        normal: Vec3::NEG_Y,
        vertices: [
            UvVertex::new(0.0, 0.0, 0.0, 0.0, 0.0),
            UvVertex::new(1.0, 0.0, 0.0, 0.0, 1.0),
            UvVertex::new(0.0, 0.0, 1.0, 1.0, 0.0),
            UvVertex::new(1.0, 0.0, 1.0, 1.0, 1.0),
        ],
    },
    // Right
    Quad {
        normal: Vec3::X,
        vertices: [
            UvVertex::new(1.0, 0.0, 0.0, 0.0, 0.0),
            UvVertex::new(1.0, 0.0, 1.0, 0.0, 1.0),
            UvVertex::new(1.0, 1.0, 0.0, 1.0, 0.0),
            UvVertex::new(1.0, 1.0, 1.0, 1.0, 1.0),
        ],
    },
    // Left
    Quad {
        normal: Vec3::NEG_X,
        vertices: [
            UvVertex::new(0.0, 0.0, 0.0, 0.0, 0.0),
            UvVertex::new(0.0, 0.0, 1.0, 0.0, 1.0),
            UvVertex::new(0.0, 1.0, 0.0, 1.0, 0.0),
            UvVertex::new(0.0, 1.0, 1.0, 1.0, 1.0),
        ],
    },
    // Front
    Quad {
        normal: Vec3::Z,
        vertices: [
            UvVertex::new(0.0, 0.0, 1.0, 0.0, 0.0),
            UvVertex::new(0.0, 1.0, 1.0, 0.0, 1.0),
            UvVertex::new(1.0, 0.0, 1.0, 1.0, 0.0),
            UvVertex::new(1.0, 1.0, 1.0, 1.0, 1.0),
        ],
    },
    // Back
    Quad {
        normal: Vec3::NEG_Z,
        vertices: [
            UvVertex::new(0.0, 0.0, 0.0, 0.0, 0.0),
            UvVertex::new(0.0, 1.0, 0.0, 0.0, 1.0),
            UvVertex::new(1.0, 0.0, 0.0, 1.0, 0.0),
            UvVertex::new(1.0, 1.0, 0.0, 1.0, 1.0),
        ],
    },
];

/// Outward direction vector for a side.
#[inline]
pub fn direction_for(side: Side) -> IVec3 {
    DIRECTIONS[side as usize]
}

/// Face quad template for a side.
#[inline]
pub fn quad_for(side: Side) -> &'static Quad {
    &QUADS[side as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_ordinals_match_table_order() {
        for (i, side) in Side::ALL.iter().enumerate() {
            assert_eq!(*side as usize, i);
        }
    }

    #[test]
    fn test_tables_stay_parallel() {
        // The quad normal must equal the side's direction vector; the two
        // tables are indexed in lockstep.
        for side in Side::ALL {
            let dir = direction_for(side);
            let normal = quad_for(side).normal;
            assert_eq!(normal, dir.as_vec3(), "mismatch for {:?}", side);
        }
    }

    #[test]
    fn test_quad_vertices_lie_on_their_face() {
        for side in Side::ALL {
            let quad = quad_for(side);
            let dir = direction_for(side).as_vec3();
            for vertex in &quad.vertices {
                // On the unit cube...
                for c in vertex.position.to_array() {
                    assert!(c == 0.0 || c == 1.0);
                }
                // ...and on the plane the face belongs to.
                let along = vertex.position.dot(dir.abs());
                let expected = if dir.max_element() > 0.0 { 1.0 } else { 0.0 };
                assert_eq!(along, expected, "off-plane vertex for {:?}", side);
            }
        }
    }

    #[test]
    fn test_template_uvs_are_selector_flags() {
        for side in Side::ALL {
            for vertex in &quad_for(side).vertices {
                assert!(vertex.uv.x == 0.0 || vertex.uv.x == 1.0);
                assert!(vertex.uv.y == 0.0 || vertex.uv.y == 1.0);
            }
        }
    }
}

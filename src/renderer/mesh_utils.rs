//! Debug geometry builders
//!
//! Axis-aligned boxes used for the world-axis overlay.

use super::vertex::DebugVertex;
use glam::Vec3;

/// Half-width of an axis box.
const AXIS_WIDTH: f32 = 0.02;

/// Half-length of an axis box.
const AXIS_LENGTH: f32 = 100.0;

/// Generate a flat-colored box between `min` and `max`.
/// Returns 24 vertices (4 per face) and 36 indices.
pub fn create_box_mesh(min: Vec3, max: Vec3, color: [f32; 3]) -> (Vec<DebugVertex>, Vec<u32>) {
    // The 8 corners of the box
    let corners = [
        Vec3::new(min.x, min.y, min.z), // 0: left, bottom, back
        Vec3::new(max.x, min.y, min.z), // 1: right, bottom, back
        Vec3::new(max.x, max.y, min.z), // 2: right, top, back
        Vec3::new(min.x, max.y, min.z), // 3: left, top, back
        Vec3::new(min.x, min.y, max.z), // 4: left, bottom, front
        Vec3::new(max.x, min.y, max.z), // 5: right, bottom, front
        Vec3::new(max.x, max.y, max.z), // 6: right, top, front
        Vec3::new(min.x, max.y, max.z), // 7: left, top, front
    ];

    // Corner indices per face
    let faces: [[usize; 4]; 6] = [
        [1, 5, 6, 2], // +X
        [4, 0, 3, 7], // -X
        [3, 2, 6, 7], // +Y
        [4, 5, 1, 0], // -Y
        [5, 4, 7, 6], // +Z
        [0, 1, 2, 3], // -Z
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for face in &faces {
        let base = vertices.len() as u32;
        for &corner in face {
            vertices.push(DebugVertex {
                position: corners[corner].to_array(),
                color,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    (vertices, indices)
}

/// The three world-axis boxes: X red, Y green, Z blue.
pub fn create_axis_meshes() -> [(Vec<DebugVertex>, Vec<u32>); 3] {
    let l = AXIS_LENGTH;
    let w = AXIS_WIDTH;
    [
        create_box_mesh(
            Vec3::new(-l, -w, -w),
            Vec3::new(l, w, w),
            [1.0, 0.0, 0.0],
        ),
        create_box_mesh(
            Vec3::new(-w, -l, -w),
            Vec3::new(w, l, w),
            [0.0, 1.0, 0.0],
        ),
        create_box_mesh(
            Vec3::new(-w, -w, -l),
            Vec3::new(w, w, l),
            [0.0, 0.0, 1.0],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_mesh_counts() {
        let (vertices, indices) = create_box_mesh(Vec3::ZERO, Vec3::ONE, [1.0, 1.0, 1.0]);
        assert_eq!(vertices.len(), 24);
        assert_eq!(indices.len(), 36);
        assert!(indices.iter().all(|&i| i < 24));
    }

    #[test]
    fn test_box_mesh_spans_bounds() {
        let min = Vec3::new(-2.0, 0.0, 1.0);
        let max = Vec3::new(3.0, 4.0, 5.0);
        let (vertices, _) = create_box_mesh(min, max, [0.5, 0.5, 0.5]);

        for vertex in &vertices {
            for (axis, &c) in vertex.position.iter().enumerate() {
                assert!(c == min.to_array()[axis] || c == max.to_array()[axis]);
            }
        }
    }

    #[test]
    fn test_axis_meshes_have_distinct_colors() {
        let axes = create_axis_meshes();
        assert_eq!(axes[0].0[0].color, [1.0, 0.0, 0.0]);
        assert_eq!(axes[1].0[0].color, [0.0, 1.0, 0.0]);
        assert_eq!(axes[2].0[0].color, [0.0, 0.0, 1.0]);
    }
}

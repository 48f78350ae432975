//! Camera data structures
//!
//! Pure data; all transformations happen in camera_operations.rs. Derived
//! state (view/projection matrices) is never stored here: it is recomputed
//! on read from position/yaw/pitch, so there is nothing to go stale.

use cgmath::Point3;

/// First-person camera state.
#[derive(Debug, Clone, Copy)]
pub struct CameraData {
    /// Camera position in world space.
    pub position: Point3<f32>,

    /// Yaw rotation (radians, around Y axis).
    pub yaw_radians: f32,

    /// Pitch rotation (radians, around X axis).
    pub pitch_radians: f32,

    /// Field of view (vertical, radians).
    pub fov_radians: f32,

    /// Aspect ratio (width / height).
    pub aspect_ratio: f32,

    /// Near clipping plane distance.
    pub near_plane: f32,

    /// Far clipping plane distance.
    pub far_plane: f32,

    /// Movement speed (blocks per second).
    pub movement_speed: f32,

    /// Rotation sensitivity (radians per pixel of mouse travel).
    pub rotation_sensitivity: f32,
}

impl Default for CameraData {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 0.0),
            yaw_radians: 0.0,
            pitch_radians: 0.0,
            fov_radians: std::f32::consts::FRAC_PI_3,
            aspect_ratio: 16.0 / 9.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            movement_speed: 6.0,
            rotation_sensitivity: 0.002,
        }
    }
}

/// Batched camera deltas for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraTransformBatch {
    /// Forward/backward movement delta.
    pub forward_delta: f32,

    /// Left/right movement delta.
    pub right_delta: f32,

    /// Up/down movement delta.
    pub up_delta: f32,

    /// Yaw rotation delta (radians).
    pub yaw_delta: f32,

    /// Pitch rotation delta (radians).
    pub pitch_delta: f32,
}

/// Camera uniform buffer data for the GPU. Must match the shader layout
/// exactly.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// View matrix (4x4, column-major).
    pub view_matrix: [[f32; 4]; 4],

    /// Projection matrix (4x4, column-major).
    pub projection_matrix: [[f32; 4]; 4],

    /// View-projection matrix (4x4, column-major).
    pub view_projection_matrix: [[f32; 4]; 4],

    /// Camera position (vec3 + padding).
    pub camera_position: [f32; 4],
}

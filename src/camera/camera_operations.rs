//! Camera operations
//!
//! Pure functions over [`CameraData`]: take data, return new data. View and
//! projection matrices are derived on every read rather than cached.

use super::camera_data::{CameraData, CameraTransformBatch, CameraUniform};
use cgmath::{InnerSpace, Matrix4, Point3, Rad, Vector3};

/// cgmath produces OpenGL clip space (z in [-1, 1]); wgpu expects [0, 1].
#[rustfmt::skip]
const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize a camera at a position with the given yaw/pitch.
pub fn init_camera(position: Point3<f32>, yaw: f32, pitch: f32) -> CameraData {
    CameraData {
        position,
        yaw_radians: yaw,
        pitch_radians: pitch,
        ..Default::default()
    }
}

// ============================================================================
// VIEW/PROJECTION MATRICES
// ============================================================================

/// Build the view matrix from camera data.
pub fn build_view_matrix(camera: &CameraData) -> Matrix4<f32> {
    let forward = calculate_forward_vector(camera.yaw_radians, camera.pitch_radians);
    let target = camera.position + forward;
    let up = Vector3::new(0.0, 1.0, 0.0);

    Matrix4::look_at_rh(camera.position, target, up)
}

/// Build the projection matrix from camera data.
pub fn build_projection_matrix(camera: &CameraData) -> Matrix4<f32> {
    OPENGL_TO_WGPU_MATRIX
        * cgmath::perspective(
            Rad(camera.fov_radians),
            camera.aspect_ratio,
            camera.near_plane,
            camera.far_plane,
        )
}

/// Build the GPU uniform for the camera.
pub fn build_camera_uniform(camera: &CameraData) -> CameraUniform {
    let view_matrix = build_view_matrix(camera);
    let projection_matrix = build_projection_matrix(camera);
    let view_projection = projection_matrix * view_matrix;

    CameraUniform {
        view_matrix: view_matrix.into(),
        projection_matrix: projection_matrix.into(),
        view_projection_matrix: view_projection.into(),
        camera_position: [
            camera.position.x,
            camera.position.y,
            camera.position.z,
            1.0,
        ],
    }
}

// ============================================================================
// UPDATES
// ============================================================================

/// Update the aspect ratio (e.g. on window resize).
pub fn update_aspect_ratio(camera: &CameraData, width: u32, height: u32) -> CameraData {
    let mut new_camera = *camera;
    new_camera.aspect_ratio = width as f32 / height.max(1) as f32;
    new_camera
}

// ============================================================================
// MOVEMENT
// ============================================================================

/// Move the camera along its forward direction.
pub fn move_forward(camera: &CameraData, distance: f32) -> CameraData {
    let forward = calculate_forward_vector(camera.yaw_radians, camera.pitch_radians);
    let mut new_camera = *camera;
    new_camera.position += forward * distance;
    new_camera
}

/// Move the camera along its right direction.
pub fn move_right(camera: &CameraData, distance: f32) -> CameraData {
    let right = calculate_right_vector(camera.yaw_radians);
    let mut new_camera = *camera;
    new_camera.position += right * distance;
    new_camera
}

/// Move the camera along the world up axis.
pub fn move_up(camera: &CameraData, distance: f32) -> CameraData {
    let mut new_camera = *camera;
    new_camera.position.y += distance;
    new_camera
}

/// Rotate the camera by yaw/pitch deltas (radians).
pub fn rotate(camera: &CameraData, yaw_delta: f32, pitch_delta: f32) -> CameraData {
    let mut new_camera = *camera;
    new_camera.yaw_radians += yaw_delta;
    new_camera.pitch_radians += pitch_delta;

    // Clamp pitch to avoid gimbal lock
    const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
    new_camera.pitch_radians = new_camera.pitch_radians.clamp(-PITCH_LIMIT, PITCH_LIMIT);

    new_camera
}

// ============================================================================
// BATCH OPERATIONS
// ============================================================================

/// Apply one frame's worth of batched deltas, movement scaled by delta time.
pub fn apply_transform_batch(
    camera: &CameraData,
    batch: &CameraTransformBatch,
    delta_time: f32,
) -> CameraData {
    let mut result = *camera;

    result = rotate(&result, batch.yaw_delta, batch.pitch_delta);

    result = move_forward(&result, batch.forward_delta * delta_time);
    result = move_right(&result, batch.right_delta * delta_time);
    result = move_up(&result, batch.up_delta * delta_time);

    result
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Forward vector from yaw and pitch.
pub fn calculate_forward_vector(yaw: f32, pitch: f32) -> Vector3<f32> {
    Vector3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
    .normalize()
}

/// Right vector from yaw.
pub fn calculate_right_vector(yaw: f32) -> Vector3<f32> {
    Vector3::new(
        (yaw - std::f32::consts::FRAC_PI_2).cos(),
        0.0,
        (yaw - std::f32::consts::FRAC_PI_2).sin(),
    )
    .normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_vector_at_zero_rotation() {
        let forward = calculate_forward_vector(0.0, 0.0);
        assert!((forward.x - 1.0).abs() < 1e-6);
        assert!(forward.y.abs() < 1e-6);
        assert!(forward.z.abs() < 1e-6);
    }

    #[test]
    fn test_pitch_clamped_at_limit() {
        let camera = CameraData::default();
        let rotated = rotate(&camera, 0.0, 10.0);
        assert!(rotated.pitch_radians < std::f32::consts::FRAC_PI_2);

        let rotated = rotate(&camera, 0.0, -10.0);
        assert!(rotated.pitch_radians > -std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn test_move_up_ignores_orientation() {
        let camera = init_camera(Point3::new(0.0, 0.0, 0.0), 1.2, 0.7);
        let moved = move_up(&camera, 3.0);
        assert_eq!(moved.position.x, camera.position.x);
        assert_eq!(moved.position.y, 3.0);
        assert_eq!(moved.position.z, camera.position.z);
    }

    #[test]
    fn test_batch_scales_movement_by_delta_time() {
        let camera = init_camera(Point3::new(0.0, 0.0, 0.0), 0.0, 0.0);
        let batch = CameraTransformBatch {
            forward_delta: 2.0,
            ..Default::default()
        };

        let moved = apply_transform_batch(&camera, &batch, 0.5);
        // Facing +X at zero rotation; 2.0 * 0.5 = 1.0 blocks forward.
        assert!((moved.position.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_uniform_embeds_position() {
        let camera = init_camera(Point3::new(2.0, 5.0, -10.0), 0.0, 0.0);
        let uniform = build_camera_uniform(&camera);
        assert_eq!(uniform.camera_position, [2.0, 5.0, -10.0, 1.0]);
    }

    #[test]
    fn test_aspect_ratio_update() {
        let camera = CameraData::default();
        let resized = update_aspect_ratio(&camera, 1920, 1080);
        assert!((resized.aspect_ratio - 1920.0 / 1080.0).abs() < 1e-6);
    }
}

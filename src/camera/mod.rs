/// Camera Module
///
/// Split the way the rest of the engine is:
/// - camera_data.rs: pure data structures with no methods
/// - camera_operations.rs: pure functions that operate on the data
pub mod camera_data;
pub mod camera_operations;

// Re-export data structures
pub use camera_data::{CameraData, CameraTransformBatch, CameraUniform};

// Re-export all operations
pub use camera_operations::{
    // Initialization
    init_camera,

    // View/projection
    build_view_matrix,
    build_projection_matrix,
    build_camera_uniform,

    // Updates
    update_aspect_ratio,

    // Movement
    move_forward,
    move_right,
    move_up,
    rotate,

    // Batch operations
    apply_transform_batch,

    // Utilities
    calculate_forward_vector,
    calculate_right_vector,
};

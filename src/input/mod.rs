/// Input Module
///
/// - input_data.rs: the polled state, no methods
/// - input_operations.rs: winit event translation and per-frame drains
pub mod input_data;
pub mod input_operations;

pub use input_data::InputState;
pub use input_operations::{movement_axes, process_key_event, process_mouse_delta, take_look_delta};

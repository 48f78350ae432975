//! Input operations
//!
//! Translate winit events into [`InputState`] updates and drain the state
//! into per-frame movement/look axes.

use super::input_data::InputState;
use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Apply a keyboard event. W/A/S/D move, Q/E raise and lower.
pub fn process_key_event(input: &mut InputState, event: &KeyEvent) {
    let pressed = event.state.is_pressed();
    match event.physical_key {
        PhysicalKey::Code(KeyCode::KeyW) => input.forward_down = pressed,
        PhysicalKey::Code(KeyCode::KeyS) => input.back_down = pressed,
        PhysicalKey::Code(KeyCode::KeyA) => input.left_down = pressed,
        PhysicalKey::Code(KeyCode::KeyD) => input.right_down = pressed,
        PhysicalKey::Code(KeyCode::KeyQ) => input.up_down = pressed,
        PhysicalKey::Code(KeyCode::KeyE) => input.down_down = pressed,
        _ => {}
    }
}

/// Accumulate relative mouse motion.
pub fn process_mouse_delta(input: &mut InputState, delta_x: f64, delta_y: f64) {
    input.look_delta_x += delta_x as f32;
    input.look_delta_y += delta_y as f32;
}

/// Current movement axes as (forward, right, up), each in {-1, 0, 1}.
pub fn movement_axes(input: &InputState) -> (f32, f32, f32) {
    let axis = |positive: bool, negative: bool| {
        (positive as i32 as f32) - (negative as i32 as f32)
    };
    (
        axis(input.forward_down, input.back_down),
        axis(input.right_down, input.left_down),
        axis(input.up_down, input.down_down),
    )
}

/// Drain the accumulated look deltas, resetting them to zero.
pub fn take_look_delta(input: &mut InputState) -> (f32, f32) {
    let delta = (input.look_delta_x, input.look_delta_y);
    input.look_delta_x = 0.0;
    input.look_delta_y = 0.0;
    delta
}

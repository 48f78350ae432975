//! Input state data
//!
//! Pure data; event translation lives in input_operations.rs.

/// Polled keyboard/mouse state for one window.
///
/// Movement keys are level-triggered (held flags); mouse look is
/// edge-triggered (deltas accumulate until drained by the frame that
/// consumes them).
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub forward_down: bool,
    pub back_down: bool,
    pub left_down: bool,
    pub right_down: bool,
    pub up_down: bool,
    pub down_down: bool,

    /// Accumulated horizontal mouse travel (pixels) since the last drain.
    pub look_delta_x: f32,

    /// Accumulated vertical mouse travel (pixels) since the last drain.
    pub look_delta_y: f32,
}

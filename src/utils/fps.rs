//! Frames-per-second counter
//!
//! Counts frames and reports once per second; the caller decides what to do
//! with the number (the sandbox logs it).

use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Rolling one-second frame counter.
#[derive(Debug)]
pub struct FpsCounter {
    frames: u32,
    window_start: Instant,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: 0,
            window_start: Instant::now(),
        }
    }

    /// Record one frame. Returns the frame count for the last full second
    /// when a report is due, otherwise `None`.
    pub fn frame(&mut self) -> Option<u32> {
        self.frames += 1;

        if self.window_start.elapsed() >= REPORT_INTERVAL {
            let count = self.frames;
            self.frames = 0;
            self.window_start = Instant::now();
            return Some(count);
        }
        None
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

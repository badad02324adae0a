//! Fixed end-of-frame pacing.
//!
//! Every frame sleeps for the same `1000 / fps` milliseconds regardless of
//! how long the frame's work took.  Movement is applied per frame, so world
//! speed follows the achieved frame rate.

use std::thread;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameLimiter {
    interval: Duration,
}

impl FrameLimiter {
    /// `fps` of zero is treated as one frame per second.
    pub fn new(fps: u32) -> Self {
        let fps = fps.max(1);
        Self {
            interval: Duration::from_millis(1000 / u64::from(fps)),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn wait(&self) {
        thread::sleep(self.interval);
    }
}

//! Wall-clock budget for a generation batch

use crate::ResourceLimits;
use std::time::Instant;

pub struct TimeoutTracker {
    start_time: Instant,
}

impl TimeoutTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }

    /// True once the batch has used up `max_generation_time_ms`
    pub fn is_exhausted(&self, limits: &ResourceLimits) -> bool {
        self.elapsed_ms() > limits.max_generation_time_ms
    }
}

impl Default for TimeoutTracker {
    fn default() -> Self {
        Self::new()
    }
}

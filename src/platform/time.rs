//! Fixed-rate tick scheduling
//!
//! Replaces a timer that posts "tick done" events into a shared queue: the
//! driver feeds elapsed wall time in, the scheduler runs whole simulation
//! steps directly and latches a frame-ready flag for the render side.

use std::time::Duration;

use crate::consts::{MAX_SUBSTEPS, TICK_INTERVAL_MS};

#[derive(Debug, Clone)]
pub struct FixedStepScheduler {
    step: Duration,
    max_substeps: u32,
    accumulator: Duration,
    frame_ready: bool,
    total_steps: u64,
}

impl Default for FixedStepScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_INTERVAL_MS as u64))
    }
}

impl FixedStepScheduler {
    pub fn new(step: Duration) -> Self {
        Self {
            step: step.max(Duration::from_millis(1)),
            max_substeps: MAX_SUBSTEPS,
            accumulator: Duration::ZERO,
            frame_ready: false,
            total_steps: 0,
        }
    }

    pub fn from_interval_ms(ms: u32) -> Self {
        Self::new(Duration::from_millis(ms as u64))
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Feed elapsed time and run every step that is due
    ///
    /// At most `max_substeps` run per call; any backlog beyond that is dropped
    /// so a long stall does not turn into a burst of catch-up steps.
    pub fn advance<F: FnMut()>(&mut self, elapsed: Duration, mut step_fn: F) -> u32 {
        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            step_fn();
            self.accumulator -= self.step;
            substeps += 1;
        }

        if substeps == self.max_substeps && self.accumulator >= self.step {
            log::debug!("Dropping {:?} of tick backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        if substeps > 0 {
            self.total_steps += substeps as u64;
            self.frame_ready = true;
        }
        substeps
    }

    /// True once per batch of new steps; clears the latch
    pub fn take_frame_ready(&mut self) -> bool {
        std::mem::take(&mut self.frame_ready)
    }
}

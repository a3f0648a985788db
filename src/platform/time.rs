//! Session clocks in milliseconds

use std::time::Instant;

/// Source of the session clock. Time starts at 0 when the clock is created.
pub trait Clock {
    /// Current reading without advancing
    fn now_ms(&self) -> u64;

    /// Reading to use for the next tick
    fn sample(&mut self) -> u64;
}

/// Wall clock
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sample(&mut self) -> u64 {
        self.now_ms()
    }
}

/// Simulated clock that moves exactly one frame per sample
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    hz: u32,
    frame: u64,
}

impl FixedStepClock {
    pub fn new(hz: u32) -> Self {
        Self {
            hz: hz.max(1),
            frame: 0,
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Clock for FixedStepClock {
    fn now_ms(&self) -> u64 {
        // Computed from the frame count so rounding never drifts
        self.frame * 1000 / self.hz as u64
    }

    fn sample(&mut self) -> u64 {
        self.frame += 1;
        self.now_ms()
    }
}

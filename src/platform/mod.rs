//! Platform abstraction layer
//!
//! Handles front-end differences for:
//! - Time (wall clock or fixed-step simulated clock)
//! - Input (keyboard front ends, scripted drivers)

pub mod input;
pub mod time;

pub use input::{Autopilot, InputSource};
pub use time::{Clock, FixedStepClock, SystemClock};

//! Platform abstraction layer
//!
//! Handles the host-facing edges of the game loop:
//! - Input events (keyboard polling)
//! - Time (fixed-step pacing)

pub mod input;
pub mod time;

pub use input::{FrameInput, InputLatch};
pub use time::FrameClock;

//! Keyboard input
//!
//! Arrow keys move, `P` toggles pause, `Space` starts, `Escape` quits.

use macroquad::input::{KeyCode, is_key_down, is_key_pressed};

use crate::sim::TickInput;

/// Snapshot of keyboard state observed during a single display frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Held
    pub left: bool,
    /// Held
    pub right: bool,
    /// Edge
    pub pause: bool,
    /// Edge
    pub start: bool,
    /// Edge
    pub quit: bool,
}

impl FrameInput {
    pub fn poll() -> Self {
        Self {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            pause: is_key_pressed(KeyCode::P),
            start: is_key_pressed(KeyCode::Space),
            quit: is_key_pressed(KeyCode::Escape),
        }
    }
}

/// Carries edge-triggered presses until a simulation step consumes them
///
/// A fast display can produce frames with no simulation step; a press seen
/// on such a frame must still reach the next step, exactly once.
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    pending: TickInput,
}

impl InputLatch {
    pub fn observe(&mut self, frame: &FrameInput) {
        self.pending.left = frame.left;
        self.pending.right = frame.right;
        self.pending.pause |= frame.pause;
        self.pending.start |= frame.start;
    }

    /// Input for the next simulation step; edges fire once
    pub fn take(&mut self) -> TickInput {
        let input = self.pending.clone();
        self.pending.clear_edges();
        input
    }
}

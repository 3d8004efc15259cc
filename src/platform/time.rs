//! Fixed-step frame pacing
//!
//! The display may refresh at any rate; the simulation always advances in
//! whole 1/60 s steps so every timer stays a frame counter.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest real frame time accepted (seconds)
const MAX_FRAME_TIME: f32 = 0.1;

/// Accumulates real time and hands out simulation steps
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
}

impl FrameClock {
    /// Add a display frame's duration and return how many steps to run
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_TIME);

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        // Drop time we could not catch up on
        if steps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_step_per_sixtieth() {
        let mut clock = FrameClock::default();
        let mut total = 0;
        for _ in 0..600 {
            total += clock.advance(SIM_DT);
        }
        // Float drift may hold back the last step
        assert!((599..=600).contains(&total), "got {}", total);
    }

    #[test]
    fn test_fast_display_skips_steps() {
        let mut clock = FrameClock::default();
        let steps: u32 = (0..240).map(|_| clock.advance(1.0 / 240.0)).sum();
        assert!((59..=60).contains(&steps), "got {}", steps);
    }

    #[test]
    fn test_long_frame_capped() {
        let mut clock = FrameClock::default();
        // Clamped to 0.1s, roughly six steps
        let steps = clock.advance(5.0);
        assert!((5..=6).contains(&steps), "got {}", steps);
        assert!(clock.accumulator < SIM_DT);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.accumulator, 0.0);
    }
}

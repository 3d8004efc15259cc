//! Procedural background
//!
//! Vertical black-to-blue gradient with a seeded starfield. Generated once,
//! drawn every frame.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub const STAR_COUNT: usize = 100;
/// Height of each gradient band in pixels
const BAND_HEIGHT: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// One horizontal strip of the gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub y: f32,
    pub height: f32,
    /// Blue channel 0-255
    pub blue: u8,
}

#[derive(Debug, Clone)]
pub struct Background {
    pub bands: Vec<Band>,
    pub stars: Vec<Star>,
}

impl Background {
    pub fn generate(seed: u64) -> Self {
        let band_count = (SCREEN_HEIGHT / BAND_HEIGHT).ceil() as usize;
        let bands = (0..band_count)
            .map(|i| {
                let y = i as f32 * BAND_HEIGHT;
                Band {
                    y,
                    height: BAND_HEIGHT,
                    blue: ((y / SCREEN_HEIGHT) * 255.0).clamp(0.0, 255.0) as u8,
                }
            })
            .collect();

        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.random_range(0.0..=SCREEN_WIDTH),
                y: rng.random_range(0.0..=SCREEN_HEIGHT),
                radius: rng.random_range(1..=3) as f32,
            })
            .collect();

        Self { bands, stars }
    }
}

//! Collision detection
//!
//! Balls are tested by their bounding square rather than the true circle.
//! Touching edges count as overlap.

use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle};

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Inclusive overlap on both axes
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.bottom >= other.top
            && self.top <= other.bottom
            && self.right >= other.left
            && self.left <= other.right
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Check whether the paddle catches the ball this frame
pub fn ball_paddle_overlap(ball: &Ball, paddle: &Paddle) -> bool {
    ball.bounds().overlaps(&paddle.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::BallColor;
    use glam::Vec2;

    fn ball(x: f32, y: f32, radius: u32) -> Ball {
        Ball::new(1, Vec2::new(x, y), Vec2::ZERO, radius, BallColor::Blue)
    }

    #[test]
    fn test_ball_above_paddle_misses() {
        let paddle = Paddle::default();
        // Paddle top is 563; ball bottom is 552
        assert!(!ball_paddle_overlap(&ball(400.0, 542.0, 10), &paddle));
    }

    #[test]
    fn test_ball_touching_paddle_top_is_caught() {
        let paddle = Paddle::default();
        assert!(ball_paddle_overlap(&ball(400.0, 553.0, 10), &paddle));
    }

    #[test]
    fn test_corner_counts_as_catch() {
        // Bounding square reaches the paddle corner even though the circle would not
        let paddle = Paddle::default();
        assert!(ball_paddle_overlap(&ball(460.0, 553.0, 10), &paddle));
    }

    #[test]
    fn test_ball_beside_paddle_misses() {
        let paddle = Paddle::default();
        assert!(!ball_paddle_overlap(&ball(461.0, 570.0, 10), &paddle));
        assert!(!ball_paddle_overlap(&ball(339.0, 570.0, 10), &paddle));
    }

    #[test]
    fn test_wide_paddle_reaches_further() {
        let mut paddle = Paddle::default();
        let b = ball(505.0, 570.0, 10);
        assert!(!ball_paddle_overlap(&b, &paddle));
        paddle.apply_wide_effect(300);
        assert!(ball_paddle_overlap(&b, &paddle));
    }

    #[test]
    fn test_ball_below_paddle_misses() {
        let paddle = Paddle::default();
        assert!(!ball_paddle_overlap(&ball(400.0, 590.0, 10), &paddle));
    }

    #[test]
    fn test_rect_dimensions() {
        let rect = Paddle::default().bounds();
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 14.0);
    }
}

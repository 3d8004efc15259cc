//! Game state and core simulation types
//!
//! Everything a session owns lives here. Presentation borrows it read-only.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::scoring::Scoreboard;
use crate::audio::SoundEffect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start signal
    Start,
    /// Active gameplay
    Playing,
    /// Simulation frozen until the pause toggle is pressed again
    Paused,
    /// Run ended, waiting for the restart signal
    GameOver,
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// Ball color tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Cyan,
    Orange,
}

impl BallColor {
    /// Spawn palette
    pub const PALETTE: [BallColor; 7] = [
        BallColor::Red,
        BallColor::Green,
        BallColor::Blue,
        BallColor::Yellow,
        BallColor::Purple,
        BallColor::Cyan,
        BallColor::Orange,
    ];

    pub fn rgb(&self) -> Rgb {
        match self {
            BallColor::Red => Rgb(255, 0, 0),
            BallColor::Green => Rgb(0, 255, 0),
            BallColor::Blue => Rgb(0, 0, 255),
            BallColor::Yellow => Rgb(255, 255, 0),
            BallColor::Purple => Rgb(128, 0, 128),
            BallColor::Cyan => Rgb(0, 255, 255),
            BallColor::Orange => Rgb(255, 165, 0),
        }
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Flat score bonus
    Bonus,
    /// Halves ball speed for a while
    Slow,
    /// Doubles paddle width for a while
    Wide,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [PowerUpKind::Bonus, PowerUpKind::Slow, PowerUpKind::Wide];

    /// Glyph drawn on the ball
    pub fn glyph(&self) -> &'static str {
        match self {
            PowerUpKind::Bonus => "+",
            PowerUpKind::Slow => "S",
            PowerUpKind::Wide => "W",
        }
    }
}

/// A falling ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: u32,
    pub color: BallColor,
    /// Carried power-up; `None` for plain balls
    pub powerup: Option<PowerUpKind>,
    /// Cleared once the ball has fallen out of the play area
    pub active: bool,
}

impl Ball {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: u32, color: BallColor) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            color,
            powerup: None,
            active: true,
        }
    }

    pub fn with_powerup(mut self, kind: PowerUpKind) -> Self {
        self.powerup = Some(kind);
        self
    }

    pub fn is_powerup(&self) -> bool {
        self.powerup.is_some()
    }

    #[inline]
    pub fn radius_f(&self) -> f32 {
        self.radius as f32
    }

    /// Integrate one frame, scaled by the current time factor
    pub fn update(&mut self, time_factor: f32) {
        self.pos += self.vel * time_factor;

        let r = self.radius_f();
        if self.pos.x <= r || self.pos.x >= SCREEN_WIDTH - r {
            self.vel.x = -self.vel.x;
            self.pos.x = self.pos.x.clamp(r, SCREEN_WIDTH - r);
        }

        // No floor bounce: leaving the bottom is a miss
        if self.pos.y > SCREEN_HEIGHT + r {
            self.active = false;
        }
    }

    /// Axis-aligned bounding square
    pub fn bounds(&self) -> Rect {
        let r = self.radius_f();
        Rect {
            left: self.pos.x - r,
            top: self.pos.y - r,
            right: self.pos.x + r,
            bottom: self.pos.y + r,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Center x
    pub x: f32,
    /// Center y (fixed)
    pub y: f32,
    pub width: u32,
    pub original_width: u32,
    pub height: u32,
    pub color: Rgb,
    /// Pixels per frame
    pub speed: f32,
    /// Frames left on the wide effect
    pub wide_ticks: u32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: (SCREEN_WIDTH / 2.0).floor(),
            y: SCREEN_HEIGHT - PADDLE_BOTTOM_OFFSET,
            width: PADDLE_WIDTH,
            original_width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            color: Rgb::WHITE,
            speed: PADDLE_SPEED,
            wide_ticks: 0,
        }
    }
}

impl Paddle {
    /// Half extents use integer halving, so a 15px paddle is 7px either side
    #[inline]
    pub fn half_width(&self) -> f32 {
        (self.width / 2) as f32
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        (self.height / 2) as f32
    }

    /// Move from held inputs, then decay the wide effect
    pub fn update(&mut self, left: bool, right: bool) {
        if left {
            self.x -= self.speed;
        }
        if right {
            self.x += self.speed;
        }

        let half = self.half_width();
        self.x = self.x.min(SCREEN_WIDTH - half).max(half);

        if self.wide_ticks > 0 {
            self.wide_ticks -= 1;
            if self.wide_ticks == 0 {
                self.width = self.original_width;
            }
        }
    }

    /// Double the width; a repeat catch restarts the timer without stacking
    pub fn apply_wide_effect(&mut self, duration: u32) {
        self.width = self.original_width * 2;
        self.wide_ticks = duration;
    }

    pub fn is_wide(&self) -> bool {
        self.wide_ticks > 0
    }

    pub fn bounds(&self) -> Rect {
        let hw = self.half_width();
        let hh = self.half_height();
        Rect {
            left: self.x - hw,
            top: self.y - hh,
            right: self.x + hw,
            bottom: self.y + hh,
        }
    }
}

/// Active time-scaling effect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveEffects {
    /// Frames left on the slow effect
    pub slow_ticks: u32,
    /// Multiplier applied to ball motion (1.0 normal, 0.5 slowed)
    pub time_factor: f32,
}

impl Default for ActiveEffects {
    fn default() -> Self {
        Self {
            slow_ticks: 0,
            time_factor: 1.0,
        }
    }
}

impl ActiveEffects {
    pub fn apply_slow(&mut self, duration: u32) {
        self.slow_ticks = duration;
        self.time_factor = SLOW_TIME_FACTOR;
    }

    /// Once-per-frame decay; restores normal speed on the frame the timer hits zero
    pub fn decay(&mut self) {
        if self.slow_ticks > 0 {
            self.slow_ticks -= 1;
            self.time_factor = SLOW_TIME_FACTOR;
            if self.slow_ticks == 0 {
                self.time_factor = 1.0;
            }
        }
    }

    pub fn is_slow(&self) -> bool {
        self.slow_ticks > 0
    }
}

/// Something that happened during a tick, in occurrence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Plain ball caught; points include any streak bonus
    Caught { points: u64 },
    /// Power-up ball caught; points include any streak bonus
    PowerUp { kind: PowerUpKind, points: u64 },
    /// Ball fell out without being caught
    Missed,
    /// Time ran out
    GameOver { score: u64 },
}

impl GameEvent {
    pub fn sound(&self) -> SoundEffect {
        match self {
            GameEvent::Caught { .. } => SoundEffect::Catch,
            GameEvent::PowerUp { .. } => SoundEffect::PowerUp,
            GameEvent::Missed => SoundEffect::Miss,
            GameEvent::GameOver { .. } => SoundEffect::GameOver,
        }
    }
}

/// One game session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the session RNG was created from
    pub seed: u64,
    pub phase: GamePhase,
    pub paddle: Paddle,
    /// Active balls, in spawn order
    pub balls: Vec<Ball>,
    pub scoreboard: Scoreboard,
    pub effects: ActiveEffects,
    /// Frames left before game over
    pub time_remaining: u32,
    pub spawn_timer: u32,
    pub spawn_interval: u32,
    /// Spawner randomness; survives resets so successive runs differ
    pub rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a session on the title screen
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Start,
            paddle: Paddle::default(),
            balls: Vec::new(),
            scoreboard: Scoreboard::default(),
            effects: ActiveEffects::default(),
            time_remaining: GAME_DURATION_TICKS,
            spawn_timer: 0,
            spawn_interval: SPAWN_INTERVAL,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Restore every per-run value; phase and RNG are left alone
    pub fn reset(&mut self) {
        self.paddle = Paddle::default();
        self.balls.clear();
        self.scoreboard = Scoreboard::default();
        self.effects = ActiveEffects::default();
        self.time_remaining = GAME_DURATION_TICKS;
        self.spawn_timer = 0;
        self.spawn_interval = SPAWN_INTERVAL;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn score(&self) -> u64 {
        self.scoreboard.score
    }

    /// Whole seconds left, for display
    pub fn seconds_remaining(&self) -> u32 {
        self.time_remaining / FPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32, radius: u32) -> Ball {
        Ball::new(1, Vec2::new(x, y), Vec2::new(vx, vy), radius, BallColor::Red)
    }

    #[test]
    fn test_ball_moves_by_scaled_velocity() {
        let mut ball = ball_at(400.0, 100.0, 2.0, 4.0, 10);
        ball.update(0.5);
        assert_eq!(ball.pos, Vec2::new(401.0, 102.0));
        assert!(ball.active);
    }

    #[test]
    fn test_ball_bounces_off_left_wall() {
        let mut ball = ball_at(12.0, 100.0, -3.0, 2.0, 10);
        ball.update(1.0);
        assert_eq!(ball.pos.x, 10.0);
        assert_eq!(ball.vel.x, 3.0);
    }

    #[test]
    fn test_ball_bounces_off_right_wall() {
        let mut ball = ball_at(788.0, 100.0, 3.0, 2.0, 15);
        ball.update(1.0);
        assert_eq!(ball.pos.x, SCREEN_WIDTH - 15.0);
        assert_eq!(ball.vel.x, -3.0);
    }

    #[test]
    fn test_ball_inactive_below_floor() {
        let mut ball = ball_at(400.0, 608.0, 0.0, 3.0, 10);
        ball.update(1.0);
        assert!(!ball.active);

        // Exactly at the threshold is still in play
        let mut ball = ball_at(400.0, 607.0, 0.0, 3.0, 10);
        ball.update(1.0);
        assert!(ball.active);
    }

    #[test]
    fn test_plain_ball_has_no_powerup() {
        let ball = ball_at(400.0, 0.0, 0.0, 1.0, 10);
        assert!(!ball.is_powerup());
        assert!(ball.with_powerup(PowerUpKind::Slow).is_powerup());
    }

    #[test]
    fn test_paddle_clamped_to_screen() {
        let mut paddle = Paddle::default();
        for _ in 0..100 {
            paddle.update(true, false);
        }
        assert_eq!(paddle.x, 50.0);
        for _ in 0..100 {
            paddle.update(false, true);
        }
        assert_eq!(paddle.x, 750.0);
    }

    #[test]
    fn test_paddle_both_keys_cancel() {
        let mut paddle = Paddle::default();
        paddle.update(true, true);
        assert_eq!(paddle.x, 400.0);
    }

    #[test]
    fn test_wide_effect_expires() {
        let mut paddle = Paddle::default();
        paddle.apply_wide_effect(3);
        assert_eq!(paddle.width, 200);
        paddle.update(false, false);
        paddle.update(false, false);
        assert_eq!(paddle.width, 200);
        paddle.update(false, false);
        assert_eq!(paddle.width, 100);
        assert_eq!(paddle.wide_ticks, 0);
    }

    #[test]
    fn test_wide_effect_does_not_stack() {
        let mut paddle = Paddle::default();
        paddle.apply_wide_effect(300);
        paddle.update(false, false);
        paddle.apply_wide_effect(300);
        assert_eq!(paddle.width, 200);
        assert_eq!(paddle.wide_ticks, 300);
    }

    #[test]
    fn test_paddle_bounds_use_integer_halves() {
        let paddle = Paddle::default();
        let rect = paddle.bounds();
        assert_eq!(rect.left, 350.0);
        assert_eq!(rect.right, 450.0);
        assert_eq!(rect.top, 563.0);
        assert_eq!(rect.bottom, 577.0);
    }

    #[test]
    fn test_slow_decay_restores_on_zero() {
        let mut effects = ActiveEffects::default();
        effects.apply_slow(2);
        effects.decay();
        assert_eq!(effects.time_factor, 0.5);
        effects.decay();
        assert_eq!(effects.time_factor, 1.0);
        assert!(!effects.is_slow());
    }

    #[test]
    fn test_reset_keeps_phase() {
        let mut state = GameState::new(7);
        state.phase = GamePhase::GameOver;
        state.time_remaining = 0;
        state.scoreboard.score = 99;
        state.reset();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.time_remaining, GAME_DURATION_TICKS);
        assert_eq!(state.score(), 0);
    }
}

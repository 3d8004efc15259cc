//! Ball Catch - a falling-ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, scoring, phases)
//! - `game`: Session context wiring the simulation to its collaborators
//! - `renderer`: macroquad drawing of the current state
//! - `platform`: Keyboard input and fixed-step frame pacing
//! - `persistence`: High score storage with recoverable errors
//! - `audio`: Procedurally generated sound effects

pub mod audio;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::HighScore;
pub use settings::Settings;

/// Game configuration constants
///
/// Every duration is a count of simulation frames, not wall-clock time.
pub mod consts {
    /// Play area dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Simulation frames per second
    pub const FPS: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / FPS as f32;
    /// Maximum substeps per display frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Paddle defaults
    pub const PADDLE_WIDTH: u32 = 100;
    pub const PADDLE_HEIGHT: u32 = 15;
    pub const PADDLE_SPEED: f32 = 10.0;
    /// Distance from the bottom edge to the paddle center
    pub const PADDLE_BOTTOM_OFFSET: f32 = 30.0;

    /// Ball generation ranges
    pub const BALL_MIN_RADIUS: u32 = 10;
    pub const BALL_MAX_RADIUS: u32 = 20;
    pub const BALL_MAX_SPEED_X: f32 = 3.0;
    pub const BALL_MIN_SPEED_Y: f32 = 2.0;
    pub const BALL_MAX_SPEED_Y: f32 = 5.0;

    /// Spawn cadence (1 second)
    pub const SPAWN_INTERVAL: u32 = 60;
    /// Probability that a spawned ball carries a power-up
    pub const POWERUP_CHANCE: f64 = 0.2;

    /// Session length (60 seconds)
    pub const GAME_DURATION_TICKS: u32 = 60 * FPS;
    /// Slow and wide effect length (5 seconds)
    pub const EFFECT_DURATION_TICKS: u32 = 5 * FPS;
    /// Ball speed multiplier while slow is active
    pub const SLOW_TIME_FACTOR: f32 = 0.5;

    /// Scoring
    pub const CATCH_POINTS: u64 = 10;
    pub const BONUS_POINTS: u64 = 50;
    pub const STREAK_THRESHOLD: u32 = 3;
    /// Bonus per streak level above 2
    pub const STREAK_BONUS_STEP: u64 = 5;
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-counted timers only
//! - Seeded RNG only
//! - Stable iteration order (spawn order, removal by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod scoring;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, ball_paddle_overlap};
pub use scoring::{Scoreboard, streak_bonus};
pub use spawn::{spawn_ball, tick_spawner};
pub use state::{
    ActiveEffects, Ball, BallColor, GameEvent, GamePhase, GameState, Paddle, PowerUpKind, Rgb,
};
pub use tick::{TickInput, tick};

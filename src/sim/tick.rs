//! Per-frame simulation tick
//!
//! Handles phase signals and, while playing, advances the session by one frame.

use super::collision::ball_paddle_overlap;
use super::scoring::Scoreboard;
use super::spawn::tick_spawner;
use super::state::{ActiveEffects, GameEvent, GamePhase, GameState, Paddle, PowerUpKind};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left (held)
    pub left: bool,
    /// Move right (held)
    pub right: bool,
    /// Pause toggle (edge)
    pub pause: bool,
    /// Start / restart (edge)
    pub start: bool,
}

impl TickInput {
    /// Drop edge-triggered signals once a tick has consumed them
    pub fn clear_edges(&mut self) {
        self.pause = false;
        self.start = false;
    }
}

/// Advance the game state by one frame, returning what happened in order
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.start && matches!(state.phase, GamePhase::Start | GamePhase::GameOver) {
        state.reset();
        state.phase = GamePhase::Playing;
        log::info!("Session started (seed {})", state.seed);
    }

    if input.pause {
        match state.phase {
            GamePhase::Playing => state.phase = GamePhase::Paused,
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::Start | GamePhase::GameOver => {}
        }
    }

    // Nothing moves outside of play
    if state.phase != GamePhase::Playing {
        return events;
    }

    state.time_remaining = state.time_remaining.saturating_sub(1);
    if state.time_remaining == 0 {
        state.phase = GamePhase::GameOver;
        let score = state.score();
        log::info!(
            "Game over: score {} (best streak {})",
            score,
            state.scoreboard.max_streak
        );
        events.push(GameEvent::GameOver { score });
        return events;
    }

    state.effects.decay();
    state.paddle.update(input.left, input.right);

    // Removals are applied after the pass so ids stay stable while iterating
    let mut removed: Vec<u32> = Vec::new();
    for ball in state.balls.iter_mut() {
        // A slow catch earlier in the pass applies to the balls after it
        ball.update(state.effects.time_factor);

        // Catch wins over a miss on the same frame
        if ball_paddle_overlap(ball, &state.paddle) {
            removed.push(ball.id);
            let event = match ball.powerup {
                Some(kind) => apply_powerup(
                    kind,
                    &mut state.scoreboard,
                    &mut state.effects,
                    &mut state.paddle,
                ),
                None => GameEvent::Caught {
                    points: state.scoreboard.register_catch(CATCH_POINTS),
                },
            };
            events.push(event);
        } else if !ball.active {
            removed.push(ball.id);
            state.scoreboard.register_miss();
            events.push(GameEvent::Missed);
        }
    }
    if !removed.is_empty() {
        state.balls.retain(|b| !removed.contains(&b.id));
    }

    tick_spawner(state);

    events
}

/// Apply a caught power-up and count the catch
fn apply_powerup(
    kind: PowerUpKind,
    scoreboard: &mut Scoreboard,
    effects: &mut ActiveEffects,
    paddle: &mut Paddle,
) -> GameEvent {
    let base = match kind {
        PowerUpKind::Bonus => BONUS_POINTS,
        PowerUpKind::Slow => {
            effects.apply_slow(EFFECT_DURATION_TICKS);
            0
        }
        PowerUpKind::Wide => {
            paddle.apply_wide_effect(EFFECT_DURATION_TICKS);
            0
        }
    };
    log::debug!("Power-up {:?} collected", kind);
    GameEvent::PowerUp {
        kind,
        points: scoreboard.register_catch(base),
    }
}

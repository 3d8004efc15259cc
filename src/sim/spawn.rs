//! Ball spawning
//!
//! One ball per interval, no backlog. All randomness comes from the
//! session RNG so a seed reproduces the whole spawn sequence.

use glam::Vec2;
use rand::Rng;

use super::state::{Ball, BallColor, GameState, PowerUpKind};
use crate::consts::*;

/// Build a randomized ball just above the top edge
pub fn spawn_ball<R: Rng + ?Sized>(rng: &mut R, id: u32, is_powerup: bool) -> Ball {
    let radius = rng.random_range(BALL_MIN_RADIUS..=BALL_MAX_RADIUS);
    let x = rng.random_range(radius..=SCREEN_WIDTH as u32 - radius);
    let pos = Vec2::new(x as f32, -(radius as f32));

    let color = BallColor::PALETTE[rng.random_range(0..BallColor::PALETTE.len())];

    let vel = Vec2::new(
        rng.random_range(-BALL_MAX_SPEED_X..=BALL_MAX_SPEED_X),
        rng.random_range(BALL_MIN_SPEED_Y..=BALL_MAX_SPEED_Y),
    );

    let ball = Ball::new(id, pos, vel, radius, color);
    if is_powerup {
        let kind = PowerUpKind::ALL[rng.random_range(0..PowerUpKind::ALL.len())];
        ball.with_powerup(kind)
    } else {
        ball
    }
}

/// Advance the spawn cadence by one frame; returns the new ball's ID if one spawned
pub fn tick_spawner(state: &mut GameState) -> Option<u32> {
    state.spawn_timer += 1;
    if state.spawn_timer < state.spawn_interval {
        return None;
    }
    state.spawn_timer = 0;

    let is_powerup = state.rng.random_bool(POWERUP_CHANCE);
    let id = state.next_entity_id();
    let ball = spawn_ball(&mut state.rng, id, is_powerup);
    log::debug!(
        "Spawned ball {} at x={} (powerup: {:?})",
        id,
        ball.pos.x,
        ball.powerup
    );
    state.balls.push(ball);
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawned_ball_within_ranges() {
        let mut rng = Pcg32::seed_from_u64(42);
        for id in 0..500 {
            let ball = spawn_ball(&mut rng, id, id % 2 == 0);
            let r = ball.radius_f();
            assert!((BALL_MIN_RADIUS..=BALL_MAX_RADIUS).contains(&ball.radius));
            assert!(ball.pos.x >= r && ball.pos.x <= SCREEN_WIDTH - r);
            assert_eq!(ball.pos.y, -r);
            assert!(ball.vel.x.abs() <= BALL_MAX_SPEED_X);
            assert!(ball.vel.y >= BALL_MIN_SPEED_Y && ball.vel.y <= BALL_MAX_SPEED_Y);
            assert!(ball.active);
            assert_eq!(ball.is_powerup(), id % 2 == 0);
        }
    }

    #[test]
    fn test_powerup_kinds_all_appear() {
        let mut rng = Pcg32::seed_from_u64(3);
        let kinds: Vec<_> = (0..200)
            .filter_map(|id| spawn_ball(&mut rng, id, true).powerup)
            .collect();
        for kind in PowerUpKind::ALL {
            assert!(kinds.contains(&kind), "{:?} never spawned", kind);
        }
    }

    #[test]
    fn test_spawner_cadence() {
        let mut state = GameState::new(1);
        for _ in 0..59 {
            assert_eq!(tick_spawner(&mut state), None);
        }
        assert!(tick_spawner(&mut state).is_some());
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.spawn_timer, 0);

        for _ in 0..600 {
            tick_spawner(&mut state);
        }
        assert_eq!(state.balls.len(), 11);
    }

    #[test]
    fn test_spawner_powerup_ratio() {
        let mut state = GameState::new(2024);
        state.spawn_interval = 1;
        for _ in 0..5000 {
            tick_spawner(&mut state);
        }
        let powerups = state.balls.iter().filter(|b| b.is_powerup()).count();
        // 20% of 5000, with generous slack
        assert!((800..1200).contains(&powerups), "got {}", powerups);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GameState::new(99);
        let mut b = GameState::new(99);
        for _ in 0..300 {
            tick_spawner(&mut a);
            tick_spawner(&mut b);
        }
        assert_eq!(a.balls.len(), b.balls.len());
        for (x, y) in a.balls.iter().zip(&b.balls) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.vel, y.vel);
            assert_eq!(x.color, y.color);
            assert_eq!(x.powerup, y.powerup);
        }
    }
}

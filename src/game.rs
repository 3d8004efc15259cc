//! Session context
//!
//! Owns the simulation state together with its collaborators (high score
//! storage and audio) so nothing is shared through globals.

use crate::audio::AudioSink;
use crate::highscores::HighScore;
use crate::persistence::HighScoreStore;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// A running game
pub struct Game<S: HighScoreStore, A: AudioSink> {
    state: GameState,
    high_score: HighScore,
    store: S,
    audio: A,
}

impl<S: HighScoreStore, A: AudioSink> Game<S, A> {
    /// Start on the title screen with the stored high score loaded
    pub fn new(seed: u64, store: S, audio: A) -> Self {
        let high_score = HighScore::load(&store);
        Self {
            state: GameState::new(seed),
            high_score,
            store,
            audio,
        }
    }

    /// Run one simulation frame and dispatch its side effects
    pub fn step(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let events = tick(&mut self.state, input);
        for event in &events {
            self.audio.play(event.sound());
            if let GameEvent::GameOver { score } = *event {
                self.high_score.record(score, &mut self.store);
            }
        }
        events
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundEffect;
    use crate::persistence::MemoryStore;
    use crate::sim::GamePhase;

    #[test]
    fn test_loads_high_score_on_creation() {
        let game = Game::new(1, MemoryStore::with_value(250), Vec::<SoundEffect>::new());
        assert_eq!(game.high_score(), 250);
        assert_eq!(game.state().phase, GamePhase::Start);
    }

    #[test]
    fn test_game_over_plays_sound_and_saves() {
        let mut game = Game::new(1, MemoryStore::with_value(5), Vec::<SoundEffect>::new());
        game.state.phase = GamePhase::Playing;
        game.state.time_remaining = 1;
        game.state.scoreboard.score = 30;

        let events = game.step(&TickInput::default());
        assert_eq!(events, vec![GameEvent::GameOver { score: 30 }]);
        assert_eq!(game.audio(), &vec![SoundEffect::GameOver]);
        assert_eq!(game.high_score(), 30);
        assert_eq!(game.store().value, Some(30));
    }

    #[test]
    fn test_unreadable_store_starts_at_zero() {
        let store = MemoryStore {
            fail_reads: true,
            ..Default::default()
        };
        let game = Game::new(1, store, Vec::<SoundEffect>::new());
        assert_eq!(game.high_score(), 0);
    }
}

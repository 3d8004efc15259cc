//! High score tracking
//!
//! Read once at startup, written at game over when beaten. Storage failures
//! are logged and never reach the player.

use crate::persistence::HighScoreStore;

/// Best score seen across sessions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScore {
    best: u64,
    /// A beaten score that has not reached the store yet
    pending_write: bool,
}

impl HighScore {
    /// Load from the store, treating any failure as "no score yet"
    pub fn load(store: &impl HighScoreStore) -> Self {
        let best = match store.load() {
            Ok(best) => {
                log::info!("Loaded high score {}", best);
                best
            }
            Err(e) => {
                log::warn!("Could not read high score, starting from 0: {}", e);
                0
            }
        };
        Self {
            best,
            pending_write: false,
        }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Whether a previous write failed and will be retried
    #[cfg(test)]
    fn has_pending_write(&self) -> bool {
        self.pending_write
    }

    /// Submit a finished session's score; returns true for a new best
    pub fn record(&mut self, score: u64, store: &mut impl HighScoreStore) -> bool {
        let beaten = score > self.best;
        if beaten {
            log::info!("New high score {} (was {})", score, self.best);
            self.best = score;
            self.pending_write = true;
        }

        if self.pending_write {
            match store.save(self.best) {
                Ok(()) => self.pending_write = false,
                Err(e) => log::warn!("Could not save high score, will retry: {}", e),
            }
        }

        beaten
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_load_defaults_to_zero_on_error() {
        let store = MemoryStore {
            value: Some(500),
            fail_reads: true,
            ..Default::default()
        };
        assert_eq!(HighScore::load(&store).best(), 0);
    }

    #[test]
    fn test_lower_score_keeps_record() {
        let mut store = MemoryStore::with_value(100);
        let mut high = HighScore::load(&store);
        assert!(!high.record(80, &mut store));
        assert_eq!(high.best(), 100);
        assert_eq!(store.value, Some(100));
        assert_eq!(store.writes, 0);
    }

    #[test]
    fn test_equal_score_is_not_a_record() {
        let mut store = MemoryStore::with_value(100);
        let mut high = HighScore::load(&store);
        assert!(!high.record(100, &mut store));
        assert_eq!(store.writes, 0);
    }

    #[test]
    fn test_higher_score_is_saved() {
        let mut store = MemoryStore::with_value(100);
        let mut high = HighScore::load(&store);
        assert!(high.record(150, &mut store));
        assert_eq!(high.best(), 150);
        assert_eq!(store.value, Some(150));
    }

    #[test]
    fn test_failed_write_retried_next_time() {
        let mut store = MemoryStore {
            value: Some(100),
            fail_writes: true,
            ..Default::default()
        };
        let mut high = HighScore::load(&store);
        assert!(high.record(150, &mut store));
        assert_eq!(high.best(), 150);
        assert!(high.has_pending_write());
        assert_eq!(store.value, Some(100));

        store.fail_writes = false;
        assert!(!high.record(20, &mut store));
        assert!(!high.has_pending_write());
        assert_eq!(store.value, Some(150));
    }
}

//! Score and streak bookkeeping

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Per-session score counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u64,
    /// Consecutive catches since the last miss
    pub streak: u32,
    /// Best streak this session
    pub max_streak: u32,
}

/// Bonus earned by the catch that brings the streak to `streak`
pub fn streak_bonus(streak: u32) -> u64 {
    if streak >= STREAK_THRESHOLD {
        u64::from(streak - 2) * STREAK_BONUS_STEP
    } else {
        0
    }
}

impl Scoreboard {
    /// Count a catch worth `base` points; returns everything awarded
    pub fn register_catch(&mut self, base: u64) -> u64 {
        self.streak += 1;
        self.max_streak = self.max_streak.max(self.streak);

        let awarded = base + streak_bonus(self.streak);
        self.score += awarded;
        awarded
    }

    /// A miss always breaks the streak
    pub fn register_miss(&mut self) {
        self.streak = 0;
    }

    /// Streak worth showing on the HUD
    pub fn visible_streak(&self) -> Option<u32> {
        (self.streak >= STREAK_THRESHOLD).then_some(self.streak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_bonus_table() {
        assert_eq!(streak_bonus(0), 0);
        assert_eq!(streak_bonus(2), 0);
        assert_eq!(streak_bonus(3), 5);
        assert_eq!(streak_bonus(4), 10);
        assert_eq!(streak_bonus(5), 15);
    }

    #[test]
    fn test_three_plain_catches() {
        let mut board = Scoreboard::default();
        assert_eq!(board.register_catch(CATCH_POINTS), 10);
        assert_eq!(board.register_catch(CATCH_POINTS), 10);
        assert_eq!(board.register_catch(CATCH_POINTS), 15);
        assert_eq!(board.score, 35);
        assert_eq!(board.streak, 3);
        assert_eq!(board.max_streak, 3);
    }

    #[test]
    fn test_miss_resets_streak_but_not_max() {
        let mut board = Scoreboard::default();
        board.register_catch(CATCH_POINTS);
        board.register_catch(CATCH_POINTS);
        board.register_miss();
        assert_eq!(board.streak, 0);
        assert_eq!(board.max_streak, 2);

        board.register_miss();
        assert_eq!(board.streak, 0);
    }

    #[test]
    fn test_zero_point_catch_still_counts() {
        // Slow and wide catches award no base points but extend the streak
        let mut board = Scoreboard::default();
        board.register_catch(0);
        board.register_catch(0);
        assert_eq!(board.register_catch(0), 5);
        assert_eq!(board.score, 5);
    }

    #[test]
    fn test_visible_streak() {
        let mut board = Scoreboard::default();
        board.register_catch(CATCH_POINTS);
        board.register_catch(CATCH_POINTS);
        assert_eq!(board.visible_streak(), None);
        board.register_catch(CATCH_POINTS);
        assert_eq!(board.visible_streak(), Some(3));
    }
}

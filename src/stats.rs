/// Score, level and lives tracking across a session.

use crate::config::Settings;

#[derive(Clone, Debug)]
pub struct GameStats {
    pub score: u32,
    /// Starts at 1, increments each time a fleet is cleared.
    pub level: u32,
    pub ships_left: u32,
    /// Highest score seen so far, including previous sessions.  Updated
    /// in memory the moment the score exceeds it; the presentation layer
    /// persists it to disk.
    pub high_score: u32,
}

impl GameStats {
    pub fn new(settings: &Settings, high_score: u32) -> Self {
        GameStats {
            score: 0,
            level: 1,
            ships_left: settings.ship_limit,
            high_score,
        }
    }

    /// Reset everything that changes during a game.  The high score
    /// survives across games.
    pub fn reset(&mut self, settings: &Settings) {
        self.score = 0;
        self.level = 1;
        self.ships_left = settings.ship_limit;
    }

    /// Raise the in-memory high score if the current score beats it.
    /// Returns true when it did — the caller's cue to persist.
    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}

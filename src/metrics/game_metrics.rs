use std::time::{Duration, Instant};

use crate::game::{GameState, TickOutcome};

/// Session statistics shown in the header. Kept in memory only.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub length: usize,
    pub longest_length: usize,
    pub food_eaten: u32,
    pub resets: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            length: 1,
            longest_length: 1,
            food_eaten: 0,
            resets: 0,
        }
    }

    /// Fold one tick into the running totals
    pub fn record_tick(&mut self, outcome: &TickOutcome, state: &GameState) {
        self.elapsed_time = self.start_time.elapsed();
        if outcome.ate_food {
            self.food_eaten += 1;
        }
        if outcome.collided {
            self.resets += 1;
        }
        self.length = state.snake.len();
        self.longest_length = self.longest_length.max(self.length);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

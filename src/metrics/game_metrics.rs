use std::time::{Duration, Instant};

use crate::game::StepResult;

pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub apples_eaten: u32,
    pub best_length: usize,
    pub rounds_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            apples_eaten: 0,
            best_length: 1,
            rounds_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Fold in the outcome of one tick
    pub fn record(&mut self, result: &StepResult) {
        if result.ate_apple {
            self.on_apple();
        }
        self.best_length = self.best_length.max(result.length);
        if result.reset.is_some() {
            self.on_reset();
        }
    }

    pub fn on_apple(&mut self) {
        self.apples_eaten += 1;
    }

    pub fn on_reset(&mut self) {
        self.rounds_played += 1;
        self.apples_eaten = 0;
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
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

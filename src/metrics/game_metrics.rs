use std::time::{Duration, Instant};

/// Per-session play statistics shown in the header
pub struct GameMetrics {
    /// Time spent actually playing the current game (pauses excluded)
    pub play_time: Duration,
    pub games_started: u32,
    pub games_finished: u32,
    last_update: Instant,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            play_time: Duration::ZERO,
            games_started: 0,
            games_finished: 0,
            last_update: Instant::now(),
        }
    }

    pub fn update(&mut self, active: bool) {
        self.update_at(Instant::now(), active);
    }

    /// Accumulate the time since the previous update if the game was running
    pub fn update_at(&mut self, now: Instant, active: bool) {
        if active {
            self.play_time += now.saturating_duration_since(self.last_update);
        }
        self.last_update = now;
    }

    pub fn on_game_start(&mut self) {
        self.games_started += 1;
        self.play_time = Duration::ZERO;
        self.last_update = Instant::now();
    }

    pub fn on_game_over(&mut self) {
        self.games_finished += 1;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.play_time.as_secs();
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.play_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.play_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.play_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_paused_time_not_counted() {
        let mut metrics = GameMetrics::new();
        let start = metrics.last_update;

        metrics.update_at(start + Duration::from_secs(10), true);
        metrics.update_at(start + Duration::from_secs(25), false);
        metrics.update_at(start + Duration::from_secs(30), true);

        assert_eq!(metrics.play_time, Duration::from_secs(15));
    }

    #[test]
    fn test_game_counters() {
        let mut metrics = GameMetrics::new();
        metrics.play_time = Duration::from_secs(42);

        metrics.on_game_start();
        assert_eq!(metrics.games_started, 1);
        assert_eq!(metrics.play_time, Duration::ZERO);

        metrics.on_game_over();
        metrics.on_game_start();
        assert_eq!(metrics.games_started, 2);
        assert_eq!(metrics.games_finished, 1);
    }
}

use std::time::Duration;

/// A player's countdown clock.
///
/// The clock only runs down while started, and only when the game loop
/// ticks it, so it advances in whole ticks rather than in wall time.
#[derive(Debug, Clone)]
pub struct Timer {
    remaining: Duration,
    running: bool,
}

impl Timer {
    pub fn new(start: Duration) -> Self {
        Self {
            remaining: start,
            running: false,
        }
    }

    pub fn start_timer(&mut self) {
        self.running = true;
    }

    pub fn stop_timer(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Runs the clock down by `elapsed` if it is started.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.running {
            self.remaining = self.remaining.saturating_sub(elapsed);
        }
    }

    pub fn time(&self) -> Duration {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }
}

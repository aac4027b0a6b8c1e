use std::time::{Duration, Instant};

/// Wall-clock span from the first reveal to the end of the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    start: Option<Instant>,
    end: Option<Instant>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the timer. Later calls keep the original start.
    pub fn start(&mut self) {
        if self.start.is_none() {
            self.start = Some(Instant::now());
        }
    }

    /// Freezes the elapsed time. Has no effect before `start` or after a previous stop.
    pub fn stop(&mut self) {
        if self.start.is_some() && self.end.is_none() {
            self.end = Some(Instant::now());
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_running(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    pub fn elapsed(&self) -> Duration {
        match self.start {
            Some(start) => self.end.unwrap_or_else(Instant::now).duration_since(start),
            None => Duration::ZERO,
        }
    }

    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed().as_millis()
    }
}

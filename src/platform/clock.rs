//! Fixed-rate tick source
//!
//! Turns variable frame times into a whole number of simulation ticks.

use crate::consts::MAX_SUBSTEPS;

/// Longest frame we try to catch up on (seconds)
const MAX_FRAME_TIME: f32 = 0.1;

/// Accumulates wall time and hands out fixed ticks
#[derive(Debug, Clone)]
pub struct Clock {
    tick_dt: f32,
    accumulator: f32,
    ticks: u64,
}

impl Clock {
    pub fn new(tick_rate_hz: u32) -> Self {
        Self {
            tick_dt: 1.0 / tick_rate_hz.max(1) as f32,
            accumulator: 0.0,
            ticks: 0,
        }
    }

    /// Seconds per tick
    pub fn tick_dt(&self) -> f32 {
        self.tick_dt
    }

    /// Total ticks handed out
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Add elapsed wall time and return how many ticks to run now
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.accumulator >= self.tick_dt && substeps < MAX_SUBSTEPS {
            self.accumulator -= self.tick_dt;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS && self.accumulator >= self.tick_dt {
            log::debug!("dropping {:.3}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        self.ticks += substeps as u64;
        substeps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = Clock::new(60);
        assert_eq!(clock.advance(0.01), 0);
        assert_eq!(clock.advance(0.01), 1);
        assert_eq!(clock.ticks(), 1);
    }

    #[test]
    fn test_substeps_capped() {
        let mut clock = Clock::new(120);
        // 0.1s at 120 Hz would be 12 ticks; capped
        assert_eq!(clock.advance(1.0), MAX_SUBSTEPS);
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_negative_elapsed_ignored() {
        let mut clock = Clock::new(60);
        assert_eq!(clock.advance(-5.0), 0);
        assert_eq!(clock.ticks(), 0);
    }
}

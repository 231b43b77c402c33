use crate::engine::config::RunConfig;

/// Linear speed schedule from the start rate to the target rate.
///
/// Elapsed time is always measured from the start of the run, so the curve
/// does not drift with per-word scheduling jitter. Once the target is
/// reached the speed stays pinned there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedRamp {
    start_wpm: f64,
    target_wpm: f64,
    acceleration_ms: u64,
}

impl SpeedRamp {
    pub fn new(start_wpm: u32, target_wpm: u32, acceleration_ms: u64) -> Self {
        Self {
            start_wpm: start_wpm as f64,
            target_wpm: target_wpm as f64,
            acceleration_ms,
        }
    }

    pub fn wpm_at(&self, elapsed_ms: u64) -> f64 {
        if self.acceleration_ms == 0 {
            return self.target_wpm;
        }
        let progress = (elapsed_ms as f64 / self.acceleration_ms as f64).min(1.0);
        self.start_wpm + (self.target_wpm - self.start_wpm) * progress
    }
}

impl From<&RunConfig> for SpeedRamp {
    fn from(config: &RunConfig) -> Self {
        Self::new(config.start_wpm, config.target_wpm, config.acceleration_ms)
    }
}

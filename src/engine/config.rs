// Configuration for the pacing engine.
// Multiplier defaults follow the punctuation pause table.

use crate::engine::error::EngineError;

/// Speed schedule for one reading run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Words per minute at the start of the run
    pub start_wpm: u32,

    /// Words per minute once acceleration has finished; must exceed `start_wpm`
    pub target_wpm: u32,

    /// Time to ramp from start to target; 0 disables the ramp
    pub acceleration_ms: u64,
}

impl RunConfig {
    pub fn new(start_wpm: u32, target_wpm: u32, acceleration_ms: u64) -> Self {
        Self {
            start_wpm,
            target_wpm,
            acceleration_ms,
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.start_wpm == 0 || self.target_wpm == 0 || self.start_wpm >= self.target_wpm {
            return Err(EngineError::InvalidConfig {
                start_wpm: self.start_wpm,
                target_wpm: self.target_wpm,
            });
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start_wpm: 250,
            target_wpm: 400,
            acceleration_ms: 10_000,
        }
    }
}

/// Pause multipliers keyed by a word's trailing character
#[derive(Debug, Clone, PartialEq)]
pub struct TimingConfig {
    pub period_multiplier: f64,      // default 2.5x
    pub exclamation_multiplier: f64, // default 2.2x, also used for '?'
    pub semicolon_multiplier: f64,   // default 2.0x, also used for ':'
    pub comma_multiplier: f64,       // default 1.8x
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            period_multiplier: 2.5,
            exclamation_multiplier: 2.2,
            semicolon_multiplier: 2.0,
            comma_multiplier: 1.8,
        }
    }
}

pub mod config;
pub mod controller;
pub mod error;
pub mod observer;
pub mod scheduler;

pub use config::{RunConfig, TimingConfig};
pub use controller::{PlaybackController, PlaybackStatus};
pub use error::EngineError;
pub use observer::PlaybackObserver;
pub use scheduler::{Clock, ManualClock, Scheduler, SystemClock, TimerId, TimerQueue};

// Re-export reading module items so callers can drive the engine from one path
pub use crate::reading::{
    calculate_anchor_position, calculate_word_delay, tokenize_text, wpm_to_milliseconds, Session,
    SpeedRamp, Token,
};

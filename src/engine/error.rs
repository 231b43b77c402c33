use thiserror::Error;

/// Reasons `start` refuses to begin a run. Both leave the controller
/// untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("no valid words found")]
    EmptyInput,

    #[error("start speed must be lower than target speed (start {start_wpm} wpm, target {target_wpm} wpm)")]
    InvalidConfig { start_wpm: u32, target_wpm: u32 },
}

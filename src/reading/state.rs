use crate::engine::scheduler::TimerId;
use crate::reading::{SpeedRamp, Token};

/// Identifies one run of a playback controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Session(pub(crate) u64);

/// Everything a single run owns. Dropped as a whole on stop, completion or
/// restart, so no position survives a run.
pub struct PlaybackState {
    pub tokens: Vec<Token>,
    pub current_index: usize,
    pub wpm: f64,
    pub started_at_ms: u64,
    pub pending_timer: Option<TimerId>,
    pub session: Session,
    ramp: SpeedRamp,
}

impl PlaybackState {
    pub fn new(tokens: Vec<Token>, ramp: SpeedRamp, started_at_ms: u64, session: Session) -> Self {
        Self {
            tokens,
            current_index: 0,
            wpm: ramp.wpm_at(0),
            started_at_ms,
            pending_timer: None,
            session,
            ramp,
        }
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.current_index)
    }

    /// 1-based position of the current token and the sequence length.
    pub fn progress(&self) -> (usize, usize) {
        (self.current_index + 1, self.tokens.len())
    }

    /// Moves past the current token and re-reads the speed from the ramp.
    pub fn advance(&mut self, now_ms: u64) {
        if self.current_index < self.tokens.len() {
            self.current_index += 1;
        }
        self.wpm = self.ramp.wpm_at(self.elapsed_ms(now_ms));
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_at_ms)
    }
}

//! Playback state machine.
//!
//! `Idle` → `Running` on a successful `start`; back to `Idle` on completion,
//! `stop`, or a restart. While running exactly one timer is pending, and a
//! timer that does not match it is ignored, so nothing can mutate a run after
//! it has been stopped.

use tracing::{debug, trace};

use crate::engine::config::{RunConfig, TimingConfig};
use crate::engine::error::EngineError;
use crate::engine::observer::PlaybackObserver;
use crate::engine::scheduler::{Scheduler, TimerId};
use crate::reading::{
    calculate_anchor_position, calculate_word_delay, tokenize_text, wpm_to_milliseconds,
    PlaybackState, Session, SpeedRamp,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Idle,
    Running,
}

pub struct PlaybackController<S: Scheduler, O: PlaybackObserver> {
    scheduler: S,
    observer: O,
    timing: TimingConfig,
    state: Option<PlaybackState>,
    sessions_started: u64,
}

impl<S: Scheduler, O: PlaybackObserver> PlaybackController<S, O> {
    pub fn new(scheduler: S, observer: O) -> Self {
        Self {
            scheduler,
            observer,
            timing: TimingConfig::default(),
            state: None,
            sessions_started: 0,
        }
    }

    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    pub fn status(&self) -> PlaybackStatus {
        match self.state {
            Some(_) => PlaybackStatus::Running,
            None => PlaybackStatus::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.is_some()
    }

    pub fn session(&self) -> Option<Session> {
        self.state.as_ref().map(|state| state.session)
    }

    pub fn current_wpm(&self) -> Option<f64> {
        self.state.as_ref().map(|state| state.wpm)
    }

    /// 1-based position of the token on screen and the total token count.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.state.as_ref().map(PlaybackState::progress)
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Begins a new run and shows its first token immediately.
    ///
    /// Input is validated before anything is touched: on error a run that is
    /// already in progress keeps going. On success any previous run is
    /// stopped first.
    pub fn start(&mut self, text: &str, config: RunConfig) -> Result<Session, EngineError> {
        config.validate()?;
        let tokens = tokenize_text(text);
        if tokens.is_empty() {
            return Err(EngineError::EmptyInput);
        }

        self.stop();

        self.sessions_started += 1;
        let session = Session(self.sessions_started);
        debug!(
            session = session.0,
            tokens = tokens.len(),
            start_wpm = config.start_wpm,
            target_wpm = config.target_wpm,
            acceleration_ms = config.acceleration_ms,
            "playback started"
        );

        let started_at = self.scheduler.now_ms();
        self.state = Some(PlaybackState::new(
            tokens,
            SpeedRamp::from(&config),
            started_at,
            session,
        ));
        self.display_step();
        Ok(session)
    }

    /// Ends the current run, if any. Safe to call at any time.
    pub fn stop(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if let Some(timer) = state.pending_timer.take() {
            self.scheduler.cancel(timer);
        }
        let session = state.session;
        self.state = None;
        debug!(session = session.0, "playback stopped");
        self.observer.on_stopped();
    }

    /// Stops the run identified by `session`. Returns false, and does
    /// nothing, when that run is no longer the active one.
    pub fn cancel(&mut self, session: Session) -> bool {
        if self.session() != Some(session) {
            return false;
        }
        self.stop();
        true
    }

    /// Entry point for the driver when a scheduled timer comes due.
    pub fn on_timer(&mut self, timer: TimerId) {
        let now = self.scheduler.now_ms();
        let Some(state) = self.state.as_mut() else {
            trace!(?timer, "timer fired while idle; ignored");
            return;
        };
        if state.pending_timer != Some(timer) {
            trace!(?timer, "stale timer ignored");
            return;
        }
        state.pending_timer = None;
        state.advance(now);
        self.display_step();
    }

    fn display_step(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        let Some(token) = state.current_token() else {
            let session = state.session;
            self.state = None;
            debug!(session = session.0, "playback complete");
            self.observer.on_complete();
            return;
        };

        let fixation = calculate_anchor_position(&token.text);
        let base_delay_ms = wpm_to_milliseconds(state.wpm);
        let delay_ms = calculate_word_delay(token, base_delay_ms, &self.timing);
        let (position, total) = state.progress();

        self.observer.on_word(&token.text, fixation);
        self.observer.on_progress(position, total);

        trace!(
            position,
            total,
            wpm = state.wpm,
            delay_ms,
            "word displayed"
        );
        state.pending_timer = Some(self.scheduler.schedule(delay_ms));
    }
}

use std::time::Duration;

use tracing::{info, warn};

use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::{
    Clock, EngineError, PlaybackController, RunConfig, SystemClock, TimerQueue,
};

/// Terminal-facing wrapper around one playback controller.
///
/// Keeps the loaded text and run configuration so the reader can restart
/// from the first word.
pub struct App<C: Clock = SystemClock> {
    mode: AppMode,
    controller: PlaybackController<TimerQueue<C>, RenderState>,
    text: String,
    config: RunConfig,
}

impl App<SystemClock> {
    pub fn new(text: String, config: RunConfig) -> Result<Self, EngineError> {
        Self::with_clock(SystemClock::new(), text, config)
    }
}

impl<C: Clock> App<C> {
    pub fn with_clock(clock: C, text: String, config: RunConfig) -> Result<Self, EngineError> {
        let mut controller =
            PlaybackController::new(TimerQueue::new(clock), RenderState::default());
        controller.start(&text, config)?;

        Ok(Self {
            mode: AppMode::Reading,
            controller,
            text,
            config,
        })
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn render_state(&self) -> &RenderState {
        self.controller.observer()
    }

    pub fn current_wpm(&self) -> Option<f64> {
        self.controller.current_wpm()
    }

    pub fn clock_mut(&mut self) -> &mut C {
        self.controller.scheduler_mut().clock_mut()
    }

    pub fn config(&self) -> RunConfig {
        self.config
    }

    /// How long the event loop may block before the next word is due.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.controller.scheduler().time_until_next()
    }

    /// Feeds every due timer to the controller. Returns true when the frame
    /// needs redrawing.
    pub fn tick(&mut self) -> bool {
        while let Some(timer) = self.controller.scheduler_mut().pop_due() {
            self.controller.on_timer(timer);
        }
        if self.mode == AppMode::Reading && self.controller.observer().finished {
            info!("reached end of text");
            self.mode = AppMode::Finished;
        }
        self.controller.observer_mut().take_dirty()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => {
                self.controller.stop();
                self.mode = AppMode::Quit;
            }
            AppEvent::Restart => match self.controller.start(&self.text, self.config) {
                Ok(_) => self.mode = AppMode::Reading,
                Err(err) => warn!(%err, "restart refused"),
            },
            AppEvent::None => {}
        }
    }

    pub fn handle_keypress(&mut self, c: char) {
        match (self.mode, AppEvent::from_key(c)) {
            // Any key dismisses the final frame except an explicit restart
            (AppMode::Finished, AppEvent::None) => self.handle_event(AppEvent::Quit),
            (_, event) => self.handle_event(event),
        }
    }
}

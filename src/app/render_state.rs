use crate::engine::PlaybackObserver;

/// What the terminal needs to draw a frame, kept up to date by the
/// playback controller.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderState {
    pub current_word: Option<String>,
    pub anchor: usize,
    /// 1-based position and total token count
    pub progress: (usize, usize),
    pub finished: bool,
    pub stopped: bool,
    /// Set whenever something visible changed since the last frame
    pub dirty: bool,
}

impl RenderState {
    /// Share of the text shown so far, using the 1-based position.
    pub fn progress_ratio(&self) -> f64 {
        let (position, total) = self.progress;
        if total == 0 {
            0.0
        } else {
            position as f64 / total as f64
        }
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl PlaybackObserver for RenderState {
    fn on_word(&mut self, word: &str, fixation: usize) {
        self.current_word = Some(word.to_string());
        self.anchor = fixation;
        self.finished = false;
        self.stopped = false;
        self.dirty = true;
    }

    fn on_progress(&mut self, position: usize, total: usize) {
        self.progress = (position, total);
        self.dirty = true;
    }

    fn on_complete(&mut self) {
        self.finished = true;
        self.dirty = true;
    }

    fn on_stopped(&mut self) {
        self.stopped = true;
        self.dirty = true;
    }
}

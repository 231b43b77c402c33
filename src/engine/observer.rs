/// Collaborators the controller reports to while a run is active.
///
/// The renderer, progress reporter and completion callback are folded into
/// one trait so a front end can keep all of its display state in one place.
pub trait PlaybackObserver {
    /// A token is now on screen; `fixation` is the grapheme to emphasise.
    fn on_word(&mut self, word: &str, fixation: usize);

    /// 1-based position of the token just shown.
    fn on_progress(&mut self, position: usize, total: usize);

    /// The sequence was exhausted. Fires once per run.
    fn on_complete(&mut self);

    /// The run was cut short by `stop`, `cancel` or a restart.
    fn on_stopped(&mut self) {}
}

impl PlaybackObserver for () {
    fn on_word(&mut self, _word: &str, _fixation: usize) {}
    fn on_progress(&mut self, _position: usize, _total: usize) {}
    fn on_complete(&mut self) {}
}

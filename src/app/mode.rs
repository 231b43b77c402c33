#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Words are being paced onto the screen
    Reading,
    /// The text ran out; the last frame stays up until a key is pressed
    Finished,
    Quit,
}


/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Quit,
    Restart,
    None,
}

impl AppEvent {
    pub fn from_key(c: char) -> Self {
        match c {
            'q' | 'Q' => AppEvent::Quit,
            'r' | 'R' => AppEvent::Restart,
            _ => AppEvent::None,
        }
    }
}

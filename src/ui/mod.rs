pub mod reader;
pub mod terminal;
pub mod terminal_guard;

pub use reader::view::{render_progress_bar, render_word_display};
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;

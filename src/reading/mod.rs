pub mod ovp;
pub mod ramp;
pub mod state;
pub mod timing;
pub mod token;

pub use ovp::calculate_anchor_position;
pub use ramp::SpeedRamp;
pub use state::{PlaybackState, Session};
pub use timing::{calculate_word_delay, punctuation_multiplier, tokenize_text, wpm_to_milliseconds};
pub use token::Token;

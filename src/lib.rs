//! RSVP word pacing: tokenization, fixation points, punctuation-aware
//! timing and a ramped playback controller, plus a terminal front end.

pub mod app;
pub mod cli;
pub mod engine;
pub mod input;
pub mod logging;
pub mod reading;
pub mod ui;

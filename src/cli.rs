//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::engine::RunConfig;
use crate::input::{parse_source, Source};

/// Read text one word at a time at a steadily increasing pace.
#[derive(Parser, Debug)]
#[command(name = "pacer")]
#[command(about = "RSVP speed reader for the terminal")]
#[command(version)]
pub struct Cli {
    /// Text to read: a file path (.txt, .pdf, .epub), `@@` for the clipboard, or `-` for stdin
    #[arg(default_value = "-")]
    pub source: String,

    /// Reading speed when playback begins
    #[arg(short = 's', long = "start-wpm", default_value_t = 250)]
    pub start_wpm: u32,

    /// Reading speed reached at the end of the ramp
    #[arg(short = 't', long = "target-wpm", default_value_t = 400)]
    pub target_wpm: u32,

    /// Milliseconds to ramp from start to target speed; 0 reads at target speed throughout
    #[arg(short = 'a', long = "accel-ms", default_value_t = 10_000)]
    pub accel_ms: u64,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn run_config(&self) -> RunConfig {
        RunConfig::new(self.start_wpm, self.target_wpm, self.accel_ms)
    }

    pub fn source(&self) -> Source {
        parse_source(&self.source)
    }
}

//! Source argument parsing.
//!
//! - `@@` → clipboard
//! - `-` → standard input
//! - `*.pdf` / `*.epub` → document extraction
//! - anything else → UTF-8 text file

use std::path::{Path, PathBuf};

/// Where the reading text comes from
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Stdin,
    Clipboard,
    Pdf(PathBuf),
    Epub(PathBuf),
    Text(PathBuf),
}

pub fn parse_source(input: &str) -> Source {
    let input = input.trim();

    match input {
        "" | "-" => return Source::Stdin,
        "@@" => return Source::Clipboard,
        _ => {}
    }

    let path = PathBuf::from(input.strip_prefix('@').unwrap_or(input));
    match extension(&path).as_deref() {
        Some("pdf") => Source::Pdf(path),
        Some("epub") => Source::Epub(path),
        _ => Source::Text(path),
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

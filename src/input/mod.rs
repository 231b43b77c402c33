use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod source;
pub mod text;

pub use source::{parse_source, Source};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No readable text in {0}")]
    EmptyDocument(String),
}

/// Raw text pulled from a source, ready to hand to the playback controller.
pub struct LoadedDocument {
    pub text: String,
    pub source: String,
}

/// Loads text from whichever source the user named.
///
/// A document made only of whitespace is refused here so the user gets a
/// message naming the source rather than a bare "no valid words".
pub fn load(source: &Source) -> Result<LoadedDocument, LoadError> {
    let document = match source {
        Source::Stdin => text::load_stdin()?,
        Source::Clipboard => clipboard::load()?,
        Source::Pdf(path) => pdf::load(path)?,
        Source::Epub(path) => epub::load(path)?,
        Source::Text(path) => text::load(path)?,
    };

    if document.text.trim().is_empty() {
        warn!(source = %document.source, "source contains no words");
        return Err(LoadError::EmptyDocument(document.source));
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_text_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello world").unwrap();

        let source = Source::Text(file.path().to_path_buf());
        let document = load(&source).unwrap();
        assert_eq!(document.text, "hello world");
        assert!(document.source.starts_with("file:"));
    }

    #[test]
    fn test_load_blank_file_is_empty_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"  \n\t ").unwrap();

        let result = load(&Source::Text(file.path().to_path_buf()));
        assert!(matches!(result, Err(LoadError::EmptyDocument(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load(&Source::Text(PathBuf::from("/nonexistent/notes.txt")));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }
}

use super::{LoadError, LoadedDocument};
use std::io::Read;
use std::path::Path;

/// Load a UTF-8 text file verbatim.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path)?;
    Ok(LoadedDocument {
        text,
        source: format!("file:{}", path.display()),
    })
}

/// Read everything piped into the process.
pub fn load_stdin() -> Result<LoadedDocument, LoadError> {
    read_from(std::io::stdin().lock(), "stdin")
}

fn read_from(mut reader: impl Read, source: &str) -> Result<LoadedDocument, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(LoadedDocument {
        text,
        source: source.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_text_load_nonexistent_file() {
        let result = load(Path::new("/nonexistent/path/story.txt"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_text_load_keeps_text_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"  One.\nTwo,  three!\n").unwrap();

        let document = load(file.path()).unwrap();
        assert_eq!(document.text, "  One.\nTwo,  three!\n");
    }

    #[test]
    fn test_text_load_rejects_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(load(file.path()), Err(LoadError::Io(_))));
    }

    #[test]
    fn test_read_from_reader() {
        let document = read_from("piped words".as_bytes(), "stdin").unwrap();
        assert_eq!(document.text, "piped words");
        assert_eq!(document.source, "stdin");
    }
}

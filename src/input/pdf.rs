use super::{LoadError, LoadedDocument};
use std::path::Path;

/// Load text from a PDF file using pdf-extract.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let buffer = std::fs::read(path).map_err(|e| LoadError::PdfParse(e.to_string()))?;

    pdf_extract::extract_text_from_mem(&buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))
        .map(|text| LoadedDocument {
            text,
            source: format!("pdf:{}", path.display()),
        })
}

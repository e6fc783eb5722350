//! Document ingestion — raw upload bytes to plain text to candidate keywords.
//!
//! PDF parsing is CPU-bound and can panic on malformed input, so callers in async
//! context must run `extract_text` inside `tokio::task::spawn_blocking`.

pub mod keywords;

use thiserror::Error;
use tracing::debug;

pub use keywords::extract_keywords;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("document is empty")]
    Empty,

    #[error("not a PDF document")]
    NotPdf,

    #[error("failed to read PDF: {0}")]
    Pdf(String),
}

/// Extracts the text layer of a PDF held in memory.
pub fn extract_text(bytes: &[u8]) -> Result<String, IngestError> {
    if bytes.is_empty() {
        return Err(IngestError::Empty);
    }
    if !bytes.starts_with(b"%PDF") {
        return Err(IngestError::NotPdf);
    }

    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| IngestError::Pdf(e.to_string()))?;
    debug!(bytes = bytes.len(), chars = text.len(), "extracted document text");
    Ok(text)
}

/// Whether an upload's filename marks it as a PDF (case-insensitive).
pub fn is_pdf_filename(filename: &str) -> bool {
    filename.to_lowercase().ends_with(".pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_upload_rejected() {
        assert!(matches!(extract_text(b""), Err(IngestError::Empty)));
    }

    #[test]
    fn test_non_pdf_bytes_rejected() {
        assert!(matches!(extract_text(b"hello, world"), Err(IngestError::NotPdf)));
    }

    #[test]
    fn test_pdf_filename_check() {
        assert!(is_pdf_filename("notes.pdf"));
        assert!(is_pdf_filename("Lecture-01.PDF"));
        assert!(!is_pdf_filename("notes.pdf.txt"));
        assert!(!is_pdf_filename("notes"));
    }
}

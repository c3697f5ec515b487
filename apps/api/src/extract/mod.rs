//! Text extraction from uploaded documents.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file format. Please upload a PDF file.")]
    UnsupportedFormat,

    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),
}

/// Document text extraction backend.
///
/// Object-safe so `AppState` carries `Arc<dyn TextExtractor>` and handler
/// tests can substitute a stub for the real PDF parser.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8], filename: &str) -> Result<String, ExtractError>;
}

/// Extracts plain text from PDF bytes via the `pdf-extract` crate.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8], filename: &str) -> Result<String, ExtractError> {
        if !filename.ends_with(".pdf") {
            return Err(ExtractError::UnsupportedFormat);
        }
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
    }
}

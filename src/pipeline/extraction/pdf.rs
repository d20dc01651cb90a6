use super::types::PdfTextSource;
use super::ExtractionError;

/// PDF text extractor backed by the pdf-extract crate. Handles digital PDFs
/// with embedded text layers; scanned reports come back near-empty and are
/// caught by the length gate downstream.
pub struct PdfTextExtractor;

impl PdfTextSource for PdfTextExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
        pdf_extract::extract_text_from_mem(pdf_bytes)
            .map_err(|e| ExtractionError::DocumentUnreadable(e.to_string()))
    }
}

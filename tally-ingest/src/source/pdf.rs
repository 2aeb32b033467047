//! PDF text-layer extraction.

use lopdf::Document;

use super::{ExtractionError, TextExtractor};

/// Reads the embedded text of every page, in page order, one trailing
/// newline per page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let document =
            Document::load_mem(bytes).map_err(|e| ExtractionError::Corrupt(e.to_string()))?;

        let pages = document.get_pages();
        tracing::debug!(pages = pages.len(), "loaded pdf");

        let mut text = String::new();
        for &page in pages.keys() {
            let page_text = document
                .extract_text(&[page])
                .map_err(|e| ExtractionError::Page {
                    page,
                    reason: e.to_string(),
                })?;
            text.push_str(&page_text);
            text.push('\n');
        }

        if text.trim().is_empty() {
            return Err(ExtractionError::NoTextLayer);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_corrupt() {
        let err = PdfTextExtractor.extract(b"%PDF-1.4 this is not a pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::Corrupt(_)), "got {err:?}");
    }
}

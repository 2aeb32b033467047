// Two implementations: Tesseract via leptess when the `ocr` feature is on,
// and one that always reports OCR as unavailable when it is not. This keeps
// the leptonica/tesseract system libraries optional at build time.

use std::path::PathBuf;

use super::{ExtractionError, TextExtractor};

/// Optical character recognition for raster images (PNG, JPEG).
#[derive(Debug, Clone)]
pub struct OcrExtractor {
    /// Tesseract language code, e.g. `eng`
    pub language: String,
    /// Directory holding `*.traineddata`; Tesseract's default when `None`
    pub tessdata_dir: Option<PathBuf>,
}

impl Default for OcrExtractor {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
            tessdata_dir: None,
        }
    }
}

#[cfg(feature = "ocr")]
impl TextExtractor for OcrExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        use leptess::LepTess;

        let data_path = match &self.tessdata_dir {
            Some(dir) => Some(dir.to_str().ok_or_else(|| {
                ExtractionError::Ocr(format!("tessdata path is not UTF-8: {}", dir.display()))
            })?),
            None => None,
        };

        let mut lt = LepTess::new(data_path, &self.language)
            .map_err(|e| ExtractionError::Ocr(format!("tesseract init: {e}")))?;
        lt.set_image_from_mem(bytes)
            .map_err(|e| ExtractionError::Ocr(format!("load image: {e}")))?;
        let text = lt
            .get_utf8_text()
            .map_err(|e| ExtractionError::Ocr(format!("tesseract run: {e}")))?;

        tracing::debug!(chars = text.len(), language = %self.language, "ocr complete");
        Ok(text)
    }
}

#[cfg(not(feature = "ocr"))]
impl TextExtractor for OcrExtractor {
    fn extract(&self, _bytes: &[u8]) -> Result<String, ExtractionError> {
        Err(ExtractionError::OcrUnavailable)
    }
}

//! Text acquisition: turn a document into one plain-text string.
//!
//! The parser does not care which extractor produced its input. A failure
//! here ends the request; nothing is parsed from partial text.

mod error;
pub mod ocr;
pub mod pdf;

use std::fmt;
use std::path::{Path, PathBuf};

pub use error::ExtractionError;
pub use ocr::OcrExtractor;
pub use pdf::PdfTextExtractor;

/// Anything that can turn raw document bytes into text.
pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Image(ImageFormat),
    /// Text that was already extracted elsewhere
    Text,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Pdf => write!(f, "pdf"),
            DocumentKind::Image(ImageFormat::Png) => write!(f, "png image"),
            DocumentKind::Image(ImageFormat::Jpeg) => write!(f, "jpeg image"),
            DocumentKind::Text => write!(f, "text"),
        }
    }
}

impl DocumentKind {
    /// Identify a document from its leading bytes, falling back to the file
    /// extension.
    pub fn detect(path: &Path, bytes: &[u8]) -> Result<Self, ExtractionError> {
        if let Some(kind) = Self::from_magic(bytes) {
            return Ok(kind);
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        Self::from_extension(&ext).ok_or_else(|| {
            ExtractionError::Unsupported(format!(
                "{} (expected pdf, png, jpg, jpeg or txt)",
                path.display()
            ))
        })
    }

    pub fn from_magic(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"%PDF-") {
            Some(DocumentKind::Pdf)
        } else if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(DocumentKind::Image(ImageFormat::Png))
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(DocumentKind::Image(ImageFormat::Jpeg))
        } else {
            None
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "pdf" => Some(DocumentKind::Pdf),
            "png" => Some(DocumentKind::Image(ImageFormat::Png)),
            "jpg" | "jpeg" => Some(DocumentKind::Image(ImageFormat::Jpeg)),
            "txt" | "text" => Some(DocumentKind::Text),
            _ => None,
        }
    }
}

/// Settings for the extractors that need any.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    pub ocr_language: String,
    pub tessdata_dir: Option<PathBuf>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            ocr_language: "eng".to_string(),
            tessdata_dir: None,
        }
    }
}

/// UTF-8 text passed through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

pub fn extractor_for(kind: DocumentKind, options: &IngestOptions) -> Box<dyn TextExtractor> {
    match kind {
        DocumentKind::Pdf => Box::new(PdfTextExtractor),
        DocumentKind::Image(_) => Box::new(OcrExtractor {
            language: options.ocr_language.clone(),
            tessdata_dir: options.tessdata_dir.clone(),
        }),
        DocumentKind::Text => Box::new(PlainTextExtractor),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub kind: DocumentKind,
    pub text: String,
}

/// Read a document from disk and extract its text.
pub fn extract_document(
    path: &Path,
    options: &IngestOptions,
) -> Result<ExtractedText, ExtractionError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let kind = DocumentKind::detect(path, &bytes)?;
    tracing::info!(%kind, bytes = bytes.len(), "extracting text from {}", path.display());

    extract_bytes(kind, &bytes, options)
}

pub fn extract_bytes(
    kind: DocumentKind,
    bytes: &[u8],
    options: &IngestOptions,
) -> Result<ExtractedText, ExtractionError> {
    let text = extractor_for(kind, options).extract(bytes)?;
    tracing::info!(%kind, chars = text.len(), "text extracted");
    Ok(ExtractedText { kind, text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_wins_over_extension() {
        let kind = DocumentKind::detect(Path::new("scan.txt"), b"%PDF-1.7\n...").unwrap();
        assert_eq!(kind, DocumentKind::Pdf);

        let kind = DocumentKind::detect(Path::new("receipt"), &[0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
        assert_eq!(kind, DocumentKind::Image(ImageFormat::Jpeg));
    }

    #[test]
    fn test_extension_fallback() {
        let kind = DocumentKind::detect(Path::new("statement.TXT"), b"01/02/2024 x 1.00").unwrap();
        assert_eq!(kind, DocumentKind::Text);

        let kind = DocumentKind::detect(Path::new("photo.jpeg"), b"").unwrap();
        assert_eq!(kind, DocumentKind::Image(ImageFormat::Jpeg));
    }

    #[test]
    fn test_unsupported() {
        let err = DocumentKind::detect(Path::new("book.docx"), b"PK\x03\x04").unwrap_err();
        assert!(matches!(err, ExtractionError::Unsupported(_)));
    }

    #[test]
    fn test_plain_text_rejects_invalid_utf8() {
        let err = PlainTextExtractor.extract(&[0x66, 0xFF, 0x6F]).unwrap_err();
        assert!(matches!(err, ExtractionError::Encoding(_)));
    }

    #[test]
    fn test_extract_document_missing_file() {
        let err = extract_document(Path::new("/nonexistent/statement.pdf"), &IngestOptions::default())
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Io { .. }));
    }
}

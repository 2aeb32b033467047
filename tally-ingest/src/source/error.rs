use std::path::PathBuf;
use thiserror::Error;

/// Text acquisition failed. Terminal for the document: no text, no parse.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported document type: {0}")]
    Unsupported(String),

    #[error("corrupt or unreadable PDF: {0}")]
    Corrupt(String),

    #[error("could not read text from PDF page {page}: {reason}")]
    Page { page: u32, reason: String },

    #[error("PDF has no text layer (scanned document?); convert its pages to images and run OCR")]
    NoTextLayer,

    #[error("document is not valid UTF-8 text: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("OCR support not compiled in; rebuild with --features ocr and install Tesseract/Leptonica")]
    OcrUnavailable,
}

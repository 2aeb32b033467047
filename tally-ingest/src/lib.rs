//! tally-ingest: document text acquisition (PDF text layer, image OCR) and the
//! line parser that turns extracted statement text into transactions.

pub mod parser;
pub mod source;

pub use parser::{
    classify_line, parse, parse_reader, parse_with_stats, LineOutcome, SkipReason,
    TransactionParser,
};
pub use source::{
    extract_document, DocumentKind, ExtractedText, ExtractionError, ImageFormat, IngestOptions,
    TextExtractor,
};
pub use tally_core::{ParseStats, TransactionRecord, TransactionTable};

//! Line classifier: extracted text in, transaction table out.
//!
//! Each non-empty line is handled on its own:
//! date search, then amount search on what is left, then the description is
//! whatever remains. A line missing either a date or an amount is skipped and
//! never affects its neighbours.

pub mod amount;
pub mod date;
pub mod lines;

use std::io::BufRead;

use tally_core::{ParseStats, TransactionRecord, TransactionTable};

pub use date::{DateMatch, DatePattern};

/// Why a line did not produce a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoDate,
    /// A date was found but nothing after it looked like an amount
    NoAmount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Emit(TransactionRecord),
    Skip(SkipReason),
}

/// Classify one line of text.
pub fn classify_line(line: &str) -> LineOutcome {
    let line = line.trim();

    let Some(found) = date::extract_date(line) else {
        return LineOutcome::Skip(SkipReason::NoDate);
    };
    let Some(amount) = amount::find_amount(&found.residual) else {
        return LineOutcome::Skip(SkipReason::NoAmount);
    };

    let description = assemble_description(&found.residual, amount);
    LineOutcome::Emit(TransactionRecord::new(found.date, description, amount))
}

fn assemble_description(residual: &str, amount: &str) -> String {
    residual
        .replacen(amount, "", 1)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a complete text into a transaction table.
pub fn parse(text: &str) -> TransactionTable {
    parse_with_stats(text).0
}

pub fn parse_with_stats(text: &str) -> (TransactionTable, ParseStats) {
    let mut parser = TransactionParser::new();
    parser.feed(text);
    parser.finish_with_stats()
}

/// Parse text from a reader, line by line.
pub fn parse_reader<R: BufRead>(reader: R) -> std::io::Result<TransactionTable> {
    let mut parser = TransactionParser::new();
    for line in reader.lines() {
        parser.push_line(&line?);
    }
    Ok(parser.finish())
}

/// Incremental parser for text that arrives in pieces (page by page, or as
/// OCR output streams in). Chunks may split a line anywhere; the result is
/// the same as calling [`parse`] on the concatenated text.
#[derive(Debug, Default)]
pub struct TransactionParser {
    pending: String,
    table: TransactionTable,
    stats: ParseStats,
}

impl TransactionParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, chunk: &str) {
        self.pending.push_str(chunk);
        let Some(last_newline) = self.pending.rfind('\n') else {
            return;
        };

        let tail = self.pending.split_off(last_newline + 1);
        let complete = std::mem::replace(&mut self.pending, tail);
        for line in lines::normalized_lines(&complete) {
            self.push_line(line);
        }
    }

    /// Classify a single complete line. Blank lines are ignored.
    pub fn push_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        self.stats.lines += 1;
        match classify_line(line) {
            LineOutcome::Emit(record) => {
                self.table.push(record);
                self.stats.emitted += 1;
            }
            LineOutcome::Skip(reason) => {
                tracing::trace!(?reason, line, "skipping line");
                match reason {
                    SkipReason::NoDate => self.stats.no_date += 1,
                    SkipReason::NoAmount => self.stats.no_amount += 1,
                }
            }
        }
    }

    /// Records emitted so far.
    pub fn table(&self) -> &TransactionTable {
        &self.table
    }

    pub fn finish(self) -> TransactionTable {
        self.finish_with_stats().0
    }

    pub fn finish_with_stats(mut self) -> (TransactionTable, ParseStats) {
        let rest = std::mem::take(&mut self.pending);
        for line in lines::normalized_lines(&rest) {
            self.push_line(line);
        }

        tracing::debug!(
            lines = self.stats.lines,
            emitted = self.stats.emitted,
            no_date = self.stats.no_date,
            no_amount = self.stats.no_amount,
            "parsed transactions"
        );
        (self.table, self.stats)
    }
}

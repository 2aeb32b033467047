//! Serialize a transaction table for download.
//!
//! CSV columns are always `Date,Description,Amount`, in that order, with the
//! header row present even when the table is empty.

use anyhow::{Context, Result};
use std::io::Write;

use crate::record::TransactionTable;

pub const CSV_HEADER: [&str; 3] = ["Date", "Description", "Amount"];

/// Write the table as CSV with standard quoting for embedded delimiters.
pub fn write_csv<W: Write>(table: &TransactionTable, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CSV_HEADER).context("write csv header")?;
    for record in table {
        wtr.write_record([
            record.date.as_str(),
            record.description.as_str(),
            record.amount.as_str(),
        ])
        .with_context(|| format!("write csv row for {}", record.date))?;
    }
    wtr.flush().context("flush csv")?;
    Ok(())
}

pub fn to_csv_string(table: &TransactionTable) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf)?;
    Ok(String::from_utf8(buf).context("csv output is not utf-8")?)
}

/// Write the table as a pretty-printed JSON array.
pub fn write_json<W: Write>(table: &TransactionTable, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, table).context("serialize json")?;
    writeln!(writer).context("write json")?;
    Ok(())
}

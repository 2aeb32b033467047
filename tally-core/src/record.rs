//! Transaction records as they come out of the line parser.
//!
//! Fields keep the exact substrings matched in the source text. Nothing is
//! parsed into typed dates or currency values; consumers re-parse if needed.

use serde::{Deserialize, Serialize};

/// One transaction line: raw date, free-text description, raw amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "Date")]
    pub date: String,
    /// May be empty when the line held only a date and an amount.
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Amount")]
    pub amount: String,
}

impl TransactionRecord {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount: amount.into(),
        }
    }
}

/// Records in the order their lines appeared in the source text.
///
/// Only complete records are ever pushed: `push` refuses anything with an
/// empty date or amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TransactionTable {
    records: Vec<TransactionRecord>,
}

impl TransactionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Returns `false` (and drops it) if date or amount is empty.
    pub fn push(&mut self, record: TransactionRecord) -> bool {
        if record.date.is_empty() || record.amount.is_empty() {
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransactionRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<TransactionRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a TransactionTable {
    type Item = &'a TransactionRecord;
    type IntoIter = std::slice::Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<TransactionRecord> for TransactionTable {
    fn from_iter<I: IntoIterator<Item = TransactionRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.push(record);
        }
        table
    }
}

/// Line counters for one parse call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Non-empty lines after trimming
    pub lines: usize,
    pub no_date: usize,
    /// Lines with a date but no amount
    pub no_amount: usize,
    pub emitted: usize,
}

impl ParseStats {
    pub fn skipped(&self) -> usize {
        self.no_date + self.no_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_rejects_partial_records() {
        let mut table = TransactionTable::new();
        assert!(!table.push(TransactionRecord::new("", "Lunch", "12.00")));
        assert!(!table.push(TransactionRecord::new("01/02/2024", "Lunch", "")));
        assert!(table.push(TransactionRecord::new("01/02/2024", "", "12.00")));
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].description, "");
    }

    #[test]
    fn test_from_iter_keeps_order() {
        let table: TransactionTable = vec![
            TransactionRecord::new("Jan 1", "A", "1.00"),
            TransactionRecord::new("Jan 2", "B", "2.00"),
        ]
        .into_iter()
        .collect();

        let dates: Vec<_> = table.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["Jan 1", "Jan 2"]);
    }

    #[test]
    fn test_serializes_with_column_names() {
        let record = TransactionRecord::new("03/15/2024", "Grocery Store", "-$45.67");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Date"], "03/15/2024");
        assert_eq!(json["Description"], "Grocery Store");
        assert_eq!(json["Amount"], "-$45.67");
    }
}

//! Terminal rendering of a transaction table.

use crate::record::{TransactionRecord, TransactionTable};

const MAX_DESCRIPTION: usize = 48;

/// Render the table with aligned columns, or a notice when it is empty.
pub fn format_table(table: &TransactionTable) -> String {
    if table.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let date_w = column_width(table, "Date", |r| &r.date);
    let desc_w = column_width(table, "Description", |r| &r.description).min(MAX_DESCRIPTION);
    let amount_w = column_width(table, "Amount", |r| &r.amount);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<date_w$}  {:<desc_w$}  {:>amount_w$}\n",
        "Date", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(date_w + desc_w + amount_w + 4));
    output.push('\n');

    for record in table {
        output.push_str(&format!(
            "{:<date_w$}  {:<desc_w$}  {:>amount_w$}\n",
            record.date,
            truncate(&record.description, desc_w),
            record.amount
        ));
    }

    output
}

fn column_width(
    table: &TransactionTable,
    header: &str,
    field: impl Fn(&TransactionRecord) -> &String,
) -> usize {
    table
        .iter()
        .map(|r| field(r).chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_notice() {
        assert_eq!(format_table(&TransactionTable::new()), "No transactions found.\n");
    }

    #[test]
    fn test_columns_align() {
        let table: TransactionTable = vec![
            TransactionRecord::new("03/15/2024", "Grocery Store", "-$45.67"),
            TransactionRecord::new("Jan 5, 2024", "Paycheck", "2500.00"),
        ]
        .into_iter()
        .collect();

        let out = format_table(&table);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Date         Description"));
        assert!(lines[2].starts_with("03/15/2024   Grocery Store"));
        assert!(lines[2].ends_with("-$45.67"));
        assert_eq!(lines[2].len(), lines[3].len());
    }

    #[test]
    fn test_long_description_truncated() {
        let long = "X".repeat(80);
        let table: TransactionTable = vec![TransactionRecord::new("1/2/24", long, "9.99")]
            .into_iter()
            .collect();

        let out = format_table(&table);
        assert!(out.contains(&format!("{}...", "X".repeat(MAX_DESCRIPTION - 3))));
    }
}

//! tally-core: transaction record types, CSV/JSON export and terminal display

pub mod display;
pub mod export;
pub mod record;

pub use display::format_table;
pub use export::{to_csv_string, write_csv, write_json};
pub use record::{ParseStats, TransactionRecord, TransactionTable};

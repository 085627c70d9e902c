//! spendpace-ingest: monthly export parsing and row validation.

pub mod export;
pub mod row;

pub use export::{DroppedRow, MonthlyExport, parse_export_text};
pub use row::{RawRow, validate_row};

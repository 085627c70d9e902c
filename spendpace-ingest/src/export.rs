//! Monthly export file parsing.
//!
//! Expected shape:
//!   line 1: month header ("November 2025,,,,,,")
//!   line 2: blank
//!   line 3: column labels (ignored)
//!   line 4+: data rows with 7 comma-separated fields

use anyhow::{Result, bail};
use spendpace_core::dates::extract_month_label;
use spendpace_core::record::SpendRecord;

use crate::row::{RawRow, validate_row};

/// Longest slice of a dropped row echoed back in the report.
const CONTENT_CLIP: usize = 50;

/// A data row that failed validation, with everything needed to report it.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedRow {
    /// 1-based line number in the export file
    pub line: usize,
    /// Row content, clipped for display
    pub content: String,
    /// All rejection reasons, joined
    pub reason: String,
}

/// The outcome of parsing one monthly export.
#[derive(Debug, Clone)]
pub struct MonthlyExport {
    pub month: String,
    pub records: Vec<SpendRecord>,
    pub dropped: Vec<DroppedRow>,
}

fn clip(line: &str) -> String {
    if line.chars().count() > CONTENT_CLIP {
        let head: String = line.chars().take(CONTENT_CLIP).collect();
        format!("{head}...")
    } else {
        line.to_string()
    }
}

/// Parse a monthly export's text into validated records plus an itemized
/// list of dropped rows. Row-level failures never abort the batch; a file
/// with fewer than 4 lines is rejected outright.
pub fn parse_export_text(text: &str) -> Result<MonthlyExport> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 4 {
        bail!("export has too few lines ({} < 4)", lines.len());
    }

    let month = extract_month_label(lines[0]);

    let mut records = Vec::new();
    let mut dropped = Vec::new();

    for (idx, raw_line) in lines.iter().enumerate().skip(3) {
        let line_number = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let raw = match RawRow::from_line(line) {
            Ok(raw) => raw,
            Err(reason) => {
                log::debug!("line {line_number} dropped: {reason}");
                dropped.push(DroppedRow {
                    line: line_number,
                    content: clip(line),
                    reason,
                });
                continue;
            }
        };

        match validate_row(&raw, &month) {
            Ok(record) => records.push(record),
            Err(reasons) => {
                let reason = reasons.join("; ");
                log::debug!("line {line_number} dropped: {reason}");
                dropped.push(DroppedRow {
                    line: line_number,
                    content: clip(line),
                    reason,
                });
            }
        }
    }

    Ok(MonthlyExport {
        month,
        records,
        dropped,
    })
}

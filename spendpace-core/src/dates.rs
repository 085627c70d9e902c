//! Date parsing: multi-format entry timestamps and canonical month labels.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Canonical timestamp format stored in the master dataset.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse an entry date in any of the supported input formats, returning the
/// canonical "YYYY-MM-DD HH:MM:SS" form. Date-only inputs default to
/// midnight. Returns `None` for empty/whitespace input or no match.
pub fn parse_entry_date(raw: &str) -> Option<String> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    // Ordered: US datetime (with and without seconds), US date, ISO
    // datetime, ISO date.
    const FORMATS: &[(&str, bool)] = &[
        ("%m/%d/%Y %H:%M:%S", true),
        ("%m/%d/%Y %H:%M", true),
        ("%m/%d/%Y", false),
        ("%Y-%m-%d %H:%M:%S", true),
        ("%Y-%m-%d", false),
    ];

    for &(fmt, has_time) in FORMATS {
        if has_time {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(dt.format(CANONICAL_FORMAT).to_string());
            }
        } else if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(format!("{} 00:00:00", d.format("%Y-%m-%d")));
        }
    }

    None
}

/// Extract a canonical "Mon YYYY" month label from an export's header line.
///
/// Accepts the full month name ("November 2025") or the abbreviated form;
/// commas and surrounding whitespace are stripped first. If neither form
/// parses, the stripped text is returned verbatim.
pub fn extract_month_label(header: &str) -> String {
    let clean = header.replace(',', "");
    let clean = clean.trim();

    for fmt in ["%B %Y %d", "%b %Y %d"] {
        if let Ok(d) = NaiveDate::parse_from_str(&format!("{clean} 1"), fmt) {
            return d.format("%b %Y").to_string();
        }
    }

    clean.to_string()
}

/// Parse a "Mon YYYY" label to the first day of that month.
pub fn parse_month_label(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{label} 1"), "%b %Y %d").ok()
}

/// Number of days in `date`'s calendar month.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}

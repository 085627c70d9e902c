//! Canonical spending record as stored in the master dataset.

use serde::{Deserialize, Serialize};

/// One validated, normalized spending entry.
///
/// Field names are serde-renamed to the master CSV column headers; the
/// declaration order is the column order on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendRecord {
    /// Canonical month label ("Nov 2025")
    #[serde(rename = "Month")]
    pub month: String,
    /// Canonical timestamp "YYYY-MM-DD HH:MM:SS"
    #[serde(rename = "Date")]
    pub date: String,
    /// Positive decimal, kept as text
    #[serde(rename = "Amount")]
    pub amount: String,
    /// One of the category vocabulary
    #[serde(rename = "Category")]
    pub category: String,
    /// One of the mood vocabulary, or empty
    #[serde(rename = "Mood")]
    pub mood: String,
    /// One of the time-of-day vocabulary, or empty
    #[serde(rename = "TimeOfDay")]
    pub time_of_day: String,
    /// Exact day name, or empty
    #[serde(rename = "DayOfWeek")]
    pub day_of_week: String,
    /// Free text, carried through unvalidated
    #[serde(rename = "WeekNumber")]
    pub week_number: String,
}

//! Raw row splitting and validation against the fixed vocabularies.
//!
//! Validation is non-short-circuiting: every applicable check runs and every
//! failure lands in the reason list, so one dropped row reports all of its
//! problems at once.

use spendpace_core::record::SpendRecord;
use spendpace_core::{dates, vocab};

/// Columns a data row must carry, in order: amount, category, mood,
/// time-of-day, day-of-week, week-number, date.
pub const REQUIRED_COLUMNS: usize = 7;

/// One data row split into its fields, trimmed but otherwise untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub amount: String,
    pub category: String,
    pub mood: String,
    pub time_of_day: String,
    pub day_of_week: String,
    pub week_number: String,
    pub date: String,
}

impl RawRow {
    /// Split a comma-separated line into a raw row. Columns beyond the
    /// required seven are ignored; fewer is a rejection.
    pub fn from_line(line: &str) -> Result<RawRow, String> {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < REQUIRED_COLUMNS {
            return Err(format!(
                "insufficient columns ({}/{REQUIRED_COLUMNS})",
                parts.len()
            ));
        }

        Ok(RawRow {
            amount: parts[0].trim().to_string(),
            category: parts[1].trim().to_string(),
            mood: parts[2].trim().to_string(),
            time_of_day: parts[3].trim().to_string(),
            day_of_week: parts[4].trim().to_string(),
            week_number: parts[5].trim().to_string(),
            date: parts[6].trim().to_string(),
        })
    }
}

/// Validate one raw row, producing a canonical record for `month` or the
/// full list of rejection reasons.
pub fn validate_row(raw: &RawRow, month: &str) -> Result<SpendRecord, Vec<String>> {
    let mut reasons = Vec::new();

    if raw.amount.is_empty() {
        reasons.push("missing amount".to_string());
    }
    if raw.category.is_empty() {
        reasons.push("missing category".to_string());
    }
    if raw.date.is_empty() {
        reasons.push("missing date".to_string());
    }

    let amount = match raw.amount.parse::<f64>() {
        Ok(a) if a > 0.0 => Some(a),
        _ => {
            reasons.push(format!("invalid amount: {}", raw.amount));
            None
        }
    };

    let category = vocab::normalize(&raw.category, vocab::CATEGORY_CORRECTIONS, vocab::VALID_CATEGORIES);
    if !category.is_empty() && !vocab::VALID_CATEGORIES.contains(&category.as_str()) {
        reasons.push(format!("invalid category: {}", raw.category));
    }

    let mood = vocab::normalize(&raw.mood, vocab::MOOD_CORRECTIONS, vocab::VALID_MOODS);
    if !mood.is_empty() && !vocab::VALID_MOODS.contains(&mood.as_str()) {
        reasons.push(format!("invalid mood: {}", raw.mood));
    }

    let time_of_day = vocab::normalize(
        &raw.time_of_day,
        vocab::TIME_OF_DAY_CORRECTIONS,
        vocab::VALID_TIMES_OF_DAY,
    );
    if !time_of_day.is_empty() && !vocab::VALID_TIMES_OF_DAY.contains(&time_of_day.as_str()) {
        reasons.push(format!("invalid time_of_day: {}", raw.time_of_day));
    }

    // Day names are never normalized: exact match or rejection.
    if !raw.day_of_week.is_empty() && !vocab::VALID_DAYS.contains(&raw.day_of_week.as_str()) {
        reasons.push(format!("invalid day_of_week: {}", raw.day_of_week));
    }

    let parsed_date = dates::parse_entry_date(&raw.date);
    if !raw.date.is_empty() && parsed_date.is_none() {
        reasons.push(format!("unparseable date: {}", raw.date));
    }

    if !reasons.is_empty() {
        return Err(reasons);
    }

    Ok(SpendRecord {
        month: month.to_string(),
        date: parsed_date.unwrap_or_default(),
        amount: amount.unwrap_or_default().to_string(),
        category,
        mood,
        time_of_day,
        day_of_week: raw.day_of_week.clone(),
        week_number: raw.week_number.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(amount: &str, category: &str, mood: &str, time: &str, day: &str, date: &str) -> RawRow {
        RawRow {
            amount: amount.to_string(),
            category: category.to_string(),
            mood: mood.to_string(),
            time_of_day: time.to_string(),
            day_of_week: day.to_string(),
            week_number: "Week 2".to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_from_line_rejects_short_rows() {
        let err = RawRow::from_line("12.50,Eating Out,Planned").unwrap_err();
        assert_eq!(err, "insufficient columns (3/7)");

        let err = RawRow::from_line("").unwrap_err();
        assert_eq!(err, "insufficient columns (1/7)");
    }

    #[test]
    fn test_from_line_ignores_extra_columns() {
        let raw = RawRow::from_line("12.50, Eating Out ,Planned,Evening,Friday,Week 2,11/7/2025,extra").unwrap();
        assert_eq!(raw.amount, "12.50");
        assert_eq!(raw.category, "Eating Out");
        assert_eq!(raw.date, "11/7/2025");
    }

    #[test]
    fn test_valid_row_is_canonicalized() {
        let raw = row("12.50", "eAting out", "Impulsive", "late night", "Friday", "11/7/2025 18:30");
        let record = validate_row(&raw, "Nov 2025").unwrap();

        assert_eq!(record.month, "Nov 2025");
        assert_eq!(record.date, "2025-11-07 18:30:00");
        assert_eq!(record.amount, "12.5");
        assert_eq!(record.category, "Eating Out");
        assert_eq!(record.mood, "Impulse");
        assert_eq!(record.time_of_day, "Night");
        assert_eq!(record.day_of_week, "Friday");
        assert_eq!(record.week_number, "Week 2");
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let raw = row("30", "Other", "", "", "", "2025-11-08");
        let record = validate_row(&raw, "Nov 2025").unwrap();
        assert_eq!(record.mood, "");
        assert_eq!(record.time_of_day, "");
        assert_eq!(record.day_of_week, "");
        assert_eq!(record.date, "2025-11-08 00:00:00");
    }

    #[test]
    fn test_zero_and_negative_amounts_rejected() {
        for amount in ["0", "-5", "abc"] {
            let raw = row(amount, "Other", "", "", "", "11/7/2025");
            let reasons = validate_row(&raw, "Nov 2025").unwrap_err();
            assert_eq!(reasons, vec![format!("invalid amount: {amount}")]);
        }
    }

    #[test]
    fn test_missing_required_fields_accumulate_reasons() {
        let raw = row("", "", "", "", "", "");
        let reasons = validate_row(&raw, "Nov 2025").unwrap_err();

        // An empty amount is both missing and unparseable, as two reasons.
        assert_eq!(
            reasons,
            vec![
                "missing amount".to_string(),
                "missing category".to_string(),
                "missing date".to_string(),
                "invalid amount: ".to_string(),
            ]
        );
    }

    #[test]
    fn test_unknown_category_rejected_with_original_text() {
        let raw = row("10", "Gambling", "", "", "", "11/7/2025");
        let reasons = validate_row(&raw, "Nov 2025").unwrap_err();
        assert_eq!(reasons, vec!["invalid category: Gambling".to_string()]);
    }

    #[test]
    fn test_day_of_week_is_strict() {
        // Lowercase day names would normalize for category/mood/time, but
        // day-of-week takes no normalization at all.
        let raw = row("10", "Other", "", "", "friday", "11/7/2025");
        let reasons = validate_row(&raw, "Nov 2025").unwrap_err();
        assert_eq!(reasons, vec!["invalid day_of_week: friday".to_string()]);
    }

    #[test]
    fn test_unparseable_date_rejected() {
        let raw = row("10", "Other", "", "", "", "soonish");
        let reasons = validate_row(&raw, "Nov 2025").unwrap_err();
        assert_eq!(reasons, vec!["unparseable date: soonish".to_string()]);
    }

    #[test]
    fn test_all_failures_reported_together() {
        let raw = row("-1", "Gambling", "Bored", "Dawn", "Fri", "soonish");
        let reasons = validate_row(&raw, "Nov 2025").unwrap_err();
        assert_eq!(
            reasons,
            vec![
                "invalid amount: -1".to_string(),
                "invalid category: Gambling".to_string(),
                "invalid mood: Bored".to_string(),
                "invalid time_of_day: Dawn".to_string(),
                "invalid day_of_week: Fri".to_string(),
                "unparseable date: soonish".to_string(),
            ]
        );
    }
}

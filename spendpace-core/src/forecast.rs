//! Month-to-date forecast engine over the master dataset.
//!
//! Partitions history into past months and the current (latest) month, then
//! derives spending pace, an end-of-month projection, and category/mood
//! breakdowns. Pure in its inputs: the dataset and today's date.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::dates::{days_in_month, parse_month_label};
use crate::record::SpendRecord;

/// Assumed length of a historical month when deriving a daily average.
const DAYS_PER_MONTH: f64 = 30.4;

/// How many category averages the forecast reports.
const TOP_CATEGORIES: usize = 3;

/// Average spend per past month for one category.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryForecast {
    pub category: String,
    pub average: f64,
}

/// Most frequent mood across past records.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TopMood {
    pub mood: String,
    pub percentage: f64,
}

impl TopMood {
    fn unknown() -> Self {
        TopMood {
            mood: "Unknown".to_string(),
            percentage: 0.0,
        }
    }
}

/// Forecast metrics payload. Money fields are rounded to 2 decimals, the
/// mood percentage to 1.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ForecastReport {
    pub success: bool,
    pub historical_monthly_average: f64,
    pub current_spend: f64,
    pub expected_spend_by_now: f64,
    pub pace_difference: f64,
    pub is_overspending: bool,
    pub end_of_month_estimate: f64,
    pub category_forecasts: Vec<CategoryForecast>,
    pub top_mood: TopMood,
}

/// A dataset record reduced to the fields the forecast needs.
struct Entry {
    month: String,
    amount: f64,
    category: String,
    mood: String,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Build forecast entries from dataset records.
///
/// Records whose date is empty or cannot be decomposed into a calendar date
/// are skipped; this is an independent check from ingest-time validation. An
/// amount that fails to parse is a decode error in the dataset itself.
fn build_entries(records: &[SpendRecord]) -> Result<Vec<Entry>> {
    let mut entries = Vec::with_capacity(records.len());
    for record in records {
        let amount: f64 = record
            .amount
            .parse()
            .with_context(|| format!("invalid amount '{}' in master dataset", record.amount))?;

        let day_part = record.date.split_whitespace().next().unwrap_or("");
        if NaiveDate::parse_from_str(day_part, "%Y-%m-%d").is_err() {
            log::debug!("skipping entry with undecomposable date '{}'", record.date);
            continue;
        }

        entries.push(Entry {
            month: record.month.clone(),
            amount: round2(amount),
            category: record.category.clone(),
            mood: record.mood.clone(),
        });
    }
    Ok(entries)
}

/// The month label maximal under month-label parsing. Labels that fail to
/// parse rank as oldest; the first-seen label wins ties.
fn latest_month(entries: &[Entry]) -> String {
    let mut best: Option<(&str, NaiveDate)> = None;
    for entry in entries {
        let rank = parse_month_label(&entry.month).unwrap_or(NaiveDate::MIN);
        match best {
            Some((_, best_rank)) if rank <= best_rank => {}
            _ => best = Some((&entry.month, rank)),
        }
    }
    best.map(|(label, _)| label.to_string()).unwrap_or_default()
}

/// Compute forecast metrics for a dataset as of `today`.
///
/// Returns `Ok(None)` when the dataset yields zero usable entries.
pub fn forecast(records: &[SpendRecord], today: NaiveDate) -> Result<Option<ForecastReport>> {
    let entries = build_entries(records)?;
    if entries.is_empty() {
        return Ok(None);
    }

    let current_month = latest_month(&entries);
    let (current, past): (Vec<&Entry>, Vec<&Entry>) =
        entries.iter().partition(|e| e.month == current_month);

    // Past totals grouped by month; unseen keys start at zero.
    let mut past_monthly_totals: BTreeMap<&str, f64> = BTreeMap::new();
    for entry in &past {
        *past_monthly_totals.entry(entry.month.as_str()).or_insert(0.0) += entry.amount;
    }
    let completed_months = past_monthly_totals.len();

    let historical_monthly_average = if completed_months > 0 {
        past_monthly_totals.values().sum::<f64>() / completed_months as f64
    } else {
        0.0
    };
    let historical_daily_average = if historical_monthly_average > 0.0 {
        historical_monthly_average / DAYS_PER_MONTH
    } else {
        0.0
    };

    let current_spend: f64 = current.iter().map(|e| e.amount).sum();
    let days_passed = today.day();

    let expected_spend_by_now = historical_daily_average * days_passed as f64;
    let pace_difference = current_spend - expected_spend_by_now;

    let days_remaining = days_in_month(today).saturating_sub(days_passed);
    let current_daily_pace = current_spend / days_passed.max(1) as f64;
    let end_of_month_estimate = current_spend + current_daily_pace * days_remaining as f64;

    let mut past_category_totals: BTreeMap<&str, f64> = BTreeMap::new();
    for entry in &past {
        *past_category_totals.entry(entry.category.as_str()).or_insert(0.0) += entry.amount;
    }
    let mut category_forecasts: Vec<CategoryForecast> = if completed_months > 0 {
        past_category_totals
            .iter()
            .map(|(category, total)| CategoryForecast {
                category: (*category).to_string(),
                average: round2(total / completed_months as f64),
            })
            .collect()
    } else {
        Vec::new()
    };
    category_forecasts.sort_by(|a, b| {
        b.average.partial_cmp(&a.average).unwrap_or(Ordering::Equal)
    });
    category_forecasts.truncate(TOP_CATEGORIES);

    // Only non-empty moods can become dominant, but the percentage is of
    // all past records, so unlogged moods dilute it. Ties go to the
    // alphabetically-first mood (BTreeMap order), keeping the pick
    // deterministic.
    let mut mood_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for entry in &past {
        if !entry.mood.is_empty() {
            *mood_counts.entry(entry.mood.as_str()).or_insert(0) += 1;
        }
    }
    let mut top_mood = TopMood::unknown();
    if !past.is_empty() {
        let mut dominant: Option<(&str, usize)> = None;
        for (mood, count) in &mood_counts {
            match dominant {
                Some((_, best)) if *count <= best => {}
                _ => dominant = Some((mood, *count)),
            }
        }
        if let Some((mood, count)) = dominant {
            top_mood = TopMood {
                mood: mood.to_string(),
                percentage: round1(count as f64 / past.len() as f64 * 100.0),
            };
        }
    }

    Ok(Some(ForecastReport {
        success: true,
        historical_monthly_average: round2(historical_monthly_average),
        current_spend: round2(current_spend),
        expected_spend_by_now: round2(expected_spend_by_now),
        pace_difference: round2(pace_difference),
        is_overspending: pace_difference > 0.0,
        end_of_month_estimate: round2(end_of_month_estimate),
        category_forecasts,
        top_mood,
    }))
}

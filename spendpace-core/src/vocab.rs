//! Fixed vocabularies and typo-correction tables for free-text fields.
//!
//! Categories, moods, and times of day are normalized; day-of-week is
//! deliberately not (exact match only, validated at the row level).

/// Valid spending categories.
pub static VALID_CATEGORIES: &[&str] = &[
    "Cooking/Groceries",
    "Eating Out",
    "Transportation",
    "Projects",
    "Utilities",
    "Beauty/Grooming",
    "Clothing",
    "Travel/Adventure",
    "Other",
];

/// Valid purchase moods.
pub static VALID_MOODS: &[&str] = &[
    "Planned", "Impulse", "Social", "Necessary", "Treat", "Family",
];

/// Valid times of day.
pub static VALID_TIMES_OF_DAY: &[&str] = &["Morning", "Afternoon", "Evening", "Night"];

/// Valid day names (exact match only).
pub static VALID_DAYS: &[&str] = &[
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

/// Known category typos/variations seen in real exports.
pub static CATEGORY_CORRECTIONS: &[(&str, &str)] = &[
    ("eating out", "Eating Out"),
    ("eAting out", "Eating Out"),
    ("EAting Out", "Eating Out"),
    ("cooking/groceries", "Cooking/Groceries"),
    ("Cooking/groceries", "Cooking/Groceries"),
    ("transportation", "Transportation"),
    ("projects", "Projects"),
    ("utilities", "Utilities"),
    ("beauty/grooming", "Beauty/Grooming"),
    ("clothing", "Clothing"),
    ("travel/adventure", "Travel/Adventure"),
    ("other", "Other"),
];

/// Known mood variations.
pub static MOOD_CORRECTIONS: &[(&str, &str)] = &[
    ("Impulsive", "Impulse"),
    ("impulsive", "Impulse"),
    ("impulse", "Impulse"),
    ("planned", "Planned"),
    ("social", "Social"),
    ("necessary", "Necessary"),
    ("treat", "Treat"),
    ("family", "Family"),
];

/// Known time-of-day variations.
pub static TIME_OF_DAY_CORRECTIONS: &[(&str, &str)] = &[
    ("Late Night", "Night"),
    ("late night", "Night"),
    ("morning", "Morning"),
    ("afternoon", "Afternoon"),
    ("evening", "Evening"),
    ("night", "Night"),
];

/// Normalize a free-text value against a vocabulary.
///
/// Resolution order: empty values pass through; exact vocabulary members
/// pass through; correction-table hits map to their canonical form; a
/// case-insensitive vocabulary match returns the canonical casing; anything
/// else is returned unchanged and will fail the caller's membership check.
pub fn normalize(value: &str, corrections: &[(&str, &str)], valid: &[&str]) -> String {
    if value.is_empty() {
        return String::new();
    }

    if valid.contains(&value) {
        return value.to_string();
    }

    if let Some((_, mapped)) = corrections.iter().find(|(from, _)| *from == value) {
        return (*mapped).to_string();
    }

    let lower = value.to_lowercase();
    if let Some(canonical) = valid.iter().find(|v| v.to_lowercase() == lower) {
        return (*canonical).to_string();
    }

    value.to_string()
}

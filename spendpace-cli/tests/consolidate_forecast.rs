//! End-to-end flow: monthly exports -> consolidation -> master CSV -> forecast.

use chrono::NaiveDate;
use spendpace_core::dataset;
use spendpace_core::forecast;
use spendpace_ingest::parse_export_text;
use tempfile::TempDir;

fn export(month_header: &str, rows: &[&str]) -> String {
    format!(
        "{month_header},,,,,,\n\nAmount,Category,Mood,Time of Day,Day of Week,Week Number,Date\n{}\n",
        rows.join("\n")
    )
}

#[test]
fn test_consolidate_three_months_then_forecast() {
    let dir = TempDir::new().unwrap();
    let master = dir.path().join("master_finances.csv");

    let jan = export(
        "January 2026",
        &[
            "400,Eating Out,Social,Evening,Friday,Week 1,1/2/2026 19:00",
            "600,cooking/groceries,planned,Morning,,Week 3,1/18/2026",
        ],
    );
    let feb = export(
        "February 2026",
        &[
            "1000,Eating Out,Planned,Evening,Saturday,Week 2,2/10/2026 20:15:30",
            "not-a-row",
        ],
    );
    let apr = export(
        "April 2026",
        &[
            "250,Transportation,Necessary,Morning,Friday,Week 1,2026-04-03",
            "350,Eating Out,Impulse,Night,Sunday,Week 2,2026-04-12 21:00:00",
        ],
    );

    for (i, text) in [jan, feb, apr].iter().enumerate() {
        let parsed = parse_export_text(text).unwrap();
        assert!(!parsed.records.is_empty());
        let replaced = dataset::consolidate(&parsed.records, &master, i > 0).unwrap();
        assert_eq!(replaced, 0);
    }

    // The malformed February row was dropped, not fatal.
    let loaded = dataset::load(&master).unwrap();
    assert_eq!(loaded.len(), 5);

    let today = NaiveDate::from_ymd_opt(2026, 4, 15).unwrap();
    let report = forecast(&loaded, today).unwrap().unwrap();

    assert!(report.success);
    assert_eq!(report.historical_monthly_average, 1000.0);
    assert_eq!(report.current_spend, 600.0);
    assert_eq!(report.expected_spend_by_now, 493.42);
    assert_eq!(report.pace_difference, 106.58);
    assert!(report.is_overspending);
    assert_eq!(report.end_of_month_estimate, 1200.0);
    assert_eq!(report.top_mood.mood, "Planned");
}

#[test]
fn test_reconsolidating_a_month_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let master = dir.path().join("master_finances.csv");

    let jan = export(
        "January 2026",
        &["400,Eating Out,Social,Evening,Friday,Week 1,1/2/2026 19:00"],
    );
    let feb = export(
        "February 2026",
        &[
            "10,Other,,,,,2/1/2026",
            "20,Other,,,,,2/2/2026",
        ],
    );

    let jan_parsed = parse_export_text(&jan).unwrap();
    let feb_parsed = parse_export_text(&feb).unwrap();

    dataset::consolidate(&jan_parsed.records, &master, false).unwrap();
    assert_eq!(dataset::consolidate(&feb_parsed.records, &master, true).unwrap(), 0);
    assert_eq!(
        dataset::consolidate(&feb_parsed.records, &master, true).unwrap(),
        feb_parsed.records.len()
    );

    let loaded = dataset::load(&master).unwrap();
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded.iter().filter(|r| r.month == "Feb 2026").count(), 2);
}

#[test]
fn test_forecast_payload_shape_over_real_master() {
    let dir = TempDir::new().unwrap();
    let master = dir.path().join("master_finances.csv");

    let jan = export(
        "January 2026",
        &["400,Eating Out,Social,Evening,Friday,Week 1,1/2/2026 19:00"],
    );
    let feb = export("February 2026", &["30,Utilities,Planned,,,Week 1,2/3/2026"]);

    let jan_parsed = parse_export_text(&jan).unwrap();
    let feb_parsed = parse_export_text(&feb).unwrap();
    dataset::consolidate(&jan_parsed.records, &master, false).unwrap();
    dataset::consolidate(&feb_parsed.records, &master, true).unwrap();

    let loaded = dataset::load(&master).unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
    let report = forecast(&loaded, today).unwrap().unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["historical_monthly_average"], 400.0);
    assert_eq!(json["current_spend"], 30.0);
    assert_eq!(json["category_forecasts"][0]["category"], "Eating Out");
    assert_eq!(json["top_mood"]["mood"], "Social");
    assert_eq!(json["top_mood"]["percentage"], 100.0);
}

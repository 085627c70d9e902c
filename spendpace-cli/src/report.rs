//! Human-readable consolidation report.

use spendpace_ingest::MonthlyExport;
use std::path::Path;

pub fn print_report(export: &MonthlyExport, output: &Path, append: bool, replaced: usize) {
    println!();
    println!("{}", "=".repeat(50));
    println!("CONSOLIDATION REPORT");
    println!("{}", "=".repeat(50));

    let action = if append { "Appended" } else { "Created" };
    println!("\n{action} {} rows -> {}", export.records.len(), output.display());

    if replaced > 0 {
        println!("  replaced {replaced} existing rows for {}", export.month);
    }

    if export.dropped.is_empty() {
        println!("\nNo rows dropped. All data valid.");
    } else {
        println!("\nDROPPED {} rows:", export.dropped.len());
        println!("{}", "-".repeat(50));
        for dropped in &export.dropped {
            println!("  Row {}: {}", dropped.line, dropped.reason);
            println!("    Content: {}", dropped.content);
        }
        println!("{}", "-".repeat(50));
    }

    println!("\n{}", "=".repeat(50));
}

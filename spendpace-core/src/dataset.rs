//! Master dataset persistence: CSV load/store and whole-month consolidation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::record::SpendRecord;

/// Load every record from a master dataset file.
pub fn load(path: &Path) -> Result<Vec<SpendRecord>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: SpendRecord =
            row.with_context(|| format!("decoding {}", path.display()))?;
        records.push(record);
    }
    Ok(records)
}

/// Store records as the full contents of the master dataset.
///
/// Writes to a sibling temp file and renames over the target, so an
/// interrupted rewrite never leaves a truncated or duplicated dataset.
pub fn store(records: &[SpendRecord], path: &Path) -> Result<()> {
    let temp_path = path.with_extension("csv.tmp");

    let mut writer = csv::Writer::from_path(&temp_path)
        .with_context(|| format!("creating {}", temp_path.display()))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    drop(writer);

    fs::rename(&temp_path, path)
        .with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}

/// Fold a single month's batch of records into the master dataset.
///
/// With `append` false, or when the target does not exist yet, the dataset
/// becomes exactly `new_records`. Otherwise every existing record for the
/// batch's month is dropped and the batch is written after the surviving
/// records (whole-month replace, never a row-level merge). Returns how many
/// prior records were replaced.
///
/// The batch must be non-empty and share one month label.
pub fn consolidate(new_records: &[SpendRecord], path: &Path, append: bool) -> Result<usize> {
    let month = new_records
        .first()
        .map(|r| r.month.as_str())
        .context("consolidate called with an empty batch")?;

    if !append || !path.exists() {
        store(new_records, path)?;
        return Ok(0);
    }

    let existing = load(path)?;
    let mut kept = Vec::with_capacity(existing.len() + new_records.len());
    let mut replaced = 0usize;
    for record in existing {
        if record.month == month {
            replaced += 1;
        } else {
            kept.push(record);
        }
    }
    kept.extend_from_slice(new_records);

    log::debug!("consolidating {month}: {replaced} prior rows replaced, {} kept", kept.len());
    store(&kept, path)?;
    Ok(replaced)
}

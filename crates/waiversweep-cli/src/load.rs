//! Waiver export loading.
//!
//! The export's column names are normalized here, at the boundary; the
//! core record type never sees them. Rows that cannot identify a waiver
//! are skipped with a warning, never fatal — only a structurally
//! unusable export (missing columns, unreadable file) aborts the run.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::warn;

use waiversweep_core::WaiverRecord;

/// Columns a usable export must carry.
const REQUIRED_COLUMNS: &[&str] = &["Waiver Id", "Expiration Date", "Scope Type", "Scope Id"];

/// One row of the export, in its native column layout.
#[derive(Debug, Clone, Deserialize)]
struct CsvWaiverRow {
    #[serde(rename = "Waiver Id")]
    waiver_id: Option<String>,

    #[serde(rename = "Scope Type")]
    scope_type: Option<String>,

    #[serde(rename = "Scope Id")]
    scope_id: Option<String>,

    #[serde(rename = "Expiration Date")]
    expiration_date: Option<String>,

    #[serde(rename = "Component Name", default)]
    component_name: Option<String>,
}

impl CsvWaiverRow {
    /// Convert into the core record. Rows without the identifying
    /// fields are not actionable and yield `None`.
    fn into_record(self) -> Option<WaiverRecord> {
        let waiver_id = self.waiver_id?;
        let scope_kind = self.scope_type?;

        Some(WaiverRecord {
            waiver_id,
            scope_kind,
            scope_id: self.scope_id,
            expiration: self.expiration_date,
            component: self.component_name,
        })
    }
}

/// Load all actionable waiver records from an export file.
pub fn load_waiver_records(path: &Path) -> Result<Vec<WaiverRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to read the waiver export {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read the header row of {}", path.display()))?;
    validate_headers(headers)?;

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<CsvWaiverRow>().enumerate() {
        // Header occupies line 1.
        let line = index + 2;
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                warn!(line, error = %err, "skipping malformed export row");
                continue;
            }
        };
        match row.into_record() {
            Some(record) => records.push(record),
            None => warn!(line, "skipping row without waiver id or scope type"),
        }
    }

    Ok(records)
}

/// Check that every required column is present, naming all that are not.
fn validate_headers(headers: &csv::StringRecord) -> Result<()> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !headers.iter().any(|header| header == *required))
        .collect();

    if !missing.is_empty() {
        bail!(
            "waiver export is missing required columns: {}",
            missing.join(", ")
        );
    }
    Ok(())
}

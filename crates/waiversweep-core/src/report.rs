//! Operator-facing run reports.
//!
//! Pure rendering over classification and reconciliation results. No
//! decision logic lives here; output reflects the given counts and
//! outcomes faithfully.

use crate::reconcile::DeletionSummary;
use crate::record::{ExpiredWaiver, SkippedRecord};

/// Render the expired waiver listing shown before the confirmation gate.
pub fn render_expired_listing(expired: &[ExpiredWaiver]) -> String {
    let mut out = format!(
        "Found {} expired waivers to potentially delete:\n",
        expired.len()
    );
    for entry in expired {
        let record = &entry.record;
        out.push_str(&format!("  - Waiver ID: {}\n", record.waiver_id));
        out.push_str(&format!(
            "    Scope    : {} / {}\n",
            record.scope_kind,
            record.scope_id.as_deref().unwrap_or("-")
        ));
        out.push_str(&format!(
            "    Expired  : {}\n",
            record.expiration.as_deref().unwrap_or("-")
        ));
        out.push_str(&format!("    Component: {}\n", record.component_label()));
    }
    out
}

/// Render the records skipped for unparseable expiration timestamps.
pub fn render_skipped_listing(skipped: &[SkippedRecord]) -> String {
    let mut out = format!(
        "Skipped {} records with unparseable expiration dates:\n",
        skipped.len()
    );
    for record in skipped {
        out.push_str(&format!(
            "  - Waiver ID: {} (expiration: {:?})\n",
            record.waiver_id, record.raw
        ));
    }
    out
}

/// Render the final accounting line for a reconciliation run.
pub fn render_deletion_summary(summary: &DeletionSummary) -> String {
    if !summary.confirmed {
        return "Deletion cancelled. No waivers were removed.".to_string();
    }
    format!(
        "Deletion complete. Successfully deleted: {}, Failed: {}",
        summary.deleted, summary.failed
    )
}

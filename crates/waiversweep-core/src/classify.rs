//! Expiration classification over a waiver export.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::record::{ExpiredWaiver, SkippedRecord, WaiverRecord};
use crate::timeparse::{parse_expiration, ParsedExpiration};

/// Result of classifying an export against a reference instant.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedWaivers {
    /// Expired waivers, preserving input order.
    pub expired: Vec<ExpiredWaiver>,

    /// Records whose expiration timestamp could not be parsed.
    pub skipped_unparseable: Vec<SkippedRecord>,
}

/// Partition records into expired and skipped-unparseable sets.
///
/// Records without an expiration are excluded silently: "no expiration
/// set" is a common state of a waiver, not a defect. Unparseable
/// timestamps are logged and collected for the run report, and never
/// stop the pass. A waiver expiring exactly at `reference` is not
/// expired; only strictly earlier instants qualify.
pub fn classify_expired(
    records: Vec<WaiverRecord>,
    reference: DateTime<Utc>,
) -> ClassifiedWaivers {
    let mut classified = ClassifiedWaivers::default();

    for record in records {
        let raw = match record.expiration.as_deref() {
            Some(raw) => raw,
            None => continue,
        };

        match parse_expiration(raw) {
            ParsedExpiration::Instant(expired_at) if expired_at < reference => {
                classified.expired.push(ExpiredWaiver { record, expired_at });
            }
            ParsedExpiration::Instant(_) => {}
            ParsedExpiration::Unparseable(raw) => {
                warn!(
                    waiver_id = %record.waiver_id,
                    raw = %raw,
                    "could not parse expiration date, skipping record"
                );
                classified.skipped_unparseable.push(SkippedRecord {
                    waiver_id: record.waiver_id.clone(),
                    raw,
                });
            }
        }
    }

    classified
}

//! Waiver record value types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single policy waiver as read from a governance export.
///
/// Field names are normalized by the record source before construction,
/// so this type is independent of any particular export column layout.
/// A record is actionable only when `waiver_id` and `scope_kind` are
/// present; `scope_id` is required for deletion but not for
/// classification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WaiverRecord {
    /// Server-assigned waiver identifier.
    pub waiver_id: String,

    /// Declared governance scope kind, in the export's vocabulary.
    pub scope_kind: String,

    /// Identifier of the owning scope.
    pub scope_id: Option<String>,

    /// Raw expiration timestamp, if the waiver has one.
    pub expiration: Option<String>,

    /// Component label, display only.
    pub component: Option<String>,
}

impl WaiverRecord {
    /// Component label with the display default for waivers without one.
    pub fn component_label(&self) -> &str {
        self.component.as_deref().unwrap_or("N/A")
    }
}

/// A waiver known to have expired relative to the run's reference time.
///
/// Created by the classifier and consumed, never mutated, by the
/// reconciler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpiredWaiver {
    pub record: WaiverRecord,

    /// Parsed expiration instant, normalized to UTC.
    pub expired_at: DateTime<Utc>,
}

/// A record excluded from classification because its expiration
/// timestamp could not be parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkippedRecord {
    pub waiver_id: String,

    /// Original timestamp string, kept for operator diagnosis.
    pub raw: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_label_default() {
        let record = WaiverRecord {
            waiver_id: "w1".to_string(),
            scope_kind: "application".to_string(),
            scope_id: Some("app-1".to_string()),
            expiration: None,
            component: None,
        };
        assert_eq!(record.component_label(), "N/A");
    }

    #[test]
    fn test_component_label_present() {
        let record = WaiverRecord {
            waiver_id: "w1".to_string(),
            scope_kind: "application".to_string(),
            scope_id: Some("app-1".to_string()),
            expiration: None,
            component: Some("log4j-core 2.14.1".to_string()),
        };
        assert_eq!(record.component_label(), "log4j-core 2.14.1");
    }
}

//! Deletion reconciliation over the expired waiver set.
//!
//! Drives the destructive half of a run: one confirmation gate, then a
//! strictly sequential pass over the expired entries. Each entry is
//! attempted exactly once and classified into a per-entry outcome; an
//! individual failure never stops the batch.

use tracing::{error, info};

use crate::api::{DeleteOutcome, PolicyWaiverApi};
use crate::record::ExpiredWaiver;
use crate::scope::ScopeKind;

/// Per-entry deletion result.
#[derive(Debug, Clone, PartialEq)]
pub enum DeletionOutcome {
    /// Server acknowledged the deletion.
    Deleted,

    /// Declared scope kind has no deletion path mapping; no request was
    /// made.
    UnknownScope { scope_kind: String },

    /// Record carried no scope id to address the request with; no
    /// request was made.
    MissingScopeId,

    /// Server answered and declined.
    ServerRejected { details: String },

    /// The request produced no server verdict.
    TransportFailed { details: String },
}

/// One attempted entry and its outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletionAttempt {
    pub waiver_id: String,
    pub outcome: DeletionOutcome,
}

/// Accounting for one reconciliation run.
///
/// When `confirmed` is true, `deleted + failed` equals the number of
/// expired entries the run was given. When it is false (operator
/// declined, or there was nothing to delete) both counts are zero and
/// no request was made.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeletionSummary {
    pub confirmed: bool,
    pub deleted: usize,
    pub failed: usize,
    pub attempts: Vec<DeletionAttempt>,
}

impl DeletionSummary {
    /// Total entries attempted.
    pub fn attempted(&self) -> usize {
        self.deleted + self.failed
    }
}

/// Delete every expired waiver after a single confirmation.
///
/// The confirmation gate runs exactly once, and only when there is at
/// least one entry. Entries are attempted strictly in input order, one
/// request at a time; there is no mid-batch cancellation.
pub async fn run_deletions<F>(
    expired: Vec<ExpiredWaiver>,
    confirm: F,
    api: &dyn PolicyWaiverApi,
) -> DeletionSummary
where
    F: FnOnce() -> bool,
{
    if expired.is_empty() {
        return DeletionSummary::default();
    }

    if !confirm() {
        info!("deletion cancelled by operator");
        return DeletionSummary::default();
    }

    let mut summary = DeletionSummary {
        confirmed: true,
        ..DeletionSummary::default()
    };

    for entry in expired {
        let waiver_id = entry.record.waiver_id.clone();
        let outcome = delete_one(&entry, api).await;

        match &outcome {
            DeletionOutcome::Deleted => {
                summary.deleted += 1;
                info!(waiver_id = %waiver_id, "deleted waiver");
            }
            DeletionOutcome::UnknownScope { scope_kind } => {
                summary.failed += 1;
                error!(
                    waiver_id = %waiver_id,
                    scope_kind = %scope_kind,
                    "unknown scope kind, waiver not deleted"
                );
            }
            DeletionOutcome::MissingScopeId => {
                summary.failed += 1;
                error!(waiver_id = %waiver_id, "missing scope id, waiver not deleted");
            }
            DeletionOutcome::ServerRejected { details } => {
                summary.failed += 1;
                error!(waiver_id = %waiver_id, details = %details, "server rejected deletion");
            }
            DeletionOutcome::TransportFailed { details } => {
                summary.failed += 1;
                error!(waiver_id = %waiver_id, details = %details, "deletion request failed");
            }
        }

        summary.attempts.push(DeletionAttempt { waiver_id, outcome });
    }

    summary
}

/// Resolve one entry's scope, issue the deletion request, and classify
/// the result. Entries that cannot be addressed produce an outcome
/// without any request.
async fn delete_one(entry: &ExpiredWaiver, api: &dyn PolicyWaiverApi) -> DeletionOutcome {
    let record = &entry.record;

    let scope = match ScopeKind::parse(&record.scope_kind) {
        Some(scope) => scope,
        None => {
            return DeletionOutcome::UnknownScope {
                scope_kind: record.scope_kind.clone(),
            }
        }
    };

    let scope_id = match record.scope_id.as_deref() {
        Some(id) if !id.trim().is_empty() => id,
        _ => return DeletionOutcome::MissingScopeId,
    };

    info!(
        waiver_id = %record.waiver_id,
        scope = %scope.path_token(),
        scope_id = %scope_id,
        "attempting waiver deletion"
    );

    match api
        .delete_waiver(scope.path_token(), scope_id, &record.waiver_id)
        .await
    {
        DeleteOutcome::Deleted => DeletionOutcome::Deleted,
        DeleteOutcome::Rejected { status, details } => DeletionOutcome::ServerRejected {
            details: format!("HTTP {status}: {details}"),
        },
        DeleteOutcome::TransportFailed { details } => {
            DeletionOutcome::TransportFailed { details }
        }
    }
}

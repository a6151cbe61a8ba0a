//! waiversweep core - expired policy waiver reconciliation
//!
//! Domain logic for reconciling a point-in-time waiver export against
//! wall-clock time:
//! - Normalizes the expiration timestamp encodings found in exports
//! - Resolves governance scope kinds to the deletion endpoint's path vocabulary
//! - Classifies records into expired / not expired / unparseable
//! - Deletes expired waivers behind a single confirmation gate, isolating
//!   per-record failures
//! - Renders operator-facing run reports

pub mod api;
pub mod classify;
pub mod fakes;
pub mod reconcile;
pub mod record;
pub mod report;
pub mod scope;
pub mod telemetry;
pub mod timeparse;

// Re-export key types
pub use api::{DeleteOutcome, PolicyWaiverApi};
pub use classify::{classify_expired, ClassifiedWaivers};
pub use reconcile::{run_deletions, DeletionAttempt, DeletionOutcome, DeletionSummary};
pub use record::{ExpiredWaiver, SkippedRecord, WaiverRecord};
pub use report::{render_deletion_summary, render_expired_listing, render_skipped_listing};
pub use scope::ScopeKind;
pub use timeparse::{parse_expiration, ParsedExpiration};

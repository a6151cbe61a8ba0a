//! Policy waiver API boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result of a single waiver deletion request.
///
/// Every failure mode crosses this boundary as a value; implementations
/// must not let transport faults escape as errors or panics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DeleteOutcome {
    /// Server acknowledged the deletion with a no-content response.
    Deleted,

    /// Server answered with anything other than the no-content
    /// acknowledgment.
    Rejected { status: u16, details: String },

    /// The request produced no server verdict: timeout, connection
    /// failure, or a response that never arrived intact.
    TransportFailed { details: String },
}

/// Deletion operations exposed by the governance server.
///
/// `scope_token` is the owner-type path segment obtained from
/// [`crate::scope::ScopeKind::path_token`]. Implementations apply their
/// own bounded per-call timeout so one unresponsive request cannot hang
/// a batch.
#[async_trait]
pub trait PolicyWaiverApi: Send + Sync {
    /// Delete one waiver, addressed by scope token, scope id, and
    /// waiver id.
    async fn delete_waiver(
        &self,
        scope_token: &str,
        scope_id: &str,
        waiver_id: &str,
    ) -> DeleteOutcome;
}

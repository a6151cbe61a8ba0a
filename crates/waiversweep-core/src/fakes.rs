//! In-memory fake for the policy waiver API (testing only)
//!
//! Provides `ScriptedPolicyApi`, which satisfies the trait contract
//! without any network dependency.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{DeleteOutcome, PolicyWaiverApi};

/// Scripted in-memory policy API.
///
/// Returns `Deleted` unless an outcome was scripted for the waiver id,
/// and records every call in order for assertions.
#[derive(Debug, Default)]
pub struct ScriptedPolicyApi {
    outcomes: Mutex<HashMap<String, DeleteOutcome>>,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl ScriptedPolicyApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcome returned for `waiver_id`.
    pub fn script(&self, waiver_id: &str, outcome: DeleteOutcome) {
        self.outcomes
            .lock()
            .unwrap()
            .insert(waiver_id.to_string(), outcome);
    }

    /// Calls made so far, as `(scope_token, scope_id, waiver_id)` tuples
    /// in call order.
    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl PolicyWaiverApi for ScriptedPolicyApi {
    async fn delete_waiver(
        &self,
        scope_token: &str,
        scope_id: &str,
        waiver_id: &str,
    ) -> DeleteOutcome {
        self.calls.lock().unwrap().push((
            scope_token.to_string(),
            scope_id.to_string(),
            waiver_id.to_string(),
        ));
        self.outcomes
            .lock()
            .unwrap()
            .get(waiver_id)
            .cloned()
            .unwrap_or(DeleteOutcome::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_outcome_is_deleted() {
        let api = ScriptedPolicyApi::new();
        let outcome = api.delete_waiver("application", "app-1", "w1").await;
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_scripted_outcome_replayed() {
        let api = ScriptedPolicyApi::new();
        api.script(
            "w1",
            DeleteOutcome::Rejected {
                status: 404,
                details: "no such waiver".to_string(),
            },
        );

        let outcome = api.delete_waiver("application", "app-1", "w1").await;
        assert_eq!(
            outcome,
            DeleteOutcome::Rejected {
                status: 404,
                details: "no such waiver".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_calls_recorded_in_order() {
        let api = ScriptedPolicyApi::new();
        api.delete_waiver("application", "app-1", "w1").await;
        api.delete_waiver("organization", "org-9", "w2").await;

        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].2, "w1");
        assert_eq!(calls[1], (
            "organization".to_string(),
            "org-9".to_string(),
            "w2".to_string(),
        ));
    }
}

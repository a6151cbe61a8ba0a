//! Sonatype IQ policy waiver API client.
//!
//! One operation: `DELETE /api/v2/policyWaivers/{ownerType}/{ownerId}/{waiverId}`.
//! A `204 No Content` is the only acknowledgment the server gives for a
//! successful deletion; every other answer is a rejection.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use waiversweep_core::api::{DeleteOutcome, PolicyWaiverApi};

use crate::config::IqConfig;
use crate::error::ClientError;

/// HTTP client for the IQ policy waiver management API.
pub struct IqPolicyClient {
    config: IqConfig,
    http_client: reqwest::Client,
}

impl IqPolicyClient {
    /// Build a client from explicit configuration.
    ///
    /// The configured timeout bounds every request, so one unresponsive
    /// deletion attempt cannot hang a batch.
    pub fn new(config: IqConfig) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("waiversweep/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(IqPolicyClient {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl PolicyWaiverApi for IqPolicyClient {
    async fn delete_waiver(
        &self,
        scope_token: &str,
        scope_id: &str,
        waiver_id: &str,
    ) -> DeleteOutcome {
        let url = waiver_endpoint(&self.config.base_url, scope_token, scope_id, waiver_id);
        debug!(url = %url, "DELETE policy waiver");

        let response = self
            .http_client
            .delete(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                classify_delete_status(status, &body)
            }
            Err(err) => DeleteOutcome::TransportFailed {
                details: describe_transport_error(&err, self.config.timeout_secs),
            },
        }
    }
}

/// Build the deletion endpoint URL from its path parts.
pub fn waiver_endpoint(
    base_url: &str,
    scope_token: &str,
    scope_id: &str,
    waiver_id: &str,
) -> String {
    format!(
        "{}/api/v2/policyWaivers/{}/{}/{}",
        base_url.trim_end_matches('/'),
        scope_token,
        scope_id,
        waiver_id
    )
}

/// Classify a DELETE response status into an outcome.
///
/// `204 No Content` is the only recognized success. A `200` from this
/// endpoint is NOT a deletion acknowledgment and is rejected with its
/// status; the server's contract for other verbs does not carry over.
fn classify_delete_status(status: StatusCode, body: &str) -> DeleteOutcome {
    if status == StatusCode::NO_CONTENT {
        return DeleteOutcome::Deleted;
    }

    let details = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unexpected response")
            .to_string()
    } else {
        body.trim().to_string()
    };

    DeleteOutcome::Rejected {
        status: status.as_u16(),
        details,
    }
}

/// Human-readable description of a request that produced no verdict.
fn describe_transport_error(err: &reqwest::Error, timeout_secs: u64) -> String {
    if err.is_timeout() {
        format!("timed out after {timeout_secs}s")
    } else if err.is_connect() {
        format!("could not connect to server: {err}")
    } else {
        err.to_string()
    }
}

//! IQ server connection configuration.

use serde::{Deserialize, Serialize};

/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for an IQ server.
///
/// Loaded once at startup and passed explicitly into
/// [`crate::IqPolicyClient::new`]; nothing reads it as ambient state
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IqConfig {
    /// Server base URL, e.g. `http://localhost:8070`.
    pub base_url: String,
    /// Basic auth username.
    pub username: String,
    /// Basic auth password.
    pub password: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for IqConfig {
    fn default() -> Self {
        IqConfig {
            base_url: std::env::var("IQ_SERVER_URL")
                .unwrap_or_else(|_| "http://localhost:8070".to_string()),
            username: std::env::var("IQ_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            password: std::env::var("IQ_PASSWORD").unwrap_or_else(|_| "admin123".to_string()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl IqConfig {
    /// Create a config from environment variables.
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create a config for a specific server.
    pub fn new(base_url: &str, username: &str, password: &str) -> Self {
        IqConfig {
            base_url: base_url.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

//! Error types for waiversweep-client

use thiserror::Error;

/// Errors that can occur while constructing the IQ client.
///
/// Request-level failures never surface here; the API boundary turns
/// them into outcome values instead.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Underlying HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    HttpInit(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::HttpInit(err.to_string())
    }
}

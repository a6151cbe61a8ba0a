//! waiversweep client - HTTP access to the IQ policy waiver API
//!
//! Implements the core `PolicyWaiverApi` boundary over reqwest:
//! - Explicit connection configuration passed into the constructor
//! - Basic auth and a bounded per-request timeout
//! - Every request failure mode classified into an outcome value

pub mod config;
pub mod error;
pub mod iq;

// Re-export key types
pub use config::{IqConfig, DEFAULT_TIMEOUT_SECS};
pub use error::ClientError;
pub use iq::{waiver_endpoint, IqPolicyClient};

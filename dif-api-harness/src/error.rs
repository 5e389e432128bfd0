//! Error types for the DIF API harness.
//!
//! Only failures that prevent a caller from observing the remote API are
//! errors. An HTTP 4xx/5xx response is *not* an error: it is returned as a
//! regular [`TransportResponse`](crate::transport::TransportResponse) so that
//! tests can assert on it.
//!
//! # Error Categories
//!
//! - **Transport** ([`HarnessError::Transport`]): no HTTP status was obtained
//!   (connection refused, DNS failure, TLS failure, timeout)
//! - **Configuration** ([`HarnessError::Config`], [`HarnessError::InvalidBaseUrl`]):
//!   the harness cannot be set up
//! - **Caller mistakes** ([`HarnessError::InvalidInput`], [`HarnessError::Serialization`]):
//!   detected before any I/O
//! - **Contract breaks** ([`HarnessError::DataShape`]): a success response whose
//!   body does not have the expected shape
//!
//! # Examples
//!
//! ```
//! use dif_api_harness::error::{HarnessError, Result};
//!
//! fn require_timeout(timeout_ms: u64) -> Result<u64> {
//!     if timeout_ms == 0 {
//!         return Err(HarnessError::Config("timeout must be positive".to_owned()));
//!     }
//!     Ok(timeout_ms)
//! }
//!
//! assert!(require_timeout(0).is_err());
//! ```

use thiserror::Error;

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Errors that can occur while talking to, or interpreting, the remote API.
///
/// # Error Recovery
///
/// None of these are retried by the harness. A transport error usually means
/// the API under test is not running at the configured base URL; a data-shape
/// error means the API broke its response contract and the test should fail.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The HTTP round trip could not be completed.
    ///
    /// Wraps [`reqwest::Error`]. Raised for connection refused, DNS and TLS
    /// failures and for the process-wide timeout. Never raised for an HTTP
    /// status code.
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured base URL cannot be used.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Configuration is missing, unreadable or invalid.
    ///
    /// Fatal at startup: without a base URL nothing can run.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A call was made with arguments that cannot form a request.
    ///
    /// For example, a path template with two placeholders given one argument.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A request body could not be encoded as JSON.
    #[error("Request serialization failed: {0}")]
    Serialization(String),

    /// A success response did not have the expected shape.
    ///
    /// Covers malformed JSON, a missing required field and a field of the
    /// wrong JSON type. Distinct from "not found", which projections report
    /// as `Ok(None)`.
    #[error("Unexpected response shape: {0}")]
    DataShape(String),
}

impl HarnessError {
    /// Returns true if no HTTP status was obtained.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns true if a response body broke the expected contract.
    #[must_use]
    pub const fn is_data_shape(&self) -> bool {
        matches!(self, Self::DataShape(_))
    }

    /// Returns true if the underlying transport failure was a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = HarnessError::DataShape("missing data.orderId".into());
        assert_eq!(error.to_string(), "Unexpected response shape: missing data.orderId");
    }

    #[test]
    fn test_config_error() {
        let error = HarnessError::Config("file not found".into());
        assert!(error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_invalid_input_error() {
        let error = HarnessError::InvalidInput("expected 1 path parameter, got 0".to_owned());
        assert_eq!(error.to_string(), "Invalid input: expected 1 path parameter, got 0");
    }

    #[test]
    fn test_invalid_base_url_error() {
        let error = HarnessError::InvalidBaseUrl("not a url".to_owned());
        assert_eq!(error.to_string(), "Invalid base URL: not a url");
    }

    #[test]
    fn test_classification_helpers() {
        let shape = HarnessError::DataShape("x".to_owned());
        assert!(shape.is_data_shape());
        assert!(!shape.is_transport());
        assert!(!shape.is_timeout());

        let config = HarnessError::Config("x".to_owned());
        assert!(!config.is_data_shape());
        assert!(!config.is_transport());
    }
}

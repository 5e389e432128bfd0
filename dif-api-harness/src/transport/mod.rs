//! Transport layer.
//!
//! This module provides a sealed `Transport` trait that performs exactly one
//! HTTP round trip per call and hands back the raw status, headers and body.
//! HTTP error statuses are ordinary responses here: the harness exists to
//! observe them.
//!
//! # Architecture
//!
//! - **[`TransportConfig`]**: what the user configures (base URL, timeout, logging)
//! - **[`RequestSpecification`]**: the parsed, shared form of that configuration
//! - **[`Transport`]**: protocol mechanics (`HttpTransport` over reqwest)
//! - **[`ApiClient`](crate::client::ApiClient)**: path templates, query strings, JSON
//!
//! # Examples
//!
//! ```rust,no_run
//! use dif_api_harness::transport::{
//!     HttpTransport, RequestContext, RequestSpecification, Transport, TransportConfig,
//! };
//! use url::Url;
//!
//! # async fn example() -> dif_api_harness::error::Result<()> {
//! let spec = RequestSpecification::from_config(&TransportConfig::default())?;
//! let transport = HttpTransport::with_spec(&spec)?;
//!
//! let url = Url::parse("http://localhost:5000/api/health/ping").unwrap();
//! let response = transport.get(RequestContext::new(&url, &spec)).await?;
//! println!("Status: {}", response.status);
//! # Ok(())
//! # }
//! ```

#[allow(
    redundant_imports,
    reason = "Future needed for RPITIT despite being in Edition 2024 prelude"
)]
use std::future::Future;
use std::{borrow::Cow, sync::OnceLock, time::Duration};

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    error::{HarnessError, Result},
    models::{ApiEnvelope, PaginatedResponse},
};

pub mod config;
pub mod http;
pub mod path;
mod sealed;

pub use config::TransportConfig;
pub use http::HttpTransport;
pub use path::QueryParams;

/// Parsed, immutable request defaults derived from a [`TransportConfig`].
///
/// Built once per [`ApiClient`](crate::client::ApiClient) and shared, via
/// `Arc`, by every endpoint client created from that client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpecification {
    /// Base URL every path is joined onto.
    pub base_url: Url,
    /// Headers sent with every request.
    pub default_headers: Vec<(String, String)>,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Log every outgoing request.
    pub log_requests: bool,
    /// Log the status and body of non-success responses.
    pub log_responses: bool,
}

impl RequestSpecification {
    /// Builds the specification from configuration.
    ///
    /// JSON is sent and accepted by default.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration fails validation.
    pub fn from_config(config: &TransportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            base_url: config.parsed_base_url()?,
            default_headers: vec![
                ("Content-Type".to_owned(), "application/json".to_owned()),
                ("Accept".to_owned(), "application/json".to_owned()),
            ],
            timeout: config.timeout(),
            log_requests: config.log_requests,
            log_responses: config.log_responses,
        })
    }
}

/// Request context for transport operations.
///
/// Contains the fully assembled URL and the headers to send.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    /// Absolute request URL, query string included.
    pub url: &'a Url,
    /// HTTP headers to include.
    pub headers: &'a [(String, String)],
}

impl<'a> RequestContext<'a> {
    /// Creates a context sending the default headers of `spec`.
    #[must_use]
    pub fn new(url: &'a Url, spec: &'a RequestSpecification) -> Self {
        Self { url, headers: &spec.default_headers }
    }
}

/// Response from transport operations.
///
/// Contains the HTTP status code, response headers and raw body. The body is
/// parsed as JSON at most once, on first access.
#[derive(Debug)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body bytes.
    pub body: Vec<u8>,
    /// Response headers, names lowercased.
    pub headers: Vec<(String, String)>,
    json: OnceLock<Value>,
}

impl TransportResponse {
    /// Creates a response from its parts.
    #[must_use]
    pub fn new(status: u16, body: Vec<u8>, headers: Vec<(String, String)>) -> Self {
        Self { status, body, headers, json: OnceLock::new() }
    }

    /// Returns true for a 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Returns the first header named `name`, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }

    /// Returns the body parsed as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::DataShape`] if the body is not valid JSON.
    pub fn json(&self) -> Result<&Value> {
        if let Some(value) = self.json.get() {
            return Ok(value);
        }
        let parsed: Value = serde_json::from_slice(&self.body).map_err(|e| {
            HarnessError::DataShape(format!("response body is not valid JSON: {e}"))
        })?;
        Ok(self.json.get_or_init(|| parsed))
    }

    /// Looks up a value by JSON pointer, e.g. `/data/orderId`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::DataShape`] if the body is not valid JSON.
    pub fn pointer(&self, pointer: &str) -> Result<Option<&Value>> {
        Ok(self.json()?.pointer(pointer))
    }

    /// Decodes the body into `T`. Unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::DataShape`] if the body does not match `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(self.json()?).map_err(|e| {
            HarnessError::DataShape(format!(
                "cannot decode {}: {e}",
                std::any::type_name::<T>()
            ))
        })
    }

    /// Decodes the standard `{ success, data, ... }` envelope.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::DataShape`] if the body does not match.
    pub fn envelope<T: DeserializeOwned>(&self) -> Result<ApiEnvelope<T>> {
        self.deserialize()
    }

    /// Decodes a paginated list envelope.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::DataShape`] if the body does not match.
    pub fn paginated<T: DeserializeOwned>(&self) -> Result<PaginatedResponse<T>> {
        self.deserialize()
    }
}

/// Transport protocol abstraction.
///
/// This trait is sealed; the only production implementation is
/// [`HttpTransport`]. Every method performs exactly one round trip.
///
/// # Errors
///
/// Implementations return [`HarnessError::Transport`] only when no HTTP
/// status was obtained. A 4xx or 5xx status is a successful call.
pub trait Transport: sealed::private::Sealed + Send + Sync {
    /// Executes a GET request.
    ///
    /// # Errors
    ///
    /// Returns error if the round trip cannot be completed.
    fn get<'a>(
        &'a self,
        ctx: RequestContext<'a>,
    ) -> impl Future<Output = Result<TransportResponse>> + Send + 'a;

    /// Executes a POST request with body.
    ///
    /// # Errors
    ///
    /// Returns error if the round trip cannot be completed.
    fn post<'a>(
        &'a self,
        ctx: RequestContext<'a>,
        body: &'a [u8],
    ) -> impl Future<Output = Result<TransportResponse>> + Send + 'a;

    /// Executes a PUT request with body.
    ///
    /// # Errors
    ///
    /// Returns error if the round trip cannot be completed.
    fn put<'a>(
        &'a self,
        ctx: RequestContext<'a>,
        body: &'a [u8],
    ) -> impl Future<Output = Result<TransportResponse>> + Send + 'a;

    /// Executes a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns error if the round trip cannot be completed.
    fn delete<'a>(
        &'a self,
        ctx: RequestContext<'a>,
    ) -> impl Future<Output = Result<TransportResponse>> + Send + 'a;

    /// Returns the protocol name for logging.
    fn protocol_name(&self) -> &'static str;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_specification_from_default_config() {
        let spec = RequestSpecification::from_config(&TransportConfig::default()).unwrap();
        assert_eq!(spec.base_url.as_str(), "http://localhost:5000/");
        assert_eq!(spec.timeout, Duration::from_secs(30));
        assert!(spec.log_requests);
        assert!(spec.log_responses);
        assert!(
            spec.default_headers
                .contains(&("Content-Type".to_owned(), "application/json".to_owned()))
        );
        assert!(
            spec.default_headers.contains(&("Accept".to_owned(), "application/json".to_owned()))
        );
    }

    #[test]
    fn test_request_specification_rejects_invalid_config() {
        let config = TransportConfig { timeout_ms: 0, ..Default::default() };
        assert!(RequestSpecification::from_config(&config).is_err());
    }

    #[test]
    fn test_request_context_uses_default_headers() {
        let spec = RequestSpecification::from_config(&TransportConfig::default()).unwrap();
        let url = Url::parse("http://localhost:5000/api/health").unwrap();
        let ctx = RequestContext::new(&url, &spec);

        assert_eq!(ctx.url.path(), "/api/health");
        assert_eq!(ctx.headers.len(), 2);
    }

    #[test]
    fn test_transport_response_creation() {
        let response = TransportResponse::new(
            200,
            b"{\"success\":true}".to_vec(),
            vec![("content-type".to_owned(), "application/json".to_owned())],
        );

        assert_eq!(response.status, 200);
        assert!(response.is_success());
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.text(), "{\"success\":true}");
    }

    #[test]
    fn test_transport_response_error_status_is_not_success() {
        let response = TransportResponse::new(404, b"Not Found".to_vec(), vec![]);
        assert!(!response.is_success());
        assert_eq!(response.text(), "Not Found");

        let response = TransportResponse::new(500, vec![], vec![]);
        assert!(!response.is_success());
    }

    #[test]
    fn test_transport_response_json_cached() {
        let body = br#"{"data":{"orderId":"o-1"}}"#;
        let response = TransportResponse::new(200, body.to_vec(), vec![]);

        let first = response.json().unwrap() as *const Value;
        let second = response.json().unwrap() as *const Value;
        assert_eq!(first, second);
        assert_eq!(response.pointer("/data/orderId").unwrap(), Some(&Value::from("o-1")));
        assert_eq!(response.pointer("/data/missing").unwrap(), None);
    }

    #[test]
    fn test_transport_response_invalid_json() {
        let response = TransportResponse::new(200, b"<html>".to_vec(), vec![]);
        assert!(response.json().unwrap_err().is_data_shape());
        assert!(response.pointer("/data").unwrap_err().is_data_shape());
    }

    #[test]
    fn test_transport_response_envelope() {
        let body = br#"{"success":true,"data":"pong","errors":[],"extra":1}"#;
        let response = TransportResponse::new(200, body.to_vec(), vec![]);

        let envelope = response.envelope::<String>().unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data.as_deref(), Some("pong"));
    }

    #[test]
    fn test_transport_response_deserialize_mismatch() {
        let response = TransportResponse::new(200, b"[1,2,3]".to_vec(), vec![]);
        let result = response.envelope::<String>();
        assert!(result.unwrap_err().is_data_shape());
    }

    #[test]
    fn test_transport_response_debug() {
        let response = TransportResponse::new(200, b"test".to_vec(), vec![]);

        let debug_str = format!("{response:?}");
        assert!(debug_str.contains("TransportResponse"));
        assert!(debug_str.contains("200"));
    }
}

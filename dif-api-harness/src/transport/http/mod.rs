//! HTTP transport implementation.
//!
//! This module provides HTTP/1.1 and HTTP/2 transport using reqwest.

use std::time::Duration;

use reqwest::{Client, Method};
use tracing::{debug, instrument};

use crate::{
    error::{HarnessError, Result},
    transport::{RequestContext, RequestSpecification, Transport, TransportResponse, sealed},
};

/// Timeout used by [`HttpTransport::new`].
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Validates header name and value for CRLF injection prevention.
fn validate_header(name: &str, value: &str) -> Result<()> {
    if name.contains(['\r', '\n', '\0']) {
        return Err(HarnessError::InvalidInput(format!(
            "invalid header name {name:?}: control characters not allowed"
        )));
    }
    if value.contains(['\r', '\n', '\0']) {
        return Err(HarnessError::InvalidInput(format!(
            "invalid value for header {name}: control characters not allowed"
        )));
    }
    Ok(())
}

/// HTTP/1.1 and HTTP/2 transport using reqwest.
///
/// Supports automatic connection pooling and keep-alive. The response status
/// is passed through untouched: a 404 or 500 is returned, not raised.
///
/// # Examples
///
/// ```rust,no_run
/// use dif_api_harness::transport::{
///     HttpTransport, RequestContext, RequestSpecification, Transport, TransportConfig,
/// };
/// use url::Url;
///
/// # async fn example() -> dif_api_harness::error::Result<()> {
/// let spec = RequestSpecification::from_config(&TransportConfig::default())?;
/// let transport = HttpTransport::with_spec(&spec)?;
///
/// let url = Url::parse("http://localhost:5000/api/distributors").unwrap();
/// let response = transport.get(RequestContext::new(&url, &spec)).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl sealed::private::Sealed for HttpTransport {}

impl HttpTransport {
    /// Creates a new HTTP transport with a 30 second timeout.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client creation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use dif_api_harness::transport::HttpTransport;
    ///
    /// let transport = HttpTransport::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates HTTP transport honouring the timeout of `spec`.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client creation fails.
    pub fn with_spec(spec: &RequestSpecification) -> Result<Self> {
        Self::with_timeout(spec.timeout)
    }

    fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Internal method to execute one HTTP round trip.
    #[instrument(skip(self, ctx, method, body), fields(method = %method, url = %ctx.url))]
    async fn execute_request(
        &self,
        ctx: RequestContext<'_>,
        method: Method,
        body: Option<&[u8]>,
    ) -> Result<TransportResponse> {
        let mut request = self.client.request(method, ctx.url.clone());

        for (key, value) in ctx.headers {
            validate_header(key, value)?;
            request = request.header(key, value);
        }

        if let Some(body) = body {
            request = request.body(body.to_vec());
        }

        let response = request.send().await?;

        let status = response.status().as_u16();

        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_owned()))
            .collect();

        let response_body = response.bytes().await?.to_vec();

        debug!(status, bytes = response_body.len(), "response received");

        Ok(TransportResponse::new(status, response_body, headers))
    }
}

impl Transport for HttpTransport {
    async fn get<'a>(&'a self, ctx: RequestContext<'a>) -> Result<TransportResponse> {
        self.execute_request(ctx, Method::GET, None).await
    }

    async fn post<'a>(
        &'a self,
        ctx: RequestContext<'a>,
        body: &'a [u8],
    ) -> Result<TransportResponse> {
        self.execute_request(ctx, Method::POST, Some(body)).await
    }

    async fn put<'a>(
        &'a self,
        ctx: RequestContext<'a>,
        body: &'a [u8],
    ) -> Result<TransportResponse> {
        self.execute_request(ctx, Method::PUT, Some(body)).await
    }

    async fn delete<'a>(&'a self, ctx: RequestContext<'a>) -> Result<TransportResponse> {
        self.execute_request(ctx, Method::DELETE, None).await
    }

    fn protocol_name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;
    use crate::transport::TransportConfig;

    #[test]
    fn test_http_transport_new() {
        let transport = HttpTransport::new();
        assert!(transport.is_ok());
        assert_eq!(transport.unwrap().protocol_name(), "http");
    }

    #[test]
    fn test_http_transport_with_spec() {
        let config = TransportConfig { timeout_ms: 500, ..Default::default() };
        let spec = RequestSpecification::from_config(&config).unwrap();
        assert!(HttpTransport::with_spec(&spec).is_ok());
    }

    #[test]
    fn test_validate_header_valid() {
        assert!(validate_header("Accept", "application/json").is_ok());
    }

    #[test]
    fn test_validate_header_crlf_in_value() {
        let result = validate_header("X-Test", "value\r\nInjected: yes");
        assert!(matches!(result, Err(HarnessError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_header_newline_in_name() {
        let result = validate_header("X-\nTest", "value");
        assert!(matches!(result, Err(HarnessError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let config = TransportConfig { timeout_ms: 2000, ..Default::default() };
        let spec = RequestSpecification::from_config(&config).unwrap();
        let transport = HttpTransport::with_spec(&spec).unwrap();

        // Port 9 (discard) is closed on test hosts.
        let url = Url::parse("http://127.0.0.1:9/api/health").unwrap();
        let result = transport.get(RequestContext::new(&url, &spec)).await;

        assert!(result.unwrap_err().is_transport());
    }

    #[tokio::test]
    async fn test_header_injection_rejected_before_send() {
        let spec = RequestSpecification::from_config(&TransportConfig::default()).unwrap();
        let transport = HttpTransport::with_spec(&spec).unwrap();
        let url = Url::parse("http://127.0.0.1:9/api/health").unwrap();
        let headers = vec![("X-Bad".to_owned(), "a\r\nb".to_owned())];

        let result = transport.get(RequestContext { url: &url, headers: &headers }).await;
        assert!(matches!(result, Err(HarnessError::InvalidInput(_))));
    }
}

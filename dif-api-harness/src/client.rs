//! Generic HTTP client.
//!
//! [`ApiClient`] turns a path template, positional path parameters, query
//! parameters and an optional JSON body into exactly one transport round
//! trip. It never inspects the response: 4xx and 5xx statuses come back as
//! ordinary [`TransportResponse`]s.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use url::Url;

use crate::{
    error::{HarnessError, Result},
    transport::{
        HttpTransport, QueryParams, RequestContext, RequestSpecification, Transport,
        TransportConfig, TransportResponse,
        path::{build_url, expand_path},
    },
};

/// HTTP client bound to one base URL.
///
/// Cloning is cheap: the request specification and transport are shared.
///
/// # Examples
///
/// ```rust,no_run
/// use dif_api_harness::{client::ApiClient, transport::TransportConfig};
///
/// # async fn example() -> dif_api_harness::error::Result<()> {
/// let client = ApiClient::new(&TransportConfig::default())?;
/// let response = client.get("/api/distributors/{id}", &["ss"]).await?;
/// assert_eq!(response.status, 200);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ApiClient<T = HttpTransport> {
    spec: Arc<RequestSpecification>,
    transport: Arc<T>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self { spec: Arc::clone(&self.spec), transport: Arc::clone(&self.transport) }
    }
}

impl ApiClient<HttpTransport> {
    /// Creates a client backed by reqwest.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let spec = RequestSpecification::from_config(config)?;
        let transport = HttpTransport::with_spec(&spec)?;
        Ok(Self::with_transport(spec, transport))
    }
}

impl<T: Transport> ApiClient<T> {
    /// Creates a client over an explicit transport.
    #[must_use]
    pub fn with_transport(spec: RequestSpecification, transport: T) -> Self {
        Self { spec: Arc::new(spec), transport: Arc::new(transport) }
    }

    /// Returns the shared request specification.
    #[must_use]
    pub fn spec(&self) -> &RequestSpecification {
        &self.spec
    }

    /// Returns the transport's protocol name, as recorded in request logs.
    #[must_use]
    pub fn protocol(&self) -> &'static str {
        self.transport.protocol_name()
    }

    /// Builds the absolute URL for a path template.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidInput`] on a placeholder/parameter count
    /// mismatch.
    pub fn url(&self, path: &str, params: &[&str], query: &QueryParams) -> Result<Url> {
        build_url(&self.spec.base_url, &expand_path(path, params)?, query)
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns error if the URL cannot be built or the round trip fails.
    pub async fn get(&self, path: &str, params: &[&str]) -> Result<TransportResponse> {
        self.get_with_query(path, params, &QueryParams::new()).await
    }

    /// Sends a GET request with query parameters.
    ///
    /// # Errors
    ///
    /// Returns error if the URL cannot be built or the round trip fails.
    pub async fn get_with_query(
        &self,
        path: &str,
        params: &[&str],
        query: &QueryParams,
    ) -> Result<TransportResponse> {
        let url = self.url(path, params, query)?;
        self.log_request("GET", &url, None);
        let response = self.transport.get(RequestContext::new(&url, &self.spec)).await?;
        self.log_response("GET", &url, &response);
        Ok(response)
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded, the URL cannot be built
    /// or the round trip fails.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        params: &[&str],
    ) -> Result<TransportResponse> {
        let url = self.url(path, params, &QueryParams::new())?;
        let body = encode_body(body)?;
        self.log_request("POST", &url, Some(&body));
        let response = self.transport.post(RequestContext::new(&url, &self.spec), &body).await?;
        self.log_response("POST", &url, &response);
        Ok(response)
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded, the URL cannot be built
    /// or the round trip fails.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        params: &[&str],
    ) -> Result<TransportResponse> {
        let url = self.url(path, params, &QueryParams::new())?;
        let body = encode_body(body)?;
        self.log_request("PUT", &url, Some(&body));
        let response = self.transport.put(RequestContext::new(&url, &self.spec), &body).await?;
        self.log_response("PUT", &url, &response);
        Ok(response)
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns error if the URL cannot be built or the round trip fails.
    pub async fn delete(&self, path: &str, params: &[&str]) -> Result<TransportResponse> {
        let url = self.url(path, params, &QueryParams::new())?;
        self.log_request("DELETE", &url, None);
        let response = self.transport.delete(RequestContext::new(&url, &self.spec)).await?;
        self.log_response("DELETE", &url, &response);
        Ok(response)
    }

    fn log_request(&self, method: &str, url: &Url, body: Option<&[u8]>) {
        if !self.spec.log_requests {
            return;
        }
        let protocol = self.protocol();
        match body {
            Some(body) => {
                let body = String::from_utf8_lossy(body);
                info!(protocol, method, %url, %body, "sending request");
            }
            None => info!(protocol, method, %url, "sending request"),
        }
    }

    fn log_response(&self, method: &str, url: &Url, response: &TransportResponse) {
        if self.spec.log_responses && !response.is_success() {
            warn!(
                protocol = self.protocol(),
                method,
                %url,
                status = response.status,
                body = %response.text(),
                "request returned non-success status"
            );
        }
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(|e| HarnessError::Serialization(e.to_string()))
}

//! Health and error-statistics endpoints.

use crate::{
    client::ApiClient,
    error::Result,
    transport::{HttpTransport, QueryParams, Transport, TransportResponse},
};

const HEALTH_PATH: &str = "/api/health";
const PING_PATH: &str = "/api/health/ping";
const DISTRIBUTOR_HEALTH_PATH: &str = "/api/health/distributors";
const ERRORS_PATH: &str = "/api/health/errors";
const RECENT_ERRORS_PATH: &str = "/api/health/errors/recent";

/// Client for `/api/health`.
#[derive(Debug, Clone)]
pub struct HealthClient<T = HttpTransport> {
    client: ApiClient<T>,
}

impl<T: Transport> HealthClient<T> {
    /// Creates the client.
    #[must_use]
    pub const fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    /// `GET /api/health`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_health(&self) -> Result<TransportResponse> {
        self.client.get(HEALTH_PATH, &[]).await
    }

    /// `GET /api/health/ping`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn ping(&self) -> Result<TransportResponse> {
        self.client.get(PING_PATH, &[]).await
    }

    /// `GET /api/health/distributors`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_distributor_health(&self) -> Result<TransportResponse> {
        self.client.get(DISTRIBUTOR_HEALTH_PATH, &[]).await
    }

    /// `GET /api/health/errors` over the server's default window.
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_error_stats(&self) -> Result<TransportResponse> {
        self.client.get(ERRORS_PATH, &[]).await
    }

    /// `GET /api/health/errors?hours={hours}`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_error_stats_for_hours(&self, hours: u32) -> Result<TransportResponse> {
        let mut query = QueryParams::new();
        query.push("hours", hours);
        self.client.get_with_query(ERRORS_PATH, &[], &query).await
    }

    /// `GET /api/health/errors/recent`, with each filter sent only when given.
    ///
    /// With no filters the request carries no query string at all.
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_recent_errors(
        &self,
        distributor_id: Option<&str>,
        severity: Option<&str>,
        hours: Option<u32>,
    ) -> Result<TransportResponse> {
        let mut query = QueryParams::new();
        query
            .push_opt("distributorId", distributor_id)
            .push_opt("severity", severity)
            .push_opt("hours", hours);
        self.client.get_with_query(RECENT_ERRORS_PATH, &[], &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::recording_client;

    #[tokio::test]
    async fn test_health_paths() {
        let (client, transport) = recording_client();
        let health = HealthClient::new(client);

        health.get_health().await.unwrap();
        health.ping().await.unwrap();
        health.get_distributor_health().await.unwrap();
        health.get_error_stats().await.unwrap();

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec![
            "http://localhost:5000/api/health",
            "http://localhost:5000/api/health/ping",
            "http://localhost:5000/api/health/distributors",
            "http://localhost:5000/api/health/errors",
        ]);
    }

    #[tokio::test]
    async fn test_error_stats_for_hours() {
        let (client, transport) = recording_client();
        let health = HealthClient::new(client);

        health.get_error_stats_for_hours(48).await.unwrap();

        assert_eq!(transport.last().url, "http://localhost:5000/api/health/errors?hours=48");
    }

    #[tokio::test]
    async fn test_recent_errors_without_filters() {
        let (client, transport) = recording_client();
        let health = HealthClient::new(client);

        health.get_recent_errors(None, None, None).await.unwrap();

        assert_eq!(transport.last().url, "http://localhost:5000/api/health/errors/recent");
    }

    #[tokio::test]
    async fn test_recent_errors_partial_filters() {
        let (client, transport) = recording_client();
        let health = HealthClient::new(client);

        health.get_recent_errors(None, Some("Critical"), None).await.unwrap();
        health.get_recent_errors(Some("ss"), None, Some(6)).await.unwrap();

        let requests = transport.requests();
        assert_eq!(
            requests[0].url,
            "http://localhost:5000/api/health/errors/recent?severity=Critical"
        );
        assert_eq!(
            requests[1].url,
            "http://localhost:5000/api/health/errors/recent?distributorId=ss&hours=6"
        );
    }
}

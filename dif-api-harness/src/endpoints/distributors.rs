//! Distributor endpoints.

use crate::{
    client::ApiClient,
    error::Result,
    models::ShippingEstimateRequest,
    transport::{HttpTransport, Transport, TransportResponse},
};

const DISTRIBUTORS_PATH: &str = "/api/distributors";
const DISTRIBUTOR_PATH: &str = "/api/distributors/{id}";
const WAREHOUSES_PATH: &str = "/api/distributors/{id}/warehouses";
const SHIPPING_OPTIONS_PATH: &str = "/api/distributors/{id}/shipping-options";
const RATE_LIMIT_STATUS_PATH: &str = "/api/distributors/{id}/rate-limit-status";
const SHIPPING_ESTIMATE_PATH: &str = "/api/distributors/{id}/shipping-estimate";

/// Client for `/api/distributors`.
#[derive(Debug, Clone)]
pub struct DistributorsClient<T = HttpTransport> {
    client: ApiClient<T>,
}

impl<T: Transport> DistributorsClient<T> {
    /// Creates the client.
    #[must_use]
    pub const fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    /// `GET /api/distributors`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn list_distributors(&self) -> Result<TransportResponse> {
        self.client.get(DISTRIBUTORS_PATH, &[]).await
    }

    /// `GET /api/distributors/{id}`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_distributor(&self, distributor_id: &str) -> Result<TransportResponse> {
        self.client.get(DISTRIBUTOR_PATH, &[distributor_id]).await
    }

    /// `GET /api/distributors/{id}/warehouses`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_warehouses(&self, distributor_id: &str) -> Result<TransportResponse> {
        self.client.get(WAREHOUSES_PATH, &[distributor_id]).await
    }

    /// `GET /api/distributors/{id}/shipping-options`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_shipping_options(&self, distributor_id: &str) -> Result<TransportResponse> {
        self.client.get(SHIPPING_OPTIONS_PATH, &[distributor_id]).await
    }

    /// `GET /api/distributors/{id}/rate-limit-status`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_rate_limit_status(&self, distributor_id: &str) -> Result<TransportResponse> {
        self.client.get(RATE_LIMIT_STATUS_PATH, &[distributor_id]).await
    }

    /// `POST /api/distributors/{id}/shipping-estimate`
    ///
    /// The body is sent as given; its own `distributorId` is not reconciled
    /// with the path.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the round trip fails.
    pub async fn get_shipping_estimate(
        &self,
        distributor_id: &str,
        request: &ShippingEstimateRequest,
    ) -> Result<TransportResponse> {
        self.client.post(SHIPPING_ESTIMATE_PATH, request, &[distributor_id]).await
    }
}

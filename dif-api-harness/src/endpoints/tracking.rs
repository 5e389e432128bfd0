//! Shipment tracking endpoints.

use crate::{
    client::ApiClient,
    error::Result,
    models::TrackingUpdateRequest,
    transport::{HttpTransport, Transport, TransportResponse},
};

const TRACKING_BY_ORDER_PATH: &str = "/api/tracking/{orderId}";
const ALL_TRACKING_PATH: &str = "/api/tracking/{orderId}/all";
const TRACKING_BY_NUMBER_PATH: &str = "/api/tracking/shipment/{trackingNumber}";
const TRACKING_UPDATE_PATH: &str = "/api/tracking/update";
const DELIVERY_CONFIRMATION_PATH: &str = "/api/tracking/{orderId}/delivery-confirmation";
const PENDING_PATH: &str = "/api/tracking/pending";
const MISSHIPMENTS_PATH: &str = "/api/tracking/misshipments";

/// Client for `/api/tracking`.
#[derive(Debug, Clone)]
pub struct TrackingClient<T = HttpTransport> {
    client: ApiClient<T>,
}

impl<T: Transport> TrackingClient<T> {
    /// Creates the client.
    #[must_use]
    pub const fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    /// `GET /api/tracking/{orderId}`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_tracking_by_order_id(&self, order_id: &str) -> Result<TransportResponse> {
        self.client.get(TRACKING_BY_ORDER_PATH, &[order_id]).await
    }

    /// `GET /api/tracking/{orderId}/all`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_all_tracking_for_order(&self, order_id: &str) -> Result<TransportResponse> {
        self.client.get(ALL_TRACKING_PATH, &[order_id]).await
    }

    /// `GET /api/tracking/shipment/{trackingNumber}`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_tracking_by_number(&self, tracking_number: &str) -> Result<TransportResponse> {
        self.client.get(TRACKING_BY_NUMBER_PATH, &[tracking_number]).await
    }

    /// `POST /api/tracking/update`
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the round trip fails.
    pub async fn trigger_tracking_update(
        &self,
        request: &TrackingUpdateRequest,
    ) -> Result<TransportResponse> {
        self.client.post(TRACKING_UPDATE_PATH, request, &[]).await
    }

    /// `GET /api/tracking/{orderId}/delivery-confirmation`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_delivery_confirmation(&self, order_id: &str) -> Result<TransportResponse> {
        self.client.get(DELIVERY_CONFIRMATION_PATH, &[order_id]).await
    }

    /// `GET /api/tracking/pending`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_pending_shipments(&self) -> Result<TransportResponse> {
        self.client.get(PENDING_PATH, &[]).await
    }

    /// `GET /api/tracking/misshipments`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_misshipments(&self) -> Result<TransportResponse> {
        self.client.get(MISSHIPMENTS_PATH, &[]).await
    }
}

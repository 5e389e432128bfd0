//! Order endpoints.

use crate::{
    client::ApiClient,
    error::Result,
    models::PlaceOrderRequest,
    transport::{HttpTransport, QueryParams, Transport, TransportResponse},
};

const ORDERS_PATH: &str = "/api/orders";
const ORDER_PATH: &str = "/api/orders/{orderId}";
const ORDER_COSTS_PATH: &str = "/api/orders/{orderId}/costs";
const ORDER_BY_DISTRIBUTOR_ID_PATH: &str = "/api/orders/by-distributor-id/{distributorOrderId}";

/// Filters for `GET /api/orders`. Unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderListQuery {
    /// Only orders for this distributor.
    pub distributor_id: Option<String>,
    /// Only orders in this status.
    pub status: Option<String>,
    /// One-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub page_size: Option<u32>,
}

impl OrderListQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("distributorId", self.distributor_id.as_deref())
            .push_opt("status", self.status.as_deref())
            .push_opt("page", self.page)
            .push_opt("pageSize", self.page_size);
        query
    }
}

/// Client for `/api/orders`.
#[derive(Debug, Clone)]
pub struct OrdersClient<T = HttpTransport> {
    client: ApiClient<T>,
}

impl<T: Transport> OrdersClient<T> {
    /// Creates the client.
    #[must_use]
    pub const fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    /// `POST /api/orders`
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the round trip fails.
    pub async fn place_order(&self, request: &PlaceOrderRequest) -> Result<TransportResponse> {
        self.client.post(ORDERS_PATH, request, &[]).await
    }

    /// `GET /api/orders` with server-side defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn list_orders(&self) -> Result<TransportResponse> {
        self.client.get(ORDERS_PATH, &[]).await
    }

    /// `GET /api/orders` with filters.
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn list_orders_with(&self, filter: &OrderListQuery) -> Result<TransportResponse> {
        self.client.get_with_query(ORDERS_PATH, &[], &filter.to_query()).await
    }

    /// `GET /api/orders?page={page}&pageSize={page_size}`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn list_orders_page(&self, page: u32, page_size: u32) -> Result<TransportResponse> {
        let filter =
            OrderListQuery { page: Some(page), page_size: Some(page_size), ..Default::default() };
        self.list_orders_with(&filter).await
    }

    /// `GET /api/orders?status={status}`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn list_orders_by_status(&self, status: &str) -> Result<TransportResponse> {
        let filter = OrderListQuery { status: Some(status.to_owned()), ..Default::default() };
        self.list_orders_with(&filter).await
    }

    /// `GET /api/orders/{orderId}`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_order(&self, order_id: &str) -> Result<TransportResponse> {
        self.client.get(ORDER_PATH, &[order_id]).await
    }

    /// `GET /api/orders/{orderId}/costs`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_order_costs(&self, order_id: &str) -> Result<TransportResponse> {
        self.client.get(ORDER_COSTS_PATH, &[order_id]).await
    }

    /// `GET /api/orders/by-distributor-id/{distributorOrderId}`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_order_by_distributor_id(
        &self,
        distributor_order_id: &str,
    ) -> Result<TransportResponse> {
        self.client.get(ORDER_BY_DISTRIBUTOR_ID_PATH, &[distributor_order_id]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_data, transport::testing::recording_client};

    #[tokio::test]
    async fn test_place_order_posts_request() {
        let (client, transport) = recording_client();
        let orders = OrdersClient::new(client);
        let request = test_data::valid_order_request();

        orders.place_order(&request).await.unwrap();

        let recorded = transport.last();
        assert_eq!(recorded.method, "POST");
        assert_eq!(recorded.url, "http://localhost:5000/api/orders");
        assert_eq!(recorded.body_json(), serde_json::to_value(&request).unwrap());
    }

    #[tokio::test]
    async fn test_place_order_with_empty_lines_is_sent() {
        let (client, transport) = recording_client();
        transport.reply(400, r#"{"success":false,"errors":["lines required"]}"#);
        let orders = OrdersClient::new(client);
        let request = PlaceOrderRequest::builder().build();

        let response = orders.place_order(&request).await.unwrap();

        assert_eq!(response.status, 400);
        assert_eq!(transport.last().body_json()["lines"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_order_paths() {
        let (client, transport) = recording_client();
        let orders = OrdersClient::new(client);

        orders.get_order("o-1").await.unwrap();
        orders.get_order_costs("o-1").await.unwrap();
        orders.get_order_by_distributor_id("SS-778").await.unwrap();

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec![
            "http://localhost:5000/api/orders/o-1",
            "http://localhost:5000/api/orders/o-1/costs",
            "http://localhost:5000/api/orders/by-distributor-id/SS-778",
        ]);
    }

    #[tokio::test]
    async fn test_list_orders_variants() {
        let (client, transport) = recording_client();
        let orders = OrdersClient::new(client);

        orders.list_orders().await.unwrap();
        orders.list_orders_page(2, 25).await.unwrap();
        orders.list_orders_by_status("Shipped").await.unwrap();
        orders.list_orders_with(&OrderListQuery::default()).await.unwrap();

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec![
            "http://localhost:5000/api/orders",
            "http://localhost:5000/api/orders?page=2&pageSize=25",
            "http://localhost:5000/api/orders?status=Shipped",
            "http://localhost:5000/api/orders",
        ]);
    }

    #[tokio::test]
    async fn test_list_orders_with_all_filters() {
        let (client, transport) = recording_client();
        let orders = OrdersClient::new(client);
        let filter = OrderListQuery {
            distributor_id: Some("ss".to_owned()),
            status: Some("Pending".to_owned()),
            page: Some(1),
            page_size: Some(50),
        };

        orders.list_orders_with(&filter).await.unwrap();

        assert_eq!(
            transport.last().url,
            "http://localhost:5000/api/orders?distributorId=ss&status=Pending&page=1&pageSize=50"
        );
    }

    #[tokio::test]
    async fn test_random_order_id_is_single_segment() {
        let (client, transport) = recording_client();
        let orders = OrdersClient::new(client);
        let id = test_data::random_order_id();

        orders.get_order(&id).await.unwrap();

        assert_eq!(transport.last().url, format!("http://localhost:5000/api/orders/{id}"));
    }
}

//! Endpoint clients, one per resource family.
//!
//! Each client wraps a clone of an [`ApiClient`] and maps one method to one
//! HTTP call. None of them inspect the response.
//!
//! # Examples
//!
//! ```rust,no_run
//! use dif_api_harness::{client::ApiClient, transport::TransportConfig};
//!
//! # async fn example() -> dif_api_harness::error::Result<()> {
//! let client = ApiClient::new(&TransportConfig::default())?;
//!
//! let response = client.distributors().get_warehouses("ss").await?;
//! assert_eq!(response.status, 200);
//!
//! let response = client.products().get_batch_inventory(&["G500-BLA-M"], None).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

use crate::{client::ApiClient, transport::Transport};

pub mod distributors;
pub mod health;
pub mod orders;
pub mod products;
pub mod tracking;

pub use distributors::DistributorsClient;
pub use health::HealthClient;
pub use orders::{OrderListQuery, OrdersClient};
pub use products::{ProductQuery, ProductsClient};
pub use tracking::TrackingClient;

impl<T: Transport> ApiClient<T> {
    /// Distributor endpoints sharing this client's configuration.
    #[must_use]
    pub fn distributors(&self) -> DistributorsClient<T> {
        DistributorsClient::new(self.clone())
    }

    /// Product endpoints sharing this client's configuration.
    #[must_use]
    pub fn products(&self) -> ProductsClient<T> {
        ProductsClient::new(self.clone())
    }

    /// Order endpoints sharing this client's configuration.
    #[must_use]
    pub fn orders(&self) -> OrdersClient<T> {
        OrdersClient::new(self.clone())
    }

    /// Tracking endpoints sharing this client's configuration.
    #[must_use]
    pub fn tracking(&self) -> TrackingClient<T> {
        TrackingClient::new(self.clone())
    }

    /// Health endpoints sharing this client's configuration.
    #[must_use]
    pub fn health(&self) -> HealthClient<T> {
        HealthClient::new(self.clone())
    }
}

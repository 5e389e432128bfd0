//! Flat, column-oriented views of order responses.
//!
//! Tests that used to query the order store directly can assert on these
//! records instead: one record per order, one per cost breakdown, one per
//! order line. Money columns are exact decimals.
//!
//! A non-200 response means "no rows" and yields `Ok(None)`. A transport
//! failure is still an error, so an unreachable API never looks like a
//! missing order.
//!
//! # Examples
//!
//! ```rust,no_run
//! use dif_api_harness::{ApiClient, TransportConfig, projection::OrderProjector};
//!
//! # async fn example() -> dif_api_harness::error::Result<()> {
//! let client = ApiClient::new(&TransportConfig::default())?;
//! let projector = OrderProjector::from_client(&client);
//!
//! if let Some(order) = projector.project_order("o-1").await? {
//!     println!("total = {}", order.get("total").map(ToString::to_string).unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

mod columns;
mod record;

pub use columns::{
    COSTS_COLUMNS, Column, ColumnKind, LINE_COLUMNS, ORDER_COLUMNS, costs_record, line_records,
    order_record,
};
pub use record::{FieldValue, ProjectedRecord};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::{
    client::ApiClient,
    endpoints::OrdersClient,
    error::Result,
    transport::{HttpTransport, Transport, TransportResponse},
};

/// Projects order responses into [`ProjectedRecord`]s.
#[derive(Debug, Clone)]
pub struct OrderProjector<T = HttpTransport> {
    orders: OrdersClient<T>,
}

impl<T: Transport> OrderProjector<T> {
    /// Creates a projector over `orders`.
    #[must_use]
    pub const fn new(orders: OrdersClient<T>) -> Self {
        Self { orders }
    }

    /// Creates a projector sharing `client`'s configuration.
    #[must_use]
    pub fn from_client(client: &ApiClient<T>) -> Self {
        Self::new(client.orders())
    }

    /// One record for the order, or `None` if the API did not answer 200.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Transport`](crate::error::HarnessError::Transport)
    /// if the round trip fails, or
    /// [`HarnessError::DataShape`](crate::error::HarnessError::DataShape) if
    /// the body does not fit [`ORDER_COLUMNS`].
    #[instrument(skip(self))]
    pub async fn project_order(&self, order_id: &str) -> Result<Option<ProjectedRecord>> {
        info!("query: order {order_id}");
        let response = self.orders.get_order(order_id).await?;
        let Some(body) = rows_body(&response)? else {
            return Ok(None);
        };

        let record = order_record(body)?;
        info!(rows = 1, "projected order");
        Ok(Some(record))
    }

    /// One record for the order's costs, or `None` on a non-200 answer.
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails or the body does not fit
    /// [`COSTS_COLUMNS`].
    #[instrument(skip(self))]
    pub async fn project_order_costs(&self, order_id: &str) -> Result<Option<ProjectedRecord>> {
        info!("query: costs of order {order_id}");
        let response = self.orders.get_order_costs(order_id).await?;
        let Some(body) = rows_body(&response)? else {
            return Ok(None);
        };

        let record = costs_record(body)?;
        info!(rows = 1, "projected order costs");
        Ok(Some(record))
    }

    /// One record per order line in response order, or `None` on a non-200
    /// answer.
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails or any line does not fit
    /// [`LINE_COLUMNS`].
    #[instrument(skip(self))]
    pub async fn project_order_lines(
        &self,
        order_id: &str,
    ) -> Result<Option<Vec<ProjectedRecord>>> {
        info!("query: lines of order {order_id}");
        let response = self.orders.get_order(order_id).await?;
        let Some(body) = rows_body(&response)? else {
            return Ok(None);
        };

        let records = line_records(body)?;
        info!(rows = records.len(), "projected order lines");
        Ok(Some(records))
    }
}

fn rows_body(response: &TransportResponse) -> Result<Option<&Value>> {
    if response.status != 200 {
        warn!(status = response.status, "no rows returned");
        return Ok(None);
    }
    response.json().map(Some)
}

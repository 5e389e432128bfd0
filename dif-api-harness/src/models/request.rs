//! Request payloads sent to the order-distribution API.
//!
//! Field names are camelCase on the wire. Optional fields that are `None`
//! are left out of the JSON entirely.

use serde::{Deserialize, Serialize};

use crate::builders::PlaceOrderRequestBuilder;

/// Order placement payload for `POST /api/orders`.
///
/// An order with no lines is representable; rejecting it is the remote
/// API's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    /// Distributor that fulfils the order (e.g. "ss").
    pub distributor_id: String,
    /// Where the order ships to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,
    /// Distributor shipping method code.
    pub shipping_method: String,
    /// Let the distributor pick the warehouse.
    pub autoselect_warehouse: bool,
    /// Warehouses the distributor may choose from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoselect_warehouse_warehouses: Option<Vec<String>>,
    /// Purchase order number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,
    /// Address that receives the confirmation email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_confirmation: Option<String>,
    /// Mark the order as a test order.
    pub test_order: bool,
    /// Ordered items.
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    /// Payment profile; the account default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_profile: Option<PaymentProfile>,
}

impl PlaceOrderRequest {
    /// Returns a builder with the standard defaults.
    #[must_use]
    pub fn builder() -> PlaceOrderRequestBuilder {
        PlaceOrderRequestBuilder::new()
    }
}

/// A single order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// SKU or GTIN of the item.
    pub identifier: String,
    /// Quantity; not validated client-side, so zero and negative values can
    /// be sent on purpose.
    pub qty: i32,
}

impl OrderLine {
    /// Creates an order line.
    #[must_use]
    pub fn new(identifier: impl Into<String>, qty: i32) -> Self {
        Self { identifier: identifier.into(), qty }
    }
}

/// Shipping destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    /// Recipient name.
    pub customer: String,
    /// Street address.
    pub address: String,
    /// Suite, unit or floor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    /// City.
    pub city: String,
    /// State or province code.
    pub state: String,
    /// Postal code.
    pub zip: String,
    /// ISO country code.
    pub country: String,
    /// Contact phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Payment profile selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProfile {
    /// Stored profile identifier; empty when using the default.
    pub profile_id: String,
    /// Use the account's default payment method.
    pub use_default: bool,
}

impl PaymentProfile {
    /// The account's default payment method.
    #[must_use]
    pub fn account_default() -> Self {
        Self { profile_id: String::new(), use_default: true }
    }

    /// A stored payment profile.
    #[must_use]
    pub fn stored(profile_id: impl Into<String>) -> Self {
        Self { profile_id: profile_id.into(), use_default: false }
    }
}

/// Shipping quote payload for `POST /api/distributors/{id}/shipping-estimate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingEstimateRequest {
    /// Distributor to quote.
    pub distributor_id: String,
    /// Warehouse the shipment leaves from.
    pub origin_warehouse_code: String,
    /// Destination postal code.
    pub destination_zip: String,
    /// Items to ship.
    #[serde(default)]
    pub items: Vec<ShippingEstimateItem>,
    /// Shipping method to price first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_shipping_method: Option<String>,
}

/// An item in a shipping quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingEstimateItem {
    /// Item SKU.
    pub sku: String,
    /// Quantity.
    pub quantity: i32,
}

/// Tracking refresh payload for `POST /api/tracking/update`.
///
/// Every filter is optional and forwarded as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingUpdateRequest {
    /// Orders to refresh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_ids: Option<Vec<String>>,
    /// Tracking numbers to refresh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_numbers: Option<Vec<String>>,
    /// Restrict to one distributor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distributor_id: Option<String>,
    /// Restrict to shipments in these statuses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_filter: Option<Vec<String>>,
}

//! Typed response payloads.
//!
//! These mirror the `data` section of each endpoint's envelope. Every field
//! tolerates absence so that a field added to, or dropped from, the remote
//! API never breaks decoding of the others. Money is [`Decimal`];
//! timestamps stay as the ISO-8601 text the API sends.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A distributor known to the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Distributor {
    /// Distributor identifier, e.g. "ss".
    pub distributor_id: String,
    /// Display name.
    pub name: String,
    /// Short code, e.g. "SS".
    pub code: String,
    /// Base URL of the distributor's own API.
    pub api_base_url: Option<String>,
    /// Orders go through the distributor's API.
    pub has_api_integration: bool,
    /// Enabled on the platform.
    pub is_active: bool,
    /// Version of the distributor API in use.
    pub api_version: Option<String>,
    /// Last observed health, e.g. "Healthy".
    pub health_status: Option<String>,
    /// Support contact email.
    pub contact_email: Option<String>,
    /// Support contact phone.
    pub contact_phone: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Rate-limit settings, when configured.
    pub rate_limit_config: Option<RateLimitConfig>,
    /// Time of the last successful call (ISO-8601).
    pub last_successful_connection: Option<String>,
}

/// Rate-limit settings embedded in a [`Distributor`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RateLimitConfig {
    /// Owning distributor.
    pub distributor_id: String,
    /// Display name of the distributor.
    pub distributor_name: Option<String>,
    /// Allowed requests per minute.
    pub requests_per_minute: u32,
    /// Percentage of `requests_per_minute` at which the limit is "approaching".
    pub threshold_percentage: u32,
    /// Request count at which the limit is approaching.
    pub threshold_request_count: u32,
    /// Extra requests tolerated in a burst.
    pub burst_allowance: u32,
    /// Requests made in the current window.
    pub current_request_count: u32,
    /// Requests left in the current window.
    pub remaining_requests: u32,
    /// Usage has crossed the threshold.
    pub is_approaching_limit: bool,
    /// Requests are currently being rejected.
    pub is_rate_limited: bool,
}

/// Live rate-limit counters for a distributor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RateLimitStatus {
    /// Owning distributor.
    pub distributor_id: String,
    /// Display name of the distributor.
    pub distributor_name: Option<String>,
    /// Allowed requests per minute.
    pub requests_per_minute: u32,
    /// Requests made in the current window.
    pub current_request_count: u32,
    /// Requests left in the current window.
    pub remaining_requests: u32,
    /// Usage has crossed the threshold.
    pub is_approaching_limit: bool,
    /// Requests are currently being rejected.
    pub is_rate_limited: bool,
    /// Seconds until the window resets.
    pub seconds_until_reset: u32,
    /// Requests waiting in the queue.
    pub queue_depth: u32,
}

/// A distributor warehouse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Warehouse {
    /// Warehouse identifier.
    pub warehouse_id: String,
    /// Warehouse code, e.g. "IL".
    pub warehouse_code: String,
    /// Warehouse display name.
    pub warehouse_name: String,
    /// Street address.
    pub address: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or province code.
    pub state: Option<String>,
    /// Postal code.
    pub zip: Option<String>,
    /// ISO country code.
    pub country: Option<String>,
    /// Local order cutoff, e.g. "15:00".
    pub cutoff_time: Option<String>,
    /// IANA time zone of the warehouse.
    pub timezone: Option<String>,
    /// Owning distributor.
    pub distributor_id: String,
    /// Enabled on the platform.
    pub is_active: bool,
}

/// A shipping method offered by a distributor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShippingOption {
    /// Shipping option identifier.
    pub shipping_option_id: String,
    /// Shipping method code.
    pub method_code: String,
    /// Shipping method display name.
    pub method_name: String,
    /// Carrier name, e.g. "UPS".
    pub carrier: Option<String>,
    /// Business days in transit.
    pub estimated_transit_days: u32,
    /// Quoted cost.
    pub estimated_cost: Option<Decimal>,
    /// Owning distributor.
    pub distributor_id: String,
    /// Offered for this destination.
    pub is_available: bool,
    /// Free-text description.
    pub description: Option<String>,
}

/// A shipping quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShippingEstimate {
    /// Owning distributor.
    pub distributor_id: String,
    /// Origin warehouse code.
    pub warehouse_code: String,
    /// Destination postal code.
    pub destination_zip: String,
    /// Priced methods, cheapest first as returned.
    pub options: Vec<ShippingOptionEstimate>,
    /// When the quote was made (ISO-8601).
    pub estimated_at: Option<String>,
}

/// One priced method within a [`ShippingEstimate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShippingOptionEstimate {
    /// Shipping method code.
    pub method_code: String,
    /// Shipping method display name.
    pub method_name: String,
    /// Carrier name, e.g. "UPS".
    pub carrier: Option<String>,
    /// Quoted cost.
    pub estimated_cost: Decimal,
    /// Business days in transit.
    pub estimated_transit_days: u32,
    /// Expected delivery date (ISO-8601).
    pub estimated_delivery_date: Option<String>,
}

/// A catalog product (one SKU).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    /// Product identifier.
    pub product_id: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Style code, e.g. "G500".
    pub style_code: Option<String>,
    /// Style display name.
    pub style_name: Option<String>,
    /// Brand name.
    pub brand_name: Option<String>,
    /// Barcode.
    pub gtin: Option<String>,
    /// Color name.
    pub color: Option<String>,
    /// Distributor color code.
    pub color_code: Option<String>,
    /// Size label.
    pub size: Option<String>,
    /// Distributor size code.
    pub size_code: Option<String>,
    /// Product image.
    pub image_url: Option<String>,
    /// Cost of the undecorated garment.
    pub blank_cost: Option<Decimal>,
    /// Suggested retail price.
    pub msrp: Option<Decimal>,
    /// Free-text description.
    pub description: Option<String>,
    /// Catalog category.
    pub category: Option<String>,
    /// Unit weight in pounds.
    pub weight: Option<Decimal>,
    /// Owning distributor.
    pub distributor_id: String,
    /// Enabled on the platform.
    pub is_active: bool,
    /// No longer sold.
    pub is_discontinued: bool,
    /// Last change (ISO-8601).
    pub last_updated: Option<String>,
}

/// Stock of one SKU in one warehouse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InventoryStock {
    /// Stock record identifier.
    pub stock_id: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Warehouse code, e.g. "IL".
    pub warehouse_code: String,
    /// Warehouse display name.
    pub warehouse_name: Option<String>,
    /// Units that can be ordered.
    pub quantity_available: u32,
    /// Units held for open orders.
    pub quantity_reserved: u32,
    /// Units on backorder.
    pub quantity_on_backorder: u32,
    /// At least one unit is available.
    pub in_stock: bool,
    /// Expected restock date (ISO-8601).
    pub expected_restock_date: Option<String>,
    /// Owning distributor.
    pub distributor_id: String,
    /// Last change (ISO-8601).
    pub last_updated: Option<String>,
}

/// Result of placing an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderResponse {
    /// Platform order identifier.
    pub order_id: String,
    /// Order number assigned by the distributor.
    pub distributor_order_id: Option<String>,
    /// Purchase order number.
    pub po_number: Option<String>,
    /// Free text; the remote API is not consistent about the initial value.
    pub status: String,
    /// Warehouse code, e.g. "IL".
    pub warehouse_code: Option<String>,
    /// Warehouse display name.
    pub warehouse_name: Option<String>,
    /// Expected delivery date (ISO-8601).
    pub expected_delivery_date: Option<String>,
    /// When the order was placed (ISO-8601).
    pub order_timestamp: Option<String>,
    /// Cost breakdown, once priced.
    pub costs: Option<OrderCosts>,
}

/// Full order as returned by `GET /api/orders/{orderId}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderDetail {
    /// Platform order identifier.
    pub order_id: String,
    /// Order number assigned by the distributor.
    pub distributor_order_id: Option<String>,
    /// Purchase order number.
    pub po_number: Option<String>,
    /// Owning distributor.
    pub distributor_id: String,
    /// Ordered lines.
    pub lines: Vec<OrderLineDetail>,
    /// Destination as stored.
    pub shipping_address: Option<ShippingAddressResponse>,
    /// Shipping method code.
    pub shipping_method: Option<String>,
    /// Warehouse code, e.g. "IL".
    pub warehouse_code: Option<String>,
    /// Warehouse display name.
    pub warehouse_name: Option<String>,
    /// When the order was placed (ISO-8601).
    pub order_timestamp: Option<String>,
    /// Expected delivery date (ISO-8601).
    pub expected_delivery_date: Option<String>,
    /// Order status.
    pub status: String,
    /// Lines may ship from different warehouses.
    pub split_ship_enabled: bool,
    /// Carrier handling the shipment.
    pub shipping_carrier: Option<String>,
    /// Boxes shipped.
    pub total_boxes: u32,
    /// Shipped weight in pounds.
    pub total_weight: Option<Decimal>,
    /// Carrier tracking number.
    pub tracking_number: Option<String>,
    /// Ship date (ISO-8601).
    pub ship_date: Option<String>,
    /// Latest delivery status.
    pub delivery_status: Option<String>,
    /// Cost breakdown, once priced.
    pub costs: Option<OrderCosts>,
}

/// One line of an [`OrderDetail`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderLineDetail {
    /// Stock keeping unit.
    pub sku: String,
    /// Barcode.
    pub gtin: Option<String>,
    /// Units ordered.
    pub quantity: i32,
    /// Units shipped so far.
    pub quantity_shipped: i32,
    /// Unit price.
    pub price: Decimal,
    /// Price times quantity.
    pub line_total: Decimal,
    /// Style code, e.g. "G500".
    pub style_code: Option<String>,
    /// Color name.
    pub color: Option<String>,
    /// Size label.
    pub size: Option<String>,
}

/// Order row in a paginated order list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderSummary {
    /// Platform order identifier.
    pub order_id: String,
    /// Order number assigned by the distributor.
    pub distributor_order_id: Option<String>,
    /// Purchase order number.
    pub po_number: Option<String>,
    /// Owning distributor.
    pub distributor_id: String,
    /// Order status.
    pub status: String,
    /// Warehouse code, e.g. "IL".
    pub warehouse_code: Option<String>,
    /// Warehouse display name.
    pub warehouse_name: Option<String>,
    /// When the order was placed (ISO-8601).
    pub order_timestamp: Option<String>,
    /// Expected delivery date (ISO-8601).
    pub expected_delivery_date: Option<String>,
    /// Carrier handling the shipment.
    pub shipping_carrier: Option<String>,
    /// Carrier tracking number.
    pub tracking_number: Option<String>,
    /// Boxes shipped.
    pub total_boxes: u32,
    /// Shipped weight in pounds.
    pub total_weight: Option<Decimal>,
}

/// Cost breakdown of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderCosts {
    /// Order item the record belongs to.
    pub order_item_id: Option<String>,
    /// Sum of line totals.
    pub subtotal: Decimal,
    /// Shipping charge.
    pub shipping: Decimal,
    /// Null until tax has been calculated.
    pub tax: Option<Decimal>,
    /// Charged when the order is below the distributor's minimum.
    pub small_order_fee: Option<Decimal>,
    /// Amount charged.
    pub total: Decimal,
    /// Blank garment cost keyed by SKU.
    pub blank_cost_per_sku: BTreeMap<String, Decimal>,
    /// Payment method used.
    pub payment_method: Option<String>,
    /// Warehouse that fulfils the order.
    pub warehouse_id: Option<String>,
    /// Order cutoff that applied (ISO-8601).
    pub cutoff_datetime: Option<String>,
    /// Extra charges.
    pub surcharges: Vec<Surcharge>,
}

/// Extra charge on an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Surcharge {
    /// Surcharge type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Charged amount.
    pub amount: Decimal,
    /// What the charge is for.
    pub description: Option<String>,
}

/// Shipping address echoed back on an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShippingAddressResponse {
    /// Recipient name.
    pub customer: String,
    /// Street address.
    pub address: String,
    /// Suite, unit or floor.
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
    pub phone: Option<String>,
}

/// Current tracking state of a shipment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackingInfo {
    /// Shipment identifier.
    pub shipment_id: String,
    /// Platform order identifier.
    pub order_id: String,
    /// Carrier tracking number.
    pub tracking_number: String,
    /// Carrier tracking page.
    pub tracking_url: Option<String>,
    /// Carrier name, e.g. "UPS".
    pub carrier: Option<String>,
    /// Latest tracking status.
    pub current_status: String,
    /// Ship date (ISO-8601).
    pub ship_date: Option<String>,
    /// Expected delivery (ISO-8601).
    pub estimated_delivery: Option<String>,
    /// Delivery time, once delivered (ISO-8601).
    pub actual_delivery_date: Option<String>,
    /// Boxes in the shipment.
    pub num_boxes: u32,
    /// Shipped weight in pounds.
    pub total_weight: Option<Decimal>,
    /// Warehouse the shipment left from.
    pub origin_warehouse: Option<String>,
    /// Destination summary.
    pub destination: Option<String>,
    /// Which leg of a split shipment this is.
    pub leg_type: Option<String>,
    /// Last change (ISO-8601).
    pub last_updated: Option<String>,
}

/// Full shipment history, as returned for a tracking number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackingDetail {
    /// Shipment identifier.
    pub shipment_id: String,
    /// Platform order identifier.
    pub order_id: String,
    /// Order item the record belongs to.
    pub order_item_id: Option<String>,
    /// Purchase order number.
    pub purchase_order_number: Option<String>,
    /// Carrier tracking number.
    pub tracking_number: String,
    /// Carrier tracking page.
    pub tracking_url: Option<String>,
    /// Carrier name, e.g. "UPS".
    pub carrier: Option<String>,
    /// Shipping type, e.g. ground.
    pub shipping_type: Option<String>,
    /// Which leg of a split shipment this is.
    pub leg_type: Option<String>,
    /// Boxes in the shipment.
    pub num_boxes: u32,
    /// Shipped weight in pounds.
    pub total_weight: Option<Decimal>,
    /// Ship date (ISO-8601).
    pub ship_date: Option<String>,
    /// Expected delivery (ISO-8601).
    pub estimated_delivery: Option<String>,
    /// Delivery time, once delivered (ISO-8601).
    pub actual_delivery_date: Option<String>,
    /// Origin postal code.
    pub origin_warehouse_zip: Option<String>,
    /// Origin address.
    pub origin_warehouse_address: Option<String>,
    /// Destination postal code.
    pub destination_printer_zip: Option<String>,
    /// Destination address.
    pub destination_printer_address: Option<String>,
    /// Latest tracking status.
    pub current_status: String,
    /// Status events, oldest first.
    pub status_history: Vec<TrackingStatusEvent>,
    /// Delivery has been confirmed.
    pub delivery_confirmed: bool,
    /// Delivered boxes or weight differ from what shipped.
    pub misshipment_flag: bool,
    /// Boxes delivered.
    pub boxes_delivered: Option<u32>,
    /// Delivered weight in pounds.
    pub weight_delivered: Option<Decimal>,
    /// Name on the delivery signature.
    pub delivery_signature: Option<String>,
    /// Last change (ISO-8601).
    pub last_updated: Option<String>,
    /// Last scanned location.
    pub current_location: Option<String>,
    /// Owning distributor.
    pub distributor_id: Option<String>,
    /// Order number assigned by the distributor.
    pub distributor_order_id: Option<String>,
}

/// One entry in a shipment's status history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackingStatusEvent {
    /// Tracking status.
    pub status: String,
    /// Event time (ISO-8601).
    pub timestamp: Option<String>,
    /// Where the event happened.
    pub location: Option<String>,
    /// Carrier description of the event.
    pub description: Option<String>,
}

/// Short form of a shipment, used in lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackingSummary {
    /// Shipment identifier.
    pub shipment_id: String,
    /// Platform order identifier.
    pub order_id: String,
    /// Carrier tracking number.
    pub tracking_number: String,
    /// Carrier name, e.g. "UPS".
    pub carrier: Option<String>,
    /// Latest tracking status.
    pub current_status: String,
    /// Which leg of a split shipment this is.
    pub leg_type: Option<String>,
    /// Expected delivery (ISO-8601).
    pub estimated_delivery: Option<String>,
}

/// Result of a tracking refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackingUpdateResponse {
    /// Shipments refreshed.
    pub shipments_updated: u32,
    /// When the refresh ran (ISO-8601).
    pub updated_at: Option<String>,
}

/// Delivery proof for an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeliveryConfirmation {
    /// Shipment identifier.
    pub shipment_id: String,
    /// Delivery time (ISO-8601).
    pub delivery_date_time: Option<String>,
    /// Boxes delivered.
    pub boxes_delivered: u32,
    /// Delivered weight in pounds.
    pub weight_delivered: Option<Decimal>,
    /// Where the shipment was left.
    pub delivery_location: Option<String>,
    /// Name of the signer.
    pub signed_by: Option<String>,
    /// Delivered box count differs from shipped.
    pub box_count_mismatch: bool,
    /// Delivered weight differs from shipped.
    pub weight_mismatch: bool,
    /// Boxes shipped.
    pub expected_boxes: u32,
    /// Weight shipped.
    pub expected_weight: Option<Decimal>,
}

/// A shipment not yet delivered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PendingShipment {
    /// Shipment identifier.
    pub shipment_id: String,
    /// Platform order identifier.
    pub order_id: String,
    /// Carrier tracking number.
    pub tracking_number: String,
    /// Carrier name, e.g. "UPS".
    pub carrier: Option<String>,
    /// Latest tracking status.
    pub current_status: String,
    /// Expected delivery (ISO-8601).
    pub estimated_delivery: Option<String>,
}

/// A shipment whose delivered boxes or weight do not match what was sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MisshipmentAlert {
    /// Shipment identifier.
    pub shipment_id: String,
    /// Platform order identifier.
    pub order_id: String,
    /// Carrier tracking number.
    pub tracking_number: String,
    /// Latest tracking status.
    pub current_status: String,
    /// Delivered boxes or weight differ from what shipped.
    pub misshipment_flag: bool,
    /// Boxes in the shipment.
    pub num_boxes: u32,
    /// Boxes delivered.
    pub boxes_delivered: Option<u32>,
    /// Shipped weight in pounds.
    pub total_weight: Option<Decimal>,
    /// Delivered weight in pounds.
    pub weight_delivered: Option<Decimal>,
}

/// Overall service health.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall status, e.g. "Healthy".
    pub status: String,
    /// Service version.
    pub version: Option<String>,
    /// When the check ran (ISO-8601).
    pub timestamp: Option<String>,
    /// Health per dependency, keyed by name.
    pub components: BTreeMap<String, ComponentHealth>,
}

/// Health of one dependency (database, distributor API, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentHealth {
    /// Component status.
    pub status: String,
    /// Detail when not healthy.
    pub message: Option<String>,
    /// Last successful check (ISO-8601).
    pub last_successful: Option<String>,
    /// Latency of the last check in milliseconds.
    pub response_time_ms: Option<u64>,
}

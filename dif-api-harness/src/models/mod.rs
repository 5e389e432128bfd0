//! Wire models for the order-distribution API.
//!
//! - [`request`]: payloads the harness sends
//! - [`response`]: typed `data` payloads the API returns
//! - [`envelope`]: the `{ success, data, ... }` wrappers around them
//!
//! All models use camelCase JSON and ignore unknown fields on decode.

pub mod envelope;
pub mod request;
pub mod response;

pub use envelope::{ApiEnvelope, PaginatedResponse};
pub use request::{
    OrderLine, PaymentProfile, PlaceOrderRequest, ShippingAddress, ShippingEstimateItem,
    ShippingEstimateRequest, TrackingUpdateRequest,
};
pub use response::{
    ComponentHealth, DeliveryConfirmation, Distributor, HealthResponse, InventoryStock,
    MisshipmentAlert, OrderCosts, OrderDetail, OrderLineDetail, OrderResponse, OrderSummary,
    PendingShipment, Product, RateLimitConfig, RateLimitStatus, ShippingAddressResponse,
    ShippingEstimate, ShippingOption, ShippingOptionEstimate, Surcharge, TrackingDetail,
    TrackingInfo, TrackingStatusEvent, TrackingSummary, TrackingUpdateResponse, Warehouse,
};

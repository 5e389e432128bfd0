//! Canned fixtures for API tests.
//!
//! Every generator returns a fresh value; nothing here is shared or mutable.
//! Purchase order numbers are unique per millisecond and order ids are
//! random UUIDs that the remote system has never issued.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{
    OrderLine, PaymentProfile, PlaceOrderRequest, ShippingAddress, ShippingEstimateItem,
    ShippingEstimateRequest,
};

/// Distributors the API under test knows about.
pub const VALID_DISTRIBUTOR_IDS: [&str; 3] = ["ss", "img", "sanmar"];
/// Distributor used when none is specified.
pub const DEFAULT_DISTRIBUTOR_ID: &str = "ss";
/// SKUs stocked by the default distributor.
pub const VALID_SKUS: [&str; 3] = ["G500-BLA-M", "G500-BLA-L", "G500-BLA-XL"];
/// SKU used when none is specified.
pub const DEFAULT_SKU: &str = "G500-BLA-M";
/// A SKU no distributor carries.
pub const INVALID_SKU: &str = "INVALID-SKU-999";
/// A distributor id the API does not know.
pub const INVALID_DISTRIBUTOR_ID: &str = "invalid-distributor";
/// Warehouses of the default distributor.
pub const VALID_WAREHOUSE_CODES: [&str; 4] = ["IL", "CA", "KS", "GA"];
/// Warehouse used when none is specified.
pub const DEFAULT_WAREHOUSE_CODE: &str = "IL";

/// A complete Chicago address, suite and phone included.
#[must_use]
pub fn default_shipping_address() -> ShippingAddress {
    ShippingAddress {
        customer: "Test Printer #1".to_owned(),
        address: "123 Main Street".to_owned(),
        address2: Some("Suite 100".to_owned()),
        city: "Chicago".to_owned(),
        state: "IL".to_owned(),
        zip: "60601".to_owned(),
        country: "US".to_owned(),
        phone: Some("312-555-1234".to_owned()),
    }
}

/// A Los Angeles address without a suite.
#[must_use]
pub fn california_shipping_address() -> ShippingAddress {
    ShippingAddress {
        customer: "Test Printer CA".to_owned(),
        address: "456 Hollywood Blvd".to_owned(),
        address2: None,
        city: "Los Angeles".to_owned(),
        state: "CA".to_owned(),
        zip: "90028".to_owned(),
        country: "US".to_owned(),
        phone: Some("323-555-5678".to_owned()),
    }
}

/// A New York address without a suite.
#[must_use]
pub fn new_york_shipping_address() -> ShippingAddress {
    ShippingAddress {
        customer: "Test Printer NY".to_owned(),
        address: "789 Broadway".to_owned(),
        address2: None,
        city: "New York".to_owned(),
        state: "NY".to_owned(),
        zip: "10003".to_owned(),
        country: "US".to_owned(),
        phone: Some("212-555-9876".to_owned()),
    }
}

/// Only the required address fields.
#[must_use]
pub fn minimal_shipping_address() -> ShippingAddress {
    ShippingAddress {
        customer: "Test Customer".to_owned(),
        address: "123 Test St".to_owned(),
        address2: None,
        city: "Test City".to_owned(),
        state: "IL".to_owned(),
        zip: "60601".to_owned(),
        country: "US".to_owned(),
        phone: None,
    }
}

/// A test order for 12 of [`DEFAULT_SKU`] from the default distributor.
#[must_use]
pub fn valid_order_request() -> PlaceOrderRequest {
    PlaceOrderRequest::builder()
        .distributor_id(DEFAULT_DISTRIBUTOR_ID)
        .shipping_address(default_shipping_address())
        .shipping_method("1")
        .po_number(generate_po_number())
        .test_order(true)
        .add_line(DEFAULT_SKU, 12)
        .use_default_payment()
        .build()
}

/// A test order with three lines: M x12, L x24, XL x6.
#[must_use]
pub fn order_request_with_multiple_lines() -> PlaceOrderRequest {
    PlaceOrderRequest::builder()
        .distributor_id(DEFAULT_DISTRIBUTOR_ID)
        .shipping_address(default_shipping_address())
        .shipping_method("1")
        .po_number(generate_po_number())
        .test_order(true)
        .add_line("G500-BLA-M", 12)
        .add_line("G500-BLA-L", 24)
        .add_line("G500-BLA-XL", 6)
        .use_default_payment()
        .build()
}

/// A test order for 10 of [`DEFAULT_SKU`] from `distributor_id`.
#[must_use]
pub fn order_request_for_distributor(distributor_id: &str) -> PlaceOrderRequest {
    PlaceOrderRequest::builder()
        .distributor_id(distributor_id)
        .shipping_address(default_shipping_address())
        .shipping_method("1")
        .po_number(generate_po_number())
        .test_order(true)
        .add_line(DEFAULT_SKU, 10)
        .use_default_payment()
        .build()
}

/// An order line.
#[must_use]
pub fn order_line(sku: &str, qty: i32) -> OrderLine {
    OrderLine::new(sku, qty)
}

/// A quote for 24 of [`DEFAULT_SKU`] from `IL` to Beverly Hills.
#[must_use]
pub fn valid_shipping_estimate_request() -> ShippingEstimateRequest {
    ShippingEstimateRequest {
        distributor_id: DEFAULT_DISTRIBUTOR_ID.to_owned(),
        origin_warehouse_code: DEFAULT_WAREHOUSE_CODE.to_owned(),
        destination_zip: "90210".to_owned(),
        items: vec![ShippingEstimateItem { sku: DEFAULT_SKU.to_owned(), quantity: 24 }],
        preferred_shipping_method: Some("1".to_owned()),
    }
}

/// The account's default payment method.
#[must_use]
pub fn default_payment_profile() -> PaymentProfile {
    PaymentProfile::account_default()
}

/// `TEST-<milliseconds since the Unix epoch>`.
#[must_use]
pub fn generate_po_number() -> String {
    format!("TEST-{}", Utc::now().timestamp_millis())
}

/// A random UUID v4, for not-found tests.
#[must_use]
pub fn random_order_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shipping_address() {
        let address = default_shipping_address();
        assert_eq!(address.customer, "Test Printer #1");
        assert_eq!(address.city, "Chicago");
        assert_eq!(address.state, "IL");
        assert_eq!(address.zip, "60601");
        assert_eq!(address.address2.as_deref(), Some("Suite 100"));
        assert_eq!(address.phone.as_deref(), Some("312-555-1234"));
    }

    #[test]
    fn test_regional_addresses() {
        assert_eq!(california_shipping_address().zip, "90028");
        assert_eq!(new_york_shipping_address().city, "New York");
        assert!(new_york_shipping_address().address2.is_none());
    }

    #[test]
    fn test_minimal_shipping_address_omits_optional() {
        let address = minimal_shipping_address();
        assert!(address.address2.is_none());
        assert!(address.phone.is_none());

        let value = serde_json::to_value(&address).unwrap();
        assert!(value.get("address2").is_none());
        assert!(value.get("phone").is_none());
    }

    #[test]
    fn test_valid_order_request() {
        let request = valid_order_request();
        assert_eq!(request.distributor_id, "ss");
        assert!(request.test_order);
        assert_eq!(request.lines, vec![OrderLine::new(DEFAULT_SKU, 12)]);
        assert_eq!(request.payment_profile, Some(PaymentProfile::account_default()));
        assert!(request.po_number.unwrap().starts_with("TEST-"));
    }

    #[test]
    fn test_order_request_with_multiple_lines() {
        let request = order_request_with_multiple_lines();
        let lines: Vec<(&str, i32)> =
            request.lines.iter().map(|l| (l.identifier.as_str(), l.qty)).collect();
        assert_eq!(lines, vec![("G500-BLA-M", 12), ("G500-BLA-L", 24), ("G500-BLA-XL", 6)]);
    }

    #[test]
    fn test_order_request_for_distributor() {
        let request = order_request_for_distributor("img");
        assert_eq!(request.distributor_id, "img");
        assert_eq!(request.lines, vec![OrderLine::new(DEFAULT_SKU, 10)]);
    }

    #[test]
    fn test_valid_shipping_estimate_request() {
        let request = valid_shipping_estimate_request();
        assert_eq!(request.origin_warehouse_code, "IL");
        assert_eq!(request.destination_zip, "90210");
        assert_eq!(request.items, vec![ShippingEstimateItem {
            sku: DEFAULT_SKU.to_owned(),
            quantity: 24
        }]);
        assert_eq!(request.preferred_shipping_method.as_deref(), Some("1"));
    }

    #[test]
    fn test_generate_po_number_format() {
        let po = generate_po_number();
        let millis = po.strip_prefix("TEST-").unwrap();
        assert!(millis.parse::<i64>().unwrap() > 1_600_000_000_000);
    }

    #[test]
    fn test_random_order_id_is_uuid() {
        let id = random_order_id();
        assert!(Uuid::parse_str(&id).is_ok());
        assert_ne!(id, random_order_id());
    }

    #[test]
    fn test_constants() {
        assert!(VALID_DISTRIBUTOR_IDS.contains(&DEFAULT_DISTRIBUTOR_ID));
        assert!(VALID_SKUS.contains(&DEFAULT_SKU));
        assert!(!VALID_SKUS.contains(&INVALID_SKU));
        assert!(VALID_WAREHOUSE_CODES.contains(&DEFAULT_WAREHOUSE_CODE));
        assert_eq!(order_line("G500-BLA-L", 3), OrderLine::new("G500-BLA-L", 3));
        assert_eq!(default_payment_profile(), PaymentProfile::account_default());
    }
}

//! Fluent construction of [`PlaceOrderRequest`] payloads.
//!
//! The builder performs no validation: invalid orders (no lines, zero
//! quantities, unknown distributors) are built just as easily as valid ones,
//! so that negative tests can send them.
//!
//! # Examples
//!
//! ```
//! use dif_api_harness::{builders::default_shipping_address, models::PlaceOrderRequest};
//!
//! let request = PlaceOrderRequest::builder()
//!     .shipping_address(default_shipping_address())
//!     .add_line("G500-BLA-M", 12)
//!     .add_line("G500-BLA-L", 24)
//!     .test_order(true)
//!     .build();
//!
//! assert_eq!(request.distributor_id, "ss");
//! assert_eq!(request.lines.len(), 2);
//! ```

pub use crate::test_data::{california_shipping_address, default_shipping_address};
use crate::models::{OrderLine, PaymentProfile, PlaceOrderRequest, ShippingAddress};

/// Builder for [`PlaceOrderRequest`].
///
/// Defaults: distributor `"ss"`, shipping method `"1"`, warehouse
/// auto-selection on, not a test order, no lines, no address and no payment
/// profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrderRequestBuilder {
    distributor_id: String,
    shipping_address: Option<ShippingAddress>,
    shipping_method: String,
    autoselect_warehouse: bool,
    warehouse_codes: Option<Vec<String>>,
    po_number: Option<String>,
    email_confirmation: Option<String>,
    test_order: bool,
    lines: Vec<OrderLine>,
    payment_profile: Option<PaymentProfile>,
}

impl Default for PlaceOrderRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceOrderRequestBuilder {
    /// Creates a builder with the standard defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            distributor_id: "ss".to_owned(),
            shipping_address: None,
            shipping_method: "1".to_owned(),
            autoselect_warehouse: true,
            warehouse_codes: None,
            po_number: None,
            email_confirmation: None,
            test_order: false,
            lines: Vec::new(),
            payment_profile: None,
        }
    }

    /// Sets the distributor.
    #[must_use]
    pub fn distributor_id(mut self, distributor_id: impl Into<String>) -> Self {
        self.distributor_id = distributor_id.into();
        self
    }

    /// Sets the shipping address.
    #[must_use]
    pub fn shipping_address(mut self, address: ShippingAddress) -> Self {
        self.shipping_address = Some(address);
        self
    }

    /// Sets the shipping method code.
    #[must_use]
    pub fn shipping_method(mut self, method: impl Into<String>) -> Self {
        self.shipping_method = method.into();
        self
    }

    /// Turns warehouse auto-selection on or off.
    #[must_use]
    pub const fn autoselect_warehouse(mut self, autoselect: bool) -> Self {
        self.autoselect_warehouse = autoselect;
        self
    }

    /// Restricts auto-selection to the given warehouses, replacing any set
    /// earlier.
    #[must_use]
    pub fn warehouse_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.warehouse_codes = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the purchase order number.
    #[must_use]
    pub fn po_number(mut self, po_number: impl Into<String>) -> Self {
        self.po_number = Some(po_number.into());
        self
    }

    /// Sets the confirmation email address.
    #[must_use]
    pub fn email_confirmation(mut self, email: impl Into<String>) -> Self {
        self.email_confirmation = Some(email.into());
        self
    }

    /// Marks the order as a test order.
    #[must_use]
    pub const fn test_order(mut self, test_order: bool) -> Self {
        self.test_order = test_order;
        self
    }

    /// Appends a line. Repeated SKUs are kept as separate lines.
    #[must_use]
    pub fn add_line(mut self, sku: impl Into<String>, qty: i32) -> Self {
        self.lines.push(OrderLine::new(sku, qty));
        self
    }

    /// Replaces all lines.
    #[must_use]
    pub fn lines(mut self, lines: Vec<OrderLine>) -> Self {
        self.lines = lines;
        self
    }

    /// Sets the payment profile.
    #[must_use]
    pub fn payment_profile(mut self, profile: PaymentProfile) -> Self {
        self.payment_profile = Some(profile);
        self
    }

    /// Pays with the account's default payment method.
    #[must_use]
    pub fn use_default_payment(self) -> Self {
        self.payment_profile(PaymentProfile::account_default())
    }

    /// Returns a snapshot of the current state.
    ///
    /// The builder is left untouched, so it can be adjusted and built again.
    #[must_use]
    pub fn build(&self) -> PlaceOrderRequest {
        PlaceOrderRequest {
            distributor_id: self.distributor_id.clone(),
            shipping_address: self.shipping_address.clone(),
            shipping_method: self.shipping_method.clone(),
            autoselect_warehouse: self.autoselect_warehouse,
            autoselect_warehouse_warehouses: self.warehouse_codes.clone(),
            po_number: self.po_number.clone(),
            email_confirmation: self.email_confirmation.clone(),
            test_order: self.test_order,
            lines: self.lines.clone(),
            payment_profile: self.payment_profile.clone(),
        }
    }
}

//! Request builders.

pub mod place_order;

pub use place_order::{
    PlaceOrderRequestBuilder, california_shipping_address, default_shipping_address,
};

#[cfg(test)]
mod tests;

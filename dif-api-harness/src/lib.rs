//! DIF API Harness: typed test support for the order-distribution API
//!
//! A library for writing contract tests against the DIF distributor, product,
//! order, tracking and health endpoints. It builds request payloads (valid and
//! deliberately invalid), performs one HTTP call per method and hands back the
//! raw response so that tests can assert on status codes, headers and JSON.
//!
//! The harness holds no business logic. It does not retry, it does not treat
//! 4xx/5xx as failures, and it keeps no state between calls.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │  test_data / builders    │   │  projection              │
//! │  (fixtures, payloads)    │   │  (flat order records)    │
//! └────────────┬─────────────┘   └────────────┬─────────────┘
//!              │                              │
//! ┌────────────▼──────────────────────────────▼─────────────┐
//! │  endpoints: Distributors / Products / Orders /          │
//! │             Tracking / Health                           │
//! └────────────┬────────────────────────────────────────────┘
//!              │ path template + params + query + body
//! ┌────────────▼────────────┐
//! │  client::ApiClient      │  URL assembly, JSON encoding, logging
//! └────────────┬────────────┘
//!              │ one round trip
//! ┌────────────▼────────────┐
//! │  transport::Transport   │  HttpTransport (reqwest)
//! └─────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ## 1. Place a test order
//!
//! ```rust,no_run
//! use dif_api_harness::{client::ApiClient, test_data, transport::TransportConfig};
//!
//! # async fn example() -> dif_api_harness::error::Result<()> {
//! let client = ApiClient::new(&TransportConfig::load()?)?;
//!
//! let response = client.orders().place_order(&test_data::valid_order_request()).await?;
//! assert_eq!(response.status, 201);
//!
//! let order_id = response.pointer("/data/orderId")?.and_then(|v| v.as_str());
//! println!("created order {order_id:?}");
//! # Ok(())
//! # }
//! ```
//!
//! ## 2. Expect a not-found
//!
//! ```rust,no_run
//! use dif_api_harness::{client::ApiClient, test_data, transport::TransportConfig};
//!
//! # async fn example() -> dif_api_harness::error::Result<()> {
//! let client = ApiClient::new(&TransportConfig::default())?;
//!
//! let response = client.orders().get_order(&test_data::random_order_id()).await?;
//! assert_eq!(response.status, 404);
//! # Ok(())
//! # }
//! ```
//!
//! ## 3. Check what was persisted
//!
//! ```rust,no_run
//! use dif_api_harness::{ApiClient, TransportConfig, projection::OrderProjector};
//!
//! # async fn example() -> dif_api_harness::error::Result<()> {
//! let client = ApiClient::new(&TransportConfig::default())?;
//! let projector = OrderProjector::from_client(&client);
//!
//! if let Some(lines) = projector.project_order_lines("o-1").await? {
//!     for line in &lines {
//!         println!("{:?} x {:?}", line.text("sku"), line.integer("quantity"));
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`transport`]: configuration and the HTTP round trip
//! - [`client`]: the generic client (path templates, query strings, JSON bodies)
//! - [`endpoints`]: one client per resource family
//! - [`models`]: request and response payloads
//! - [`builders`]: fluent construction of order requests
//! - [`test_data`]: fixture constants and generators
//! - [`projection`]: flat records over order responses
//! - [`observability`]: log output setup
//! - [`error`]: error types
//!
//! # Configuration
//!
//! [`TransportConfig::load`](transport::TransportConfig::load) reads the file
//! named by `DIF_API_CONFIG`, or `dif-api.toml` in the working directory, or
//! falls back to defaults (`http://localhost:5000`, 30 s timeout):
//!
//! ```toml
//! "base.url" = "https://dif-staging.example.com"
//! "api.timeout" = 10000
//! "log.request" = true
//! "log.response" = true
//! ```
//!
//! # Error Handling
//!
//! Every call returns [`Result<T, HarnessError>`](error::Result). Only failures
//! that leave the caller without an HTTP status are errors:
//!
//! ```rust,no_run
//! use dif_api_harness::{HarnessError, client::ApiClient, transport::TransportConfig};
//!
//! # async fn example() {
//! let config =
//!     TransportConfig { base_url: "http://127.0.0.1:9".to_owned(), ..Default::default() };
//! let client = ApiClient::new(&config).unwrap();
//!
//! match client.health().ping().await {
//!     Ok(response) => println!("status {}", response.status),
//!     Err(HarnessError::Transport(e)) => eprintln!("API unreachable: {e}"),
//!     Err(e) => eprintln!("other error: {e}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![allow(
    clippy::multiple_crate_versions,
    reason = "transitive dependencies from reqwest and wiremock"
)]

pub mod builders;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod observability;
pub mod projection;
pub mod test_data;
pub mod transport;

pub use client::ApiClient;
pub use error::{HarnessError, Result};
pub use transport::TransportConfig;

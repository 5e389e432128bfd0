//! Places a test order and reads it back.
//!
//! Walks the usual contract-test flow against a live API: check health,
//! place an order built from fixtures, fetch it, and compare the projected
//! records with what was sent.
//!
//! # Running this example
//!
//! ```bash
//! # dif-api.toml in the working directory, or point at another file:
//! export DIF_API_CONFIG=./staging.toml
//! LOG_FORMAT=pretty RUST_LOG=dif_api_harness=debug cargo run --example place_order
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::uninlined_format_args,
    reason = "examples are allowed to use println and simple formatting"
)]

use dif_api_harness::{
    ApiClient, TransportConfig,
    models::{OrderResponse, PlaceOrderRequest},
    observability::{LogFormat, init_logging},
    projection::OrderProjector,
    test_data,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LogFormat::from_env());

    let config = TransportConfig::load()?;
    println!("DIF API Harness: place order against {}\n", config.base_url);
    let client = ApiClient::new(&config)?;

    println!("1. Ping");
    let ping = client.health().ping().await?;
    println!("   status {}", ping.status);

    println!("\n2. Place order");
    let request = PlaceOrderRequest::builder()
        .distributor_id(&config.default_distributor_id)
        .shipping_address(test_data::default_shipping_address())
        .po_number(test_data::generate_po_number())
        .test_order(true)
        .add_line("G500-BLA-M", 12)
        .add_line("G500-BLA-L", 24)
        .use_default_payment()
        .build();
    let placed = client.orders().place_order(&request).await?;
    println!("   status {}", placed.status);
    if !placed.is_success() {
        eprintln!("   order rejected: {}", placed.text());
        return Ok(());
    }

    let order = placed.envelope::<OrderResponse>()?.data.ok_or("response has no data")?;
    println!("   order id    {}", order.order_id);
    println!("   status      {}", order.status);

    println!("\n3. Read back");
    let projector = OrderProjector::from_client(&client);
    if let Some(record) = projector.project_order(&order.order_id).await? {
        for (name, value) in record.iter() {
            println!("   {name:<22} {value}");
        }
    }

    if let Some(lines) = projector.project_order_lines(&order.order_id).await? {
        println!("\n4. Lines");
        for (sent, stored) in request.lines.iter().zip(&lines) {
            let matches = stored.text("sku") == Some(sent.identifier.as_str())
                && stored.integer("quantity") == Some(i64::from(sent.qty));
            println!(
                "   {} x{} {}",
                sent.identifier,
                sent.qty,
                if matches { "✓" } else { "✗ mismatch" }
            );
        }
    }

    Ok(())
}

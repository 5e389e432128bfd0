//! Error handling example showing which outcomes are errors and which are not.
//!
//! HTTP error statuses come back as responses; only failures that leave the
//! caller without a status are `HarnessError`s.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example error_handling
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::uninlined_format_args,
    reason = "examples are allowed to use println and simple formatting"
)]

use dif_api_harness::{
    ApiClient, HarnessError, TransportConfig,
    models::PlaceOrderRequest,
    observability::{LogFormat, init_logging},
    projection::OrderProjector,
    test_data,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LogFormat::from_env());
    println!("DIF API Harness: Error Handling Example\n");

    // Example 1: configuration rejected before any request is made
    println!("Example 1: Non-HTTP base URL (should fail)");
    let config =
        TransportConfig { base_url: "ftp://files.example.com".to_owned(), ..Default::default() };
    match ApiClient::new(&config) {
        Ok(_) => println!("   Unexpected success"),
        Err(HarnessError::InvalidBaseUrl(msg)) => println!("   ✓ Caught config error: {}", msg),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Example 2: nothing listening on the port
    println!("\nExample 2: Unreachable host (transport error)");
    let config = TransportConfig {
        base_url: "http://127.0.0.1:9".to_owned(),
        timeout_ms: 2_000,
        ..Default::default()
    };
    let unreachable = ApiClient::new(&config)?;
    match unreachable.health().ping().await {
        Ok(response) => println!("   Unexpected response: {}", response.status),
        Err(e) if e.is_timeout() => println!("   ✓ Timed out: {}", e),
        Err(HarnessError::Transport(e)) => println!("   ✓ Caught transport error: {}", e),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Example 3: projection keeps "unreachable" apart from "not found"
    println!("\nExample 3: Projection against an unreachable host");
    let projector = OrderProjector::from_client(&unreachable);
    match projector.project_order(&test_data::random_order_id()).await {
        Ok(None) => println!("   Order not found"),
        Ok(Some(_)) => println!("   Unexpected record"),
        Err(e) => println!("   ✓ Error, not absence: {}", e),
    }

    // Example 4: a 4xx from the live API is an ordinary response
    println!("\nExample 4: Invalid order against the configured API");
    let client = ApiClient::new(&TransportConfig::load()?)?;
    let invalid = PlaceOrderRequest::builder()
        .distributor_id(test_data::INVALID_DISTRIBUTOR_ID)
        .add_line(test_data::INVALID_SKU, 0)
        .build();
    match client.orders().place_order(&invalid).await {
        Ok(response) if response.is_success() => {
            println!("   Unexpected acceptance: {}", response.status);
        }
        Ok(response) => {
            println!("   ✓ Rejected with status {}", response.status);
            match response.envelope::<serde_json::Value>() {
                Ok(envelope) => {
                    for error in &envelope.errors {
                        println!("   - {}", error);
                    }
                }
                Err(e) => println!("   body is not an envelope: {}", e),
            }
        }
        Err(e) => eprintln!("   API not reachable: {}", e),
    }

    println!("\n✓ Error handling examples complete");
    Ok(())
}

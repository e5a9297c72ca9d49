//! Example creating a PayPal order for a shop payment
//!
//! ```text
//! PAYPAL_ACCESS_TOKEN=... RUST_LOG=paypal_checkout=debug cargo run --example create_order
//! ```

use paypal_checkout::{
    ApiConfig, CreateOrderApi, OrderDetails, PayPalOrderClient, PaymentDetails, ShippingAddress,
};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing, honouring RUST_LOG
    tracing_subscriber::fmt::init();

    let token = std::env::var("PAYPAL_ACCESS_TOKEN")
        .map_err(|_| "PAYPAL_ACCESS_TOKEN must be set to an OAuth access token")?;

    let config = ApiConfig::from_env()?;
    println!("Creating order against {}", config.base_url);
    let client = PayPalOrderClient::with_config(config)?;

    let order = OrderDetails::new("USD").with_shipping_address(ShippingAddress::new(
        "Gandalf The Grey",
        "Hobbit St. 123",
        "Minas Tirith",
        "000",
        "US",
    ));
    let payment = PaymentDetails::new(10000, order);

    let created = client.create(&token, &payment).await?;
    println!("{}", serde_json::to_string_pretty(&created)?);

    if let Some(id) = created.get("id") {
        println!("Order id: {}", id);
    }

    Ok(())
}

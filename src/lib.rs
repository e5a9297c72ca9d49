//! # paypal-checkout
//!
//! Creates PayPal Orders v2 checkout orders for shop payments.
//!
//! A payment is read through the [`model`] traits, turned into a
//! [`CreateOrderRequest`], posted to `<base_url>v2/checkout/orders` with a
//! bearer token and the decoded JSON response is handed back untouched.
//! Acquiring the token is left to the caller.

pub mod client;
pub mod error;
pub mod model;
pub mod types;

// Re-exports for convenience
pub use client::{CreateOrderApi, PayPalOrderClient};
pub use error::{PayPalError, Result};
pub use model::{
    Address, GatewayConfig, MerchantIdentity, Order, OrderDetails, Payment, PaymentDetails,
    PaymentMethod, PaymentMethodDetails, ShippingAddress,
};
pub use types::*;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

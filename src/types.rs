//! Wire types for the PayPal Orders v2 API and client configuration

use crate::model::{Address, Payment};
use crate::{PayPalError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::time::Duration;

/// PayPal sandbox API origin
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.paypal.com/";

/// PayPal live API origin
pub const LIVE_BASE_URL: &str = "https://api.paypal.com/";

/// Path of the create-order endpoint, relative to the API origin
pub const CREATE_ORDER_PATH: &str = "v2/checkout/orders";

/// Environment variable holding the API origin
pub const BASE_URL_ENV: &str = "PAYPAL_API_BASE_URL";

/// Environment variable holding the request timeout in seconds
pub const TIMEOUT_ENV: &str = "PAYPAL_API_TIMEOUT_SECS";

/// What the buyer's approval lets the merchant do with the funds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Intent {
    /// Capture the payment immediately after approval
    #[serde(rename = "CAPTURE")]
    Capture,
}

/// Body of `POST /v2/checkout/orders`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateOrderRequest {
    pub intent: Intent,
    pub purchase_units: Vec<PurchaseUnit>,
}

impl CreateOrderRequest {
    /// Create a capture request for a single purchase unit
    pub fn new(purchase_unit: PurchaseUnit) -> Self {
        Self {
            intent: Intent::Capture,
            purchase_units: vec![purchase_unit],
        }
    }

    /// Build the request for a shop payment
    ///
    /// The payment must resolve to an order, an amount and a currency code;
    /// a missing one is reported as [`PayPalError::PreconditionViolation`].
    /// The shipping block is only present when the order has a shipping
    /// address.
    pub fn from_payment(payment: &dyn Payment) -> Result<Self> {
        let order = payment
            .order()
            .ok_or_else(|| PayPalError::precondition("payment.order"))?;
        let minor_units = payment
            .amount()
            .ok_or_else(|| PayPalError::precondition("payment.amount"))?;
        let currency_code = order
            .currency_code()
            .ok_or_else(|| PayPalError::precondition("order.currency_code"))?;

        let purchase_unit = PurchaseUnit {
            amount: Amount::from_minor_units(minor_units, currency_code),
            shipping: order.shipping_address().map(Shipping::from_address),
        };

        Ok(Self::new(purchase_unit))
    }
}

/// One line of value within an order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseUnit {
    pub amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Shipping>,
}

/// Amount charged for a purchase unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Amount {
    /// Value in major units, sent as a JSON number
    #[serde(serialize_with = "serialize_amount_value")]
    pub value: Decimal,
    pub currency_code: String,
}

impl Amount {
    /// Convert minor units (e.g. cents) into a major-unit amount
    ///
    /// Every currency is assumed to have two minor-unit digits, so the
    /// value is always `minor_units / 100`. Zero- and three-decimal
    /// currencies are not special-cased.
    pub fn from_minor_units(minor_units: i64, currency_code: impl Into<String>) -> Self {
        Self {
            value: Decimal::new(minor_units, 2).normalize(),
            currency_code: currency_code.into(),
        }
    }
}

/// Whole amounts go out as integers (`100`), fractional ones as floats (`100.5`).
///
/// Floats carry about 15-17 significant digits, so fractional amounts past
/// 2^53 minor units lose their last cents on the wire.
fn serialize_amount_value<S>(value: &Decimal, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract().is_zero() {
        if let Some(whole) = value.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }

    // parse the decimal text so the float prints back the same digits
    let float = value
        .to_string()
        .parse::<f64>()
        .map_err(<S::Error as serde::ser::Error>::custom)?;
    serializer.serialize_f64(float)
}

/// Where a purchase unit ships
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shipping {
    pub name: ShippingName,
    pub address: PostalAddress,
}

impl Shipping {
    /// Map a shop address onto PayPal's shipping fields
    pub fn from_address(address: &dyn Address) -> Self {
        Self {
            name: ShippingName {
                full_name: address.full_name().to_string(),
            },
            address: PostalAddress {
                address_line_1: address.street().to_string(),
                admin_area_2: address.city().to_string(),
                postal_code: address.postcode().to_string(),
                country_code: address.country_code().to_string(),
            },
        }
    }
}

/// Recipient name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingName {
    pub full_name: String,
}

/// Postal address in PayPal's field naming
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostalAddress {
    /// Street line
    pub address_line_1: String,
    /// City
    pub admin_area_2: String,
    pub postal_code: String,
    pub country_code: String,
}

/// Configuration for the order client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// API origin the create-order path is appended to
    pub base_url: String,
    /// Request timeout
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// Create a new API config
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the API configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(PayPalError::config("API base URL cannot be empty"));
        }

        let url = url::Url::parse(&self.base_url).map_err(|e| {
            PayPalError::config(format!("Invalid API base URL '{}': {}", self.base_url, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(PayPalError::config(
                "API base URL must start with http:// or https://",
            ));
        }

        Ok(())
    }

    /// Read the configuration from `PAYPAL_API_BASE_URL` and
    /// `PAYPAL_API_TIMEOUT_SECS`, defaulting to the sandbox with no timeout
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup(BASE_URL_ENV).unwrap_or_else(|| SANDBOX_BASE_URL.to_string());
        let mut config = Self::new(base_url);

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                PayPalError::config(format!("Invalid {} value '{}': {}", TIMEOUT_ENV, raw, e))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(SANDBOX_BASE_URL)
    }
}

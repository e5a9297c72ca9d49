//! Read-only views of the shop's payment, order and address models
//!
//! The checkout client never owns these models. It only reads them through
//! the traits below, so any storage layer can hand its entities over
//! directly. Plain owned implementations are provided for callers that
//! assemble a payment by hand.

use serde_json::Value;
use std::collections::HashMap;

/// Gateway config key holding the merchant's PayPal account id
pub const MERCHANT_ID_KEY: &str = "merchant_id";

/// Gateway config key holding the platform partner's merchant id
pub const PARTNER_MERCHANT_ID_KEY: &str = "sylius_merchant_id";

/// A payment awaiting a PayPal order
pub trait Payment: Send + Sync {
    /// Order the payment belongs to
    fn order(&self) -> Option<&dyn Order>;

    /// Amount in minor currency units (e.g. cents)
    fn amount(&self) -> Option<i64>;

    /// Payment method the payment was made with
    fn method(&self) -> Option<&dyn PaymentMethod>;
}

/// The order a payment settles
pub trait Order: Send + Sync {
    /// ISO 4217 currency code
    fn currency_code(&self) -> Option<&str>;

    /// Address the order ships to, if it ships at all
    fn shipping_address(&self) -> Option<&dyn Address>;
}

/// A postal address
pub trait Address: Send + Sync {
    fn full_name(&self) -> &str;
    fn street(&self) -> &str;
    fn city(&self) -> &str;
    fn postcode(&self) -> &str;
    /// ISO 3166-1 alpha-2 country code
    fn country_code(&self) -> &str;
}

/// A configured payment method
pub trait PaymentMethod: Send + Sync {
    fn gateway_config(&self) -> Option<&dyn GatewayConfig>;
}

/// Gateway settings for a payment method
pub trait GatewayConfig: Send + Sync {
    fn config(&self) -> &HashMap<String, Value>;
}

impl GatewayConfig for HashMap<String, Value> {
    fn config(&self) -> &HashMap<String, Value> {
        self
    }
}

/// Merchant identifiers read from a gateway config
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MerchantIdentity {
    /// The merchant's own PayPal account id
    pub merchant_id: Option<String>,
    /// The platform partner's merchant id
    pub partner_merchant_id: Option<String>,
}

impl MerchantIdentity {
    /// Read merchant identifiers from raw gateway settings
    ///
    /// Missing keys and non-string values are treated as absent.
    pub fn from_config(config: &HashMap<String, Value>) -> Self {
        let read = |key: &str| config.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            merchant_id: read(MERCHANT_ID_KEY),
            partner_merchant_id: read(PARTNER_MERCHANT_ID_KEY),
        }
    }

    /// Resolve the identifiers configured for the payment's method
    pub fn from_payment(payment: &dyn Payment) -> Option<Self> {
        let gateway = payment.method()?.gateway_config()?;
        Some(Self::from_config(gateway.config()))
    }
}

/// Owned shipping address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingAddress {
    pub full_name: String,
    pub street: String,
    pub city: String,
    pub postcode: String,
    pub country_code: String,
}

impl ShippingAddress {
    /// Create a new shipping address
    pub fn new(
        full_name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        postcode: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            street: street.into(),
            city: city.into(),
            postcode: postcode.into(),
            country_code: country_code.into(),
        }
    }
}

impl Address for ShippingAddress {
    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn street(&self) -> &str {
        &self.street
    }

    fn city(&self) -> &str {
        &self.city
    }

    fn postcode(&self) -> &str {
        &self.postcode
    }

    fn country_code(&self) -> &str {
        &self.country_code
    }
}

/// Owned order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDetails {
    pub currency_code: Option<String>,
    pub shipping_address: Option<ShippingAddress>,
}

impl OrderDetails {
    /// Create an order in the given currency with no shipping address
    pub fn new(currency_code: impl Into<String>) -> Self {
        Self {
            currency_code: Some(currency_code.into()),
            shipping_address: None,
        }
    }

    /// Set the shipping address
    pub fn with_shipping_address(mut self, address: ShippingAddress) -> Self {
        self.shipping_address = Some(address);
        self
    }
}

impl Order for OrderDetails {
    fn currency_code(&self) -> Option<&str> {
        self.currency_code.as_deref()
    }

    fn shipping_address(&self) -> Option<&dyn Address> {
        self.shipping_address
            .as_ref()
            .map(|address| address as &dyn Address)
    }
}

/// Owned payment method
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentMethodDetails {
    pub gateway_config: Option<HashMap<String, Value>>,
}

impl PaymentMethodDetails {
    /// Create a payment method with the given gateway settings
    pub fn new(gateway_config: HashMap<String, Value>) -> Self {
        Self {
            gateway_config: Some(gateway_config),
        }
    }
}

impl PaymentMethod for PaymentMethodDetails {
    fn gateway_config(&self) -> Option<&dyn GatewayConfig> {
        self.gateway_config
            .as_ref()
            .map(|config| config as &dyn GatewayConfig)
    }
}

/// Owned payment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentDetails {
    pub order: Option<OrderDetails>,
    pub amount: Option<i64>,
    pub method: Option<PaymentMethodDetails>,
}

impl PaymentDetails {
    /// Create a payment of `amount` minor units for `order`
    pub fn new(amount: i64, order: OrderDetails) -> Self {
        Self {
            order: Some(order),
            amount: Some(amount),
            method: None,
        }
    }

    /// Set the payment method
    pub fn with_method(mut self, method: PaymentMethodDetails) -> Self {
        self.method = Some(method);
        self
    }
}

impl Payment for PaymentDetails {
    fn order(&self) -> Option<&dyn Order> {
        self.order.as_ref().map(|order| order as &dyn Order)
    }

    fn amount(&self) -> Option<i64> {
        self.amount
    }

    fn method(&self) -> Option<&dyn PaymentMethod> {
        self.method
            .as_ref()
            .map(|method| method as &dyn PaymentMethod)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gateway_settings() -> HashMap<String, Value> {
        HashMap::from([
            ("merchant_id".to_string(), json!("merchant-id")),
            ("sylius_merchant_id".to_string(), json!("sylius-merchant-id")),
        ])
    }

    #[test]
    fn test_merchant_identity_from_config() {
        let identity = MerchantIdentity::from_config(&gateway_settings());

        assert_eq!(identity.merchant_id.as_deref(), Some("merchant-id"));
        assert_eq!(
            identity.partner_merchant_id.as_deref(),
            Some("sylius-merchant-id")
        );
    }

    #[test]
    fn test_merchant_identity_ignores_non_string_values() {
        let config = HashMap::from([("merchant_id".to_string(), json!(42))]);
        let identity = MerchantIdentity::from_config(&config);

        assert_eq!(identity, MerchantIdentity::default());
    }

    #[test]
    fn test_merchant_identity_from_payment() {
        let payment = PaymentDetails::new(10000, OrderDetails::new("PLN"))
            .with_method(PaymentMethodDetails::new(gateway_settings()));

        let identity = MerchantIdentity::from_payment(&payment).unwrap();
        assert_eq!(identity.merchant_id.as_deref(), Some("merchant-id"));
    }

    #[test]
    fn test_gateway_config_is_borrowed() {
        let method = PaymentMethodDetails::new(gateway_settings());

        let stored = method.gateway_config.as_ref().unwrap();
        let exposed = method.gateway_config().unwrap().config();
        assert!(std::ptr::eq(stored, exposed));
    }

    #[test]
    fn test_merchant_identity_requires_gateway_config() {
        let without_method = PaymentDetails::new(10000, OrderDetails::new("PLN"));
        assert!(MerchantIdentity::from_payment(&without_method).is_none());

        let without_config = PaymentDetails::new(10000, OrderDetails::new("PLN"))
            .with_method(PaymentMethodDetails::default());
        assert!(MerchantIdentity::from_payment(&without_config).is_none());
    }

    #[test]
    fn test_order_exposes_shipping_address() {
        let order = OrderDetails::new("USD").with_shipping_address(ShippingAddress::new(
            "Gandalf The Grey",
            "Hobbit St. 123",
            "Minas Tirith",
            "000",
            "US",
        ));

        let address = order.shipping_address().unwrap();
        assert_eq!(address.full_name(), "Gandalf The Grey");
        assert_eq!(address.street(), "Hobbit St. 123");
        assert_eq!(address.city(), "Minas Tirith");
        assert_eq!(address.postcode(), "000");
        assert_eq!(address.country_code(), "US");
        assert_eq!(order.currency_code(), Some("USD"));
    }

    #[test]
    fn test_order_without_shipping_address() {
        assert!(OrderDetails::new("PLN").shipping_address().is_none());
    }
}

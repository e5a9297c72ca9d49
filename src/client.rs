//! Client for the PayPal create-order endpoint

use crate::model::{MerchantIdentity, Payment};
use crate::types::{ApiConfig, CreateOrderRequest, CREATE_ORDER_PATH};
use crate::{PayPalError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, Instrument};

/// Creates PayPal orders for shop payments
#[async_trait]
pub trait CreateOrderApi: Send + Sync {
    /// Create an order for `payment`, authorized with the bearer `token`
    ///
    /// Returns the decoded response body exactly as PayPal sent it.
    async fn create(&self, token: &str, payment: &dyn Payment) -> Result<Value>;
}

/// HTTP implementation of [`CreateOrderApi`]
#[derive(Debug, Clone)]
pub struct PayPalOrderClient {
    /// HTTP client
    client: Client,
    /// API origin, e.g. `https://api.sandbox.paypal.com/`
    base_url: String,
}

impl PayPalOrderClient {
    /// Create a client on top of an existing HTTP client
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Create a client with its own HTTP client built from `config`
    pub fn with_config(config: ApiConfig) -> Result<Self> {
        config.validate()?;

        let mut client_builder = Client::builder();

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder
            .build()
            .map_err(|e| PayPalError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::new(client, config.base_url))
    }

    /// Get the API origin of this client
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the create-order endpoint
    pub fn orders_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            CREATE_ORDER_PATH
        )
    }

    async fn send(&self, token: &str, request: &CreateOrderRequest) -> Result<Value> {
        let url = self.orders_url();

        debug!(%url, "sending create-order request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(PayPalError::api(status.as_u16(), &text));
        }

        let order: Value = serde_json::from_str(&text).map_err(PayPalError::MalformedResponse)?;

        debug!(status = ?order.get("status"), "create-order response decoded");
        Ok(order)
    }
}

#[async_trait]
impl CreateOrderApi for PayPalOrderClient {
    async fn create(&self, token: &str, payment: &dyn Payment) -> Result<Value> {
        let request = CreateOrderRequest::from_payment(payment)?;
        let merchant = MerchantIdentity::from_payment(payment).unwrap_or_default();

        let span = tracing::debug_span!(
            "create_order",
            currency = %request.purchase_units[0].amount.currency_code,
            minor_units = payment.amount(),
            merchant_id = merchant.merchant_id.as_deref(),
        );

        self.send(token, &request).instrument(span).await
    }
}

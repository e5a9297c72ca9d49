//! Error handling tests for the checkout client

use mockito::Server;
use paypal_checkout::{
    ApiConfig, CreateOrderApi, OrderDetails, PayPalError, PayPalOrderClient, PaymentDetails,
};
use std::error::Error as _;
use std::time::Duration;

fn payment() -> PaymentDetails {
    PaymentDetails::new(10000, OrderDetails::new("PLN"))
}

#[test]
fn test_precondition_violation_error() {
    let error = PayPalError::precondition("order.currency_code");

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("Precondition violated"),
        "Error message MUST contain 'Precondition violated' - actual: {}",
        error_msg
    );
    assert!(
        error_msg.contains("order.currency_code"),
        "Error message MUST name the missing field - actual: {}",
        error_msg
    );
}

#[test]
fn test_config_error() {
    let error = PayPalError::config("API base URL cannot be empty");

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("Configuration error"),
        "Error message MUST contain 'Configuration error' - actual: {}",
        error_msg
    );
    assert!(
        error_msg.contains("API base URL cannot be empty"),
        "Error message MUST contain the specific reason - actual: {}",
        error_msg
    );
    assert!(!error.is_transport());
}

#[test]
fn test_malformed_response_keeps_source() {
    let json_error = serde_json::from_str::<serde_json::Value>("{\"status\":").unwrap_err();
    let error = PayPalError::MalformedResponse(json_error);

    assert!(error.to_string().contains("Malformed response"));
    assert!(
        error.source().is_some(),
        "Malformed response MUST expose the JSON decoding error as its source"
    );
}

#[test]
fn test_error_debug_format() {
    let error = PayPalError::PreconditionViolation {
        field: "payment.amount".to_string(),
    };

    let debug_str = format!("{:?}", error);
    assert!(
        debug_str.contains("PreconditionViolation"),
        "Debug format MUST contain variant name 'PreconditionViolation' - actual: {}",
        debug_str
    );
    assert!(
        debug_str.contains("payment.amount"),
        "Debug format MUST contain the field name - actual: {}",
        debug_str
    );
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    // grab a free port, then close it so nothing is listening
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let config = ApiConfig::new(format!("http://127.0.0.1:{}/", port))
        .with_timeout(Duration::from_secs(5));
    let client = PayPalOrderClient::with_config(config).unwrap();

    let result = client.create("TOKEN", &payment()).await;
    match result {
        Err(PayPalError::Transport(source)) => {
            assert!(
                source.is_connect() || source.is_timeout(),
                "Expected connection failure, got: {}",
                source
            );
        }
        other => panic!("Expected transport error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_client_error_status_is_transport_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/v2/checkout/orders")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "invalid_token", "error_description": "Token signature verification failed"}"#)
        .create_async()
        .await;

    let client = PayPalOrderClient::new(reqwest::Client::new(), server.url());
    let error = client.create("EXPIRED", &payment()).await.unwrap_err();

    assert!(error.is_transport());
    let error_msg = error.to_string();
    assert!(
        error_msg.contains("HTTP error") && error_msg.contains("401"),
        "Error message MUST contain 'HTTP error' and the status - actual: {}",
        error_msg
    );
}

#[tokio::test]
async fn test_truncated_json_is_malformed_response() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/v2/checkout/orders")
        .with_status(201)
        .with_body(r#"{"status": "CREATED", "id": "#)
        .create_async()
        .await;

    let client = PayPalOrderClient::new(reqwest::Client::new(), server.url());
    let error = client.create("TOKEN", &payment()).await.unwrap_err();

    assert!(
        matches!(error, PayPalError::MalformedResponse(_)),
        "Expected malformed response, got: {:?}",
        error
    );
}

#[test]
fn test_with_config_rejects_unsupported_scheme() {
    let error = PayPalOrderClient::with_config(ApiConfig::new("ftp://api.test-paypal.com/"))
        .unwrap_err();

    assert!(
        error.to_string().contains("http:// or https://"),
        "Error message MUST explain the accepted schemes - actual: {}",
        error
    );
}

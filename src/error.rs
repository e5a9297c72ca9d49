//! Error types for the PayPal checkout client

use serde_json::Value;
use thiserror::Error;

/// Result type alias for checkout operations
pub type Result<T> = std::result::Result<T, PayPalError>;

/// Main error type for checkout operations
#[derive(Error, Debug)]
pub enum PayPalError {
    /// Network failure
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Error status returned by the API, with its error document
    ///
    /// A body that is not JSON is kept as a JSON string.
    #[error("HTTP error: status {status}: {body}")]
    Api { status: u16, body: Value },

    /// Response body is not a valid JSON document
    #[error("Malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// A mandatory payment or order field is missing
    #[error("Precondition violated: {field} is required")]
    PreconditionViolation { field: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl PayPalError {
    /// Create a precondition violation for a missing field
    pub fn precondition(field: impl Into<String>) -> Self {
        Self::PreconditionViolation {
            field: field.into(),
        }
    }

    /// Create an API error from a non-success status and its raw body
    pub fn api(status: u16, body: &str) -> Self {
        let body = serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()));
        Self::Api { status, body }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether the failure happened on the wire rather than in this crate
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Api { .. })
    }

    /// PayPal's `debug_id` for a rejected request, used when contacting support
    pub fn debug_id(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => body.get("debug_id").and_then(Value::as_str),
            _ => None,
        }
    }
}

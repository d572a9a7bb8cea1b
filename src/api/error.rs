//! Remote Data Layer Errors
//!
//! Failures of a single backend request. Messages are kept as strings so the
//! error is `Clone` and works the same with the native and browser clients.

use serde::Deserialize;
use thiserror::Error;

/// Errors returned by [`StoreApi`](super::StoreApi) endpoints
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Connection refused, DNS failure, CORS rejection...
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    /// Backend answered with a non-success status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Build a status error from a raw response body
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            message: error_message(status, body),
        }
    }

    /// Message supplied by the backend, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// Result type for remote calls
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Extract a human readable message from an error response body
///
/// Accepts `{"message": ...}` and `{"error": ...}` JSON bodies, falls back to
/// the raw text and finally to the status code.
pub fn error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed
            .message
            .or(parsed.error)
            .unwrap_or_else(|| format!("HTTP {}", status));
    }

    let text = body.trim();
    if text.is_empty() || text.starts_with('<') {
        format!("HTTP {}", status)
    } else {
        text.to_string()
    }
}

#[cfg(feature = "http-client")]
impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if e.is_builder() {
            ApiError::InvalidRequest(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_json() {
        assert_eq!(error_message(404, r#"{"message":"Product not found"}"#), "Product not found");
        assert_eq!(error_message(400, r#"{"error":"Name is required"}"#), "Name is required");
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!(error_message(500, "boom"), "boom");
        assert_eq!(error_message(502, ""), "HTTP 502");
        assert_eq!(error_message(502, "<html>Bad gateway</html>"), "HTTP 502");
        assert_eq!(error_message(500, "{}"), "HTTP 500");
    }

    #[test]
    fn test_server_message() {
        let err = ApiError::from_response(404, r#"{"message":"Product not found"}"#);
        assert_eq!(err.server_message(), Some("Product not found"));
        assert!(err.is_not_found());
        assert_eq!(ApiError::Timeout.server_message(), None);
    }
}

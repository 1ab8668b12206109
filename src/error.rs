use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when using the Enrich API client
#[derive(Debug, Error)]
pub enum EnrichError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The request did not settle within the configured timeout
    #[error("request timed out after {after:?}")]
    Timeout {
        /// The timeout that elapsed
        after: Duration,
    },

    /// The caller's cancellation token fired before the request settled
    #[error("request cancelled by caller")]
    Cancelled,

    /// API error returned by Enrich
    #[error("API error: {0:?}")]
    Api(ApiErrorObject),

    /// Configuration error (e.g., missing credentials)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// API error object from Enrich
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorObject {
    /// HTTP status code
    #[serde(default)]
    pub status_code: Option<u16>,
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
    /// Error type string
    #[serde(default)]
    pub error: Option<String>,
    /// Request path
    #[serde(default)]
    pub path: Option<String>,
}

impl EnrichError {
    /// Determines if this error is retryable
    ///
    /// Retryable errors include rate limits (429), server-signalled timeouts
    /// (408), conflicts (409), and server errors (5xx).
    /// [`EnrichError::Timeout`] and [`EnrichError::Cancelled`] are never
    /// retried: the timeout is the caller's whole-call budget and a fired
    /// cancellation token stays fired.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(obj) => obj
                .status_code
                .is_some_and(crate::retry::is_retryable_status),
            Self::Reqwest(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout { .. } | Self::Cancelled | Self::Config(_) | Self::Serde(_) => false,
        }
    }

    /// Returns the HTTP status code for API errors, if known
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(obj) => obj.status_code,
            _ => None,
        }
    }
}

/// Maps a serde deserialization error to an `EnrichError` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> EnrichError {
    let snippet = String::from_utf8_lossy(&body[..body.len().min(400)]).to_string();
    EnrichError::Serde(format!("{e}: {snippet}"))
}

/// Deserializes an API error from the response body
///
/// Attempts to parse the error as JSON, falling back to plain text on failure.
#[must_use]
pub fn deserialize_api_error(status: StatusCode, body: &[u8]) -> EnrichError {
    let status_code = Some(status.as_u16());

    if let Ok(mut obj) = serde_json::from_slice::<ApiErrorObject>(body) {
        obj.status_code = status_code;
        return EnrichError::Api(obj);
    }

    // Server may return plain text on 5xx; cap body to avoid log/memory bloat
    EnrichError::Api(ApiErrorObject {
        status_code,
        message: String::from_utf8_lossy(&body[..body.len().min(400)]).into_owned(),
        error: Some(format!("http_{}", status.as_u16())),
        path: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_from_json_body() {
        let body = br#"{"message":"Insufficient credits","error":"payment_required"}"#;
        let err = deserialize_api_error(StatusCode::PAYMENT_REQUIRED, body);
        match err {
            EnrichError::Api(obj) => {
                assert_eq!(obj.status_code, Some(402));
                assert_eq!(obj.message, "Insufficient credits");
                assert_eq!(obj.error.as_deref(), Some("payment_required"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn api_error_from_plain_text() {
        let err = deserialize_api_error(StatusCode::BAD_GATEWAY, b"upstream exploded");
        match err {
            EnrichError::Api(obj) => {
                assert_eq!(obj.status_code, Some(502));
                assert_eq!(obj.message, "upstream exploded");
                assert_eq!(obj.error.as_deref(), Some("http_502"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn cancellation_errors_not_retryable() {
        let timeout = EnrichError::Timeout {
            after: Duration::from_millis(50),
        };
        assert!(!timeout.is_retryable());
        assert!(!EnrichError::Cancelled.is_retryable());
    }

    #[test]
    fn rate_limit_is_retryable() {
        let err = deserialize_api_error(StatusCode::TOO_MANY_REQUESTS, b"{}");
        assert!(err.is_retryable());
        let err = deserialize_api_error(StatusCode::UNAUTHORIZED, b"{}");
        assert!(!err.is_retryable());
    }
}

//! Error types for the pre-evaluator client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx response from the service.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The service answered 2xx but reported `success: false`.
    #[error("Request was not successful: {0}")]
    Unsuccessful(String),

    /// Invalid response format.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection refused.
    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// An argument failed the local checks that mirror the backend schema.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Check if the error means the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Single human-readable message for the evaluation boundary.
    ///
    /// Transport failures and non-2xx responses collapse into one message; the
    /// server-provided text wins when there is one.
    pub fn user_message(&self) -> String {
        match self {
            Self::ApiError { message, .. } | Self::Unsuccessful(message) => {
                if message.trim().is_empty() {
                    self.to_string()
                } else {
                    message.clone()
                }
            }
            Self::HttpError(e) if e.is_timeout() => "timeout".to_string(),
            Self::Timeout(_) => "timeout".to_string(),
            Self::HttpError(e) if e.is_connect() => {
                "could not reach the evaluation service".to_string()
            }
            Self::ConnectionRefused(_) => "could not reach the evaluation service".to_string(),
            Self::InvalidRequest(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16, message: &str) -> ClientError {
        ClientError::ApiError {
            status,
            url: "http://localhost:8000/api/v1/evaluate".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        assert_eq!(api_error(500, "scoring engine offline").user_message(), "scoring engine offline");
        assert_eq!(
            ClientError::Unsuccessful("No hay usuario logueado".to_string()).user_message(),
            "No hay usuario logueado"
        );
    }

    #[test]
    fn test_user_message_blank_server_text_falls_back_to_display() {
        let message = api_error(502, "  ").user_message();
        assert!(message.contains("502"), "unexpected message: {message}");
    }

    #[test]
    fn test_user_message_timeout() {
        assert_eq!(
            ClientError::Timeout(Duration::from_secs(30)).user_message(),
            "timeout"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(api_error(404, "missing").is_not_found());
        assert!(!api_error(400, "bad").is_not_found());
    }
}

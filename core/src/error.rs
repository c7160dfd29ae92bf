//! Error types for the tasks API client.
//!
//! # Design
//! `Http` is the error surfaced for any non-2xx response. Its message is
//! either the server's `detail` field or the generic `"HTTP <status>"`
//! fallback, and `Display` prints the message alone so callers can render it
//! directly. The remaining variants separate transport failures from JSON
//! conversion failures.

use std::fmt;

/// Errors returned by `ApiClient`.
#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `message` is the server's
    /// `detail` field when the error body carries one, otherwise
    /// `"HTTP <status>"`.
    Http { status: u16, message: String },

    /// The HTTP call itself failed before a response was received.
    Transport(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be parsed as the expected JSON.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { message, .. } => write!(f, "{message}"),
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_message_only() {
        let err = ApiError::Http {
            status: 400,
            message: "Bad request".to_string(),
        };
        assert_eq!(err.to_string(), "Bad request");
    }

    #[test]
    fn transport_error_is_prefixed() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "transport error: connection refused");
    }
}

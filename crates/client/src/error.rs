//! Error types for the FFS client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during FFS client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Login configuration lookup or token exchange failed.
    #[error("Authentication failed{}: {message}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
    Authentication {
        status: Option<u16>,
        message: String,
    },

    /// A search parameter is out of range or missing.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Too many values for a single structured query.
    #[error("Too many search values: {count} supplied, the limit is {max} per query")]
    ValueCountExceeded { count: usize, max: usize },

    /// Raw query text is not a JSON object.
    #[error("Failed to parse raw query payload: {0}")]
    PayloadParse(String),

    /// The search endpoint answered with a non-2xx status.
    #[error("Search request failed ({status}) at {url}: {message}")]
    SearchRequest {
        status: u16,
        url: String,
        message: String,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format from the API.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Check if this error was caused by caller input rather than the server.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::ValueCountExceeded { .. } | Self::PayloadParse(_)
        )
    }

    /// Check if this error is a transport failure (connect, timeout, TLS).
    pub fn is_connection_error(&self) -> bool {
        match self {
            Self::Http(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }

    /// Shorthand for an authentication error without an HTTP status.
    pub(crate) fn auth(message: impl Into<String>) -> Self {
        Self::Authentication {
            status: None,
            message: message.into(),
        }
    }
}

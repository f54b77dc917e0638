//! Error types for the engine client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during engine client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// SSO authentication failed.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error response from the engine.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// No session token is available.
    #[error("Session is not open, login required")]
    SessionExpired,

    /// Response body did not have the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL or link.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Expected link or resource is missing.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// TLS trust configuration error.
    #[error("TLS error: {0}")]
    TlsError(String),
}

impl ClientError {
    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::AuthFailed(_)
                | Self::SessionExpired
                | Self::ApiError {
                    status: 401 | 403,
                    ..
                }
        )
    }
}

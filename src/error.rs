//! Error types for Lockstep API operations.

use thiserror::Error;

/// Errors that can occur during Lockstep API operations.
#[derive(Debug, Error)]
pub enum LockstepError {
    /// Configuration is missing or incomplete.
    #[error("Lockstep configuration required: {0}")]
    ConfigMissing(String),

    /// A caller-supplied argument could not be used to build a request.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// API request failed.
    #[error("Lockstep API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Reading a file for upload failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rate limited.
    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },
}

impl LockstepError {
    /// HTTP status code reported by the API, if this error came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status_code, .. } => *status_code,
            Self::RateLimited { .. } => Some(429),
            _ => None,
        }
    }
}

/// Result type alias for Lockstep operations.
pub type Result<T> = core::result::Result<T, LockstepError>;

//! API-specific error types
//!
//! Classifies failures of schedule-service calls and translates them into the
//! domain error the UI layer understands.

use std::time::Duration;

use gagso_domain::{FieldViolation, GagsoError};
use thiserror::Error;

/// Categories of API errors, aligned with how the UI surfaces them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// 400 with field errors - shown inline
    Validation,
    /// 401, 403 - blocking alert
    Authentication,
    /// 404 - empty result
    NotFound,
    /// 429 - retryable
    RateLimit,
    /// 5xx and malformed bodies - retryable
    Server,
    /// Other 4xx - non-retryable
    Client,
    /// Connection errors and timeouts - retryable
    Network,
    /// Configuration errors - non-retryable
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldViolation>),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Validation(_) => ApiErrorCategory::Validation,
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::NotFound(_) => ApiErrorCategory::NotFound,
            Self::RateLimit(_) => ApiErrorCategory::RateLimit,
            Self::Server(_) | Self::Decode(_) => ApiErrorCategory::Server,
            Self::Client(_) => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Whether a manual retry can reasonably succeed
    pub fn should_retry(&self) -> bool {
        matches!(
            self.category(),
            ApiErrorCategory::RateLimit | ApiErrorCategory::Server | ApiErrorCategory::Network
        )
    }

    pub fn is_not_found(&self) -> bool {
        self.category() == ApiErrorCategory::NotFound
    }
}

impl From<GagsoError> for ApiError {
    fn from(err: GagsoError) -> Self {
        match err {
            GagsoError::Validation(violations) => Self::Validation(violations),
            GagsoError::Auth(message) => Self::Auth(message),
            GagsoError::NotFound(message) => Self::NotFound(message),
            GagsoError::Network(message) => Self::Network(message),
            GagsoError::Server(message) | GagsoError::Internal(message) => Self::Server(message),
            GagsoError::InvalidInput(message) => Self::Client(message),
            GagsoError::Config(message) => Self::Config(message),
        }
    }
}

/// Translate into the domain error handed to the UI layer.
///
/// Transport details stay in the variant payload for logs; the UI only shows
/// [`GagsoError::user_message`].
impl From<ApiError> for GagsoError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Validation(violations) => Self::Validation(violations),
            ApiError::Auth(message) => Self::Auth(message),
            ApiError::NotFound(message) => Self::NotFound(message),
            ApiError::RateLimit(message) | ApiError::Server(message) | ApiError::Decode(message) => {
                Self::Server(message)
            }
            ApiError::Client(_) => {
                Self::InvalidInput("The schedule service rejected the request.".to_string())
            }
            ApiError::Network(message) => Self::Network(message),
            ApiError::Timeout(timeout) => Self::Network(format!("timed out after {timeout:?}")),
            ApiError::Config(message) => Self::Config(message),
        }
    }
}

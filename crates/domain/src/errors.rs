//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field-level problem, as reported by client-side validation or by
/// the backend's `{errors: [{field, message}]}` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// How the UI layer is expected to surface an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorDisposition {
    /// 400 - render each message next to its field
    InlineFieldErrors,
    /// 401/403 - blocking alert, no retry
    BlockingAlert,
    /// 404 - render the empty-result state
    EmptyResult,
    /// 5xx, network, timeout - generic banner with a manual retry action
    RetryableBanner,
}

/// Main error type for Gagso
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum GagsoError {
    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldViolation>),

    #[error("Authorization error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GagsoError {
    /// Map the error onto the UI handling category.
    pub fn disposition(&self) -> ErrorDisposition {
        match self {
            Self::Validation(_) | Self::InvalidInput(_) => ErrorDisposition::InlineFieldErrors,
            Self::Auth(_) => ErrorDisposition::BlockingAlert,
            Self::NotFound(_) => ErrorDisposition::EmptyResult,
            Self::Network(_) | Self::Server(_) | Self::Config(_) | Self::Internal(_) => {
                ErrorDisposition::RetryableBanner
            }
        }
    }

    /// Whether the UI should offer a manual retry affordance.
    pub fn is_retryable(&self) -> bool {
        self.disposition() == ErrorDisposition::RetryableBanner
    }

    /// The single human-readable message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(violations) => summarize(violations),
            Self::Auth(_) => "You do not have permission to perform this action.".to_string(),
            Self::NotFound(_) => "The requested schedule could not be found.".to_string(),
            Self::Network(_) => {
                "The schedule service is unreachable. Please try again.".to_string()
            }
            Self::Server(_) | Self::Internal(_) => {
                "The schedule service failed to process the request. Please try again."
                    .to_string()
            }
            Self::InvalidInput(message) | Self::Config(message) => message.clone(),
        }
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    if violations.is_empty() {
        return "request was rejected".to_string();
    }
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for Gagso operations
pub type Result<T> = std::result::Result<T, GagsoError>;

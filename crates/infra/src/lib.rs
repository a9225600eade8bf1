//! # Gagso Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The HTTP transport and the schedule service API client
//! - REST adapters for `ScheduleGateway`, `ScheduleAccessCheck` and
//!   `EmployeeDirectory`
//! - Configuration loading from the environment or files
//!
//! ## Architecture
//! - Implements traits defined in `gagso-core`
//! - Depends on `gagso-domain` and `gagso-core`
//! - Contains all "impure" code (network and filesystem I/O)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{
    ApiClient, ApiClientConfig, ApiError, ApiErrorCategory, HttpEmployeeDirectory,
    HttpScheduleGateway,
};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};

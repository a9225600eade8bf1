//! Schedule service REST adapters
//!
//! [`ApiClient`] owns URL building, the `X-Employee-Id` header, timeouts and
//! status classification. The gateways on top of it implement the
//! `gagso-core` ports and hand back [`gagso_domain::GagsoError`] only.

pub mod client;
pub mod employees;
pub mod errors;
pub mod schedules;

pub use client::{parse_base_url, ApiClient, ApiClientConfig};
pub use employees::{fixture_directory, HttpEmployeeDirectory};
pub use errors::{ApiError, ApiErrorCategory};
pub use schedules::HttpScheduleGateway;

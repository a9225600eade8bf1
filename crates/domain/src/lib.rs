//! # Gagso Domain
//!
//! Business domain types and models for the Gagso schedule client.
//!
//! This crate contains:
//! - Schedule, visibility, employee and calendar data types
//! - The loosely-typed form payload shapes exchanged with the backend
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Date/time helpers shared by the calendar logic
//!
//! ## Architecture
//! - No dependencies on other Gagso crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
// Re-export date helpers used across crates
pub use utils::datetime::{ensure_seconds, local_date_of, parse_local_datetime};

//! # Gagso App
//!
//! Command-line shell over the schedule use cases.
//!
//! This crate contains:
//! - The `gagso` command line definition
//! - Application context (dependency injection)
//! - Command handlers returning serializable reports
//! - Logging setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the HTTP adapters into the core services
//! - Only this crate prints; library crates log through `tracing`

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use cli::{Cli, Command};
pub use context::AppContext;

//! Domain utilities

pub mod datetime;

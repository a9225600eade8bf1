//! Shared test helpers for `gagso-core` integration tests.
//!
//! In-memory port fakes and schedule fixtures so the tests can focus on
//! behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod gateway;

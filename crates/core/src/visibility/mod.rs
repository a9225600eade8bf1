//! Visibility presentation and access

pub mod policy;

pub use policy::{classify, VisibilityBadge, VisibilityPolicy};

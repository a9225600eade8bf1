//! # Gagso Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Calendar grid, day filtering and month navigation
//! - Visibility classification and access decisions
//! - Registration form normalization and validation
//! - Port interfaces (traits) implemented by `gagso-infra`
//!
//! ## Architecture Principles
//! - Only depends on `gagso-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - The current user and the clock are always passed in

pub mod calendar;
pub mod clock;
pub mod employee;
pub mod schedule;
pub mod visibility;

pub use calendar::{build_month_grid, schedules_on, CalendarSession, LoadOutcome};
pub use clock::{Clock, FixedClock, SystemClock};
pub use employee::EmployeeDirectory;
pub use schedule::{
    normalize_form, validate, FieldErrors, RegistrationOutcome, ScheduleAccessCheck,
    ScheduleGateway, ScheduleRegistrationService, ScheduleTiming,
};
pub use visibility::{classify, VisibilityBadge, VisibilityPolicy};

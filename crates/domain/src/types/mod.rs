//! Domain types and models
//!
//! Wire shapes follow the backend's camelCase JSON contract.

pub mod calendar;
pub mod employee;
pub mod fetched;
pub mod form;
pub mod schedule;
pub mod user;
pub mod visibility;

pub use calendar::{CalendarDate, CalendarDay, YearMonth};
pub use employee::Employee;
pub use fetched::Fetched;
pub use form::{RegistrationResponse, ScheduleRegisterRequest, ValidationErrorBody};
pub use schedule::{Schedule, ScheduleStatistics};
pub use user::{CurrentUser, Role};
pub use visibility::{Visibility, VisibilityIcon};

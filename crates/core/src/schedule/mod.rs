//! Schedule registration and presentation

pub mod normalizer;
pub mod ports;
pub mod registration;
pub mod timing;
pub mod validation;

pub use normalizer::normalize_form;
pub use ports::{ScheduleAccessCheck, ScheduleGateway};
pub use registration::{RegistrationOutcome, ScheduleRegistrationService};
pub use timing::{AlarmStatus, ScheduleStatus, ScheduleTiming};
pub use validation::{validate, FieldErrors};

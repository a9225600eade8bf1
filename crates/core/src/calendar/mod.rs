//! Calendar month view

pub mod filter;
pub mod grid;
pub mod session;

pub use filter::{build_month_view, schedules_on};
pub use grid::build_month_grid;
pub use session::{CalendarSession, LoadOutcome, RequestSequencer, Ticket};

//! Command handlers
//!
//! Each handler runs one use case against the [`AppContext`](crate::AppContext)
//! and returns a report that renders as text (`Display`) or JSON (`Serialize`).

pub mod access;
pub mod calendar;
pub mod employees;
pub mod schedules;

use std::future::Future;
use std::time::Instant;

use gagso_domain::Result;

pub use access::{check_access, AccessReport};
pub use calendar::{day_view, month_view, DayReport, MonthReport};
pub use employees::{search_employees, EmployeeReport};
pub use schedules::{
    register_schedule, schedule_statistics, search_schedules, show_schedule, today_schedules,
    upcoming_schedules, RegisterReport, ScheduleDetail, ScheduleLine, ScheduleList,
    StatisticsReport,
};

use crate::utils::logging::{error_label, log_command_execution};

/// Await `command`, logging its duration and outcome.
async fn timed<T>(name: &'static str, command: impl Future<Output = Result<T>>) -> Result<T> {
    let start = Instant::now();
    let result = command.await;
    let error_type = result.as_ref().err().map(error_label);
    log_command_execution(name, start.elapsed(), error_type);
    result
}

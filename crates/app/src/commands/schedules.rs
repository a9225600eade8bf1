//! Schedule lookup and registration commands

use std::fmt;

use chrono::NaiveDateTime;
use gagso_core::schedule::ScheduleStatus;
use gagso_core::{classify, FieldErrors, RegistrationOutcome, ScheduleTiming, VisibilityBadge};
use gagso_domain::{GagsoError, Result, Schedule, ScheduleStatistics};
use serde::Serialize;
use serde_json::Value;

use super::timed;
use crate::AppContext;

/// One schedule as a list row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleLine {
    pub schedule_id: String,
    pub title: String,
    pub date_range: String,
    pub time_range: String,
    pub status: ScheduleStatus,
    pub visibility: VisibilityBadge,
    pub participants: String,
}

impl ScheduleLine {
    pub fn new(schedule: &Schedule, now: NaiveDateTime) -> Self {
        let timing = ScheduleTiming::at(schedule, now);
        Self {
            schedule_id: schedule.id_or_placeholder().to_string(),
            title: schedule.title.clone(),
            date_range: timing.date_range_display,
            time_range: timing.time_range_display,
            status: timing.status,
            visibility: classify(&schedule.visibility),
            participants: timing.participants_display,
        }
    }
}

impl fmt::Display for ScheduleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} {:<23} {:<13} {:<8} {:<7} {}",
            self.schedule_id,
            self.date_range,
            self.time_range,
            self.status.as_str(),
            self.visibility.label,
            self.title
        )
    }
}

/// A titled list of schedules
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleList {
    pub heading: String,
    pub schedules: Vec<ScheduleLine>,
}

impl ScheduleList {
    fn new(heading: impl Into<String>, schedules: &[Schedule], now: NaiveDateTime) -> Self {
        Self {
            heading: heading.into(),
            schedules: schedules.iter().map(|s| ScheduleLine::new(s, now)).collect(),
        }
    }
}

impl fmt::Display for ScheduleList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.heading, self.schedules.len())?;
        if self.schedules.is_empty() {
            return write!(f, "No schedules.");
        }
        write_lines(f, &self.schedules)
    }
}

pub(crate) fn write_lines(f: &mut fmt::Formatter<'_>, lines: &[ScheduleLine]) -> fmt::Result {
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            writeln!(f)?;
        }
        write!(f, "{line}")?;
    }
    Ok(())
}

/// Full view of one schedule
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDetail {
    pub schedule: Schedule,
    pub timing: ScheduleTiming,
    pub visibility: VisibilityBadge,
    pub participant_names: Vec<String>,
}

impl fmt::Display for ScheduleDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.schedule;
        writeln!(f, "{} [{}]", s.title, s.id_or_placeholder())?;
        writeln!(f, "  when:         {} {}", self.timing.date_range_display, self.timing.time_range_display)?;
        writeln!(f, "  status:       {} ({})", self.timing.status, self.timing.duration_display)?;
        if self.timing.status == ScheduleStatus::Upcoming {
            writeln!(f, "  starts in:    {} min", self.timing.minutes_until_start)?;
        } else if self.timing.status == ScheduleStatus::Ongoing {
            writeln!(f, "  progress:     {}%", self.timing.progress_percentage)?;
        }
        writeln!(f, "  visibility:   {} ({})", self.visibility.label, self.visibility.icon.as_str())?;
        writeln!(f, "  alarm:        {}", self.timing.alarm_status)?;
        writeln!(f, "  author:       {}", s.author().unwrap_or("-"))?;
        let names: &[String] =
            if self.participant_names.is_empty() { &s.participants } else { &self.participant_names };
        write!(f, "  participants: {}", gagso_core::schedule::timing::participants_display(names))?;
        if !s.description.is_empty() {
            write!(f, "\n\n{}", s.description)?;
        }
        Ok(())
    }
}

/// Result of a registration attempt
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum RegisterReport {
    Created { schedule: ScheduleLine },
    Rejected { errors: FieldErrors },
}

impl RegisterReport {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

impl fmt::Display for RegisterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { schedule } => write!(f, "Schedule registered.\n{schedule}"),
            Self::Rejected { errors } => {
                write!(f, "Schedule was not registered:")?;
                for violation in errors.iter() {
                    write!(f, "\n  {}: {}", violation.field, violation.message)?;
                }
                Ok(())
            }
        }
    }
}

/// Counters from the statistics endpoint
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct StatisticsReport(pub ScheduleStatistics);

impl fmt::Display for StatisticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total: {}\ntoday: {}\nupcoming: {}",
            self.0.total_count, self.0.today_count, self.0.upcoming_count
        )
    }
}

/// Schedule detail with timing, badge and participant names.
///
/// # Errors
///
/// `GagsoError::NotFound` when the backend does not know `schedule_id`.
pub async fn show_schedule(ctx: &AppContext, schedule_id: &str) -> Result<ScheduleDetail> {
    timed("schedules::show", async {
        let schedule = ctx
            .schedules
            .get(&ctx.user, schedule_id)
            .await?
            .ok_or_else(|| GagsoError::NotFound(format!("schedule {schedule_id}")))?;
        let participant_names = ctx.schedules.participants(&ctx.user, schedule_id).await?;
        Ok(ScheduleDetail {
            timing: ScheduleTiming::at(&schedule, ctx.now()),
            visibility: ctx.visibility.badge(&schedule),
            participant_names,
            schedule,
        })
    })
    .await
}

/// Normalize, validate and submit a registration form.
pub async fn register_schedule(ctx: &AppContext, form: &Value) -> Result<RegisterReport> {
    timed("schedules::register", async {
        let report = match ctx.registration.register(&ctx.user, form).await? {
            RegistrationOutcome::Created(schedule) => {
                RegisterReport::Created { schedule: ScheduleLine::new(&schedule, ctx.now()) }
            }
            RegistrationOutcome::Rejected(errors) => RegisterReport::Rejected { errors },
        };
        Ok(report)
    })
    .await
}

pub async fn search_schedules(ctx: &AppContext, keyword: &str) -> Result<ScheduleList> {
    timed("schedules::search", async {
        let schedules = ctx.schedules.search(&ctx.user, keyword).await?;
        Ok(ScheduleList::new(format!("Schedules matching \"{}\"", keyword.trim()), &schedules, ctx.now()))
    })
    .await
}

pub async fn today_schedules(ctx: &AppContext) -> Result<ScheduleList> {
    timed("schedules::today", async {
        let schedules = ctx.schedules.today(&ctx.user).await?;
        Ok(ScheduleList::new("Today", &schedules, ctx.now()))
    })
    .await
}

pub async fn upcoming_schedules(ctx: &AppContext) -> Result<ScheduleList> {
    timed("schedules::upcoming", async {
        let schedules = ctx.schedules.upcoming(&ctx.user).await?;
        Ok(ScheduleList::new("Upcoming", &schedules, ctx.now()))
    })
    .await
}

pub async fn schedule_statistics(ctx: &AppContext) -> Result<StatisticsReport> {
    timed("schedules::statistics", async {
        Ok(StatisticsReport(ctx.schedules.statistics(&ctx.user).await?))
    })
    .await
}

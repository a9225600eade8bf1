//! Month grid and day list commands

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use gagso_core::{CalendarSession, LoadOutcome};
use gagso_domain::constants::DAYS_PER_WEEK;
use gagso_domain::{CalendarDay, GagsoError, Result, YearMonth};
use serde::Serialize;

use super::schedules::{write_lines, ScheduleLine};
use super::timed;
use crate::AppContext;

/// One cell of the month grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    pub outside_current_month: bool,
    pub is_today: bool,
    pub schedule_count: usize,
}

impl From<&CalendarDay> for DayCell {
    fn from(day: &CalendarDay) -> Self {
        Self {
            date: day.date,
            outside_current_month: day.outside_current_month,
            is_today: day.is_today,
            schedule_count: day.schedules.len(),
        }
    }
}

/// Six-week grid of a month plus the schedules inside it
#[derive(Debug, Clone, Serialize)]
pub struct MonthReport {
    pub month: YearMonth,
    pub weeks: Vec<Vec<DayCell>>,
    pub schedules: Vec<ScheduleLine>,
}

impl MonthReport {
    fn build(month: YearMonth, days: &[CalendarDay], now: NaiveDateTime) -> Self {
        let weeks = days.chunks(DAYS_PER_WEEK).map(|week| week.iter().map(DayCell::from).collect()).collect();
        let schedules = days
            .iter()
            .filter(|day| !day.outside_current_month)
            .flat_map(|day| day.schedules.iter().map(move |s| ScheduleLine::new(s, now)))
            .collect();
        Self { month, weeks, schedules }
    }
}

impl fmt::Display for MonthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.month)?;
        writeln!(f, "  Su  Mo  Tu  We  Th  Fr  Sa")?;
        for week in &self.weeks {
            for cell in week {
                let day = cell.date.day();
                if cell.outside_current_month {
                    write!(f, "    ")?;
                } else if cell.is_today {
                    write!(f, "[{day:>2}]")?;
                } else {
                    let marker = if cell.schedule_count > 0 { '*' } else { ' ' };
                    write!(f, " {day:>2}{marker}")?;
                }
            }
            writeln!(f)?;
        }
        if self.schedules.is_empty() {
            return write!(f, "\nNo schedules this month.");
        }
        writeln!(f)?;
        write_lines(f, &self.schedules)
    }
}

/// Schedules starting on one day
#[derive(Debug, Clone, Serialize)]
pub struct DayReport {
    pub date: NaiveDate,
    pub schedules: Vec<ScheduleLine>,
}

impl fmt::Display for DayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.date.format("%Y-%m-%d (%a)"))?;
        if self.schedules.is_empty() {
            return write!(f, "No schedules.");
        }
        write_lines(f, &self.schedules)
    }
}

/// Load `month` into a fresh session.
async fn load(ctx: &AppContext, month: YearMonth) -> Result<CalendarSession> {
    let session = ctx.calendar_session(month);
    if let LoadOutcome::Failed { message, .. } = session.load_month(month).await {
        return Err(session.last_error().await.unwrap_or(GagsoError::Internal(message)));
    }
    Ok(session)
}

pub async fn month_view(ctx: &AppContext, month: YearMonth) -> Result<MonthReport> {
    timed("calendar::month", async {
        let session = load(ctx, month).await?;
        let days = session.month_view().await;
        Ok(MonthReport::build(month, &days, ctx.now()))
    })
    .await
}

/// Loads the month containing `date` and filters it to that day.
pub async fn day_view(ctx: &AppContext, date: NaiveDate) -> Result<DayReport> {
    timed("calendar::day", async {
        let session = load(ctx, YearMonth::of(date)).await?;
        let now = ctx.now();
        let schedules = session.day(date).await.iter().map(|s| ScheduleLine::new(s, now)).collect();
        Ok(DayReport { date, schedules })
    })
    .await
}

#[cfg(test)]
mod tests {
    use gagso_core::calendar::build_month_view;
    use gagso_domain::Schedule;

    use super::*;

    #[test]
    fn renders_grid_with_today_and_markers() {
        let month = YearMonth::new(2025, 6).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        let schedules = vec![Schedule {
            schedule_id: Some("S-1".into()),
            title: "Kickoff".into(),
            start_date: Some("2025-06-10T10:00:00".into()),
            visibility: "PUBLIC".into(),
            ..Default::default()
        }];
        let days = build_month_view(month, &schedules, today);
        let report = MonthReport::build(month, &days, today.and_hms_opt(9, 0, 0).unwrap());

        assert_eq!(report.weeks.len(), 6);
        assert!(report.weeks.iter().all(|week| week.len() == 7));
        assert_eq!(report.schedules.len(), 1);

        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "2025-06");
        assert_eq!(lines[2], "  1   2 [ 3]  4   5   6   7 ");
        assert!(lines[3].contains(" 10*"));
        assert!(text.contains("Kickoff"));
    }
}

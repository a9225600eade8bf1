//! Day-level schedule selection

use chrono::NaiveDate;
use gagso_domain::{CalendarDay, Schedule, YearMonth};
use tracing::warn;

use super::grid::build_month_grid;

/// Schedules whose start falls on `date`, ignoring time-of-day.
///
/// Records with a missing or unparseable start are skipped and logged.
/// Input order is preserved.
pub fn schedules_on(schedules: &[Schedule], date: NaiveDate) -> Vec<Schedule> {
    schedules.iter().filter(|schedule| starts_on(schedule, date)).cloned().collect()
}

fn starts_on(schedule: &Schedule, date: NaiveDate) -> bool {
    match schedule.start_day() {
        Some(day) => day == date,
        None => {
            warn!(
                schedule_id = schedule.id_or_placeholder(),
                start_date = schedule.start_date.as_deref().unwrap_or("<missing>"),
                "Skipping schedule with missing or unparseable start date"
            );
            false
        }
    }
}

/// Assemble the full month view from the grid and the loaded schedules.
///
/// Rebuilt from scratch on every call.
pub fn build_month_view(
    month: YearMonth,
    schedules: &[Schedule],
    today: NaiveDate,
) -> Vec<CalendarDay> {
    let (dated, undated): (Vec<_>, Vec<_>) =
        schedules.iter().map(|s| (s.start_day(), s)).partition(|(day, _)| day.is_some());

    for (_, schedule) in &undated {
        warn!(
            schedule_id = schedule.id_or_placeholder(),
            start_date = schedule.start_date.as_deref().unwrap_or("<missing>"),
            "Skipping schedule with missing or unparseable start date"
        );
    }

    build_month_grid(month)
        .into_iter()
        .map(|cell| CalendarDay {
            date: cell.date,
            outside_current_month: cell.outside_current_month,
            is_today: cell.date == today,
            schedules: dated
                .iter()
                .filter(|(day, _)| *day == Some(cell.date))
                .map(|(_, s)| (*s).clone())
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(id: &str, start: Option<&str>) -> Schedule {
        Schedule {
            schedule_id: Some(id.to_string()),
            title: id.to_string(),
            start_date: start.map(str::to_string),
            ..Default::default()
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn late_evening_start_stays_on_its_day() {
        let schedules = vec![schedule("late", Some("2025-06-25T23:50:00"))];
        let matched = schedules_on(&schedules, ymd(2025, 6, 25));
        assert_eq!(matched.len(), 1);
        assert!(schedules_on(&schedules, ymd(2025, 6, 26)).is_empty());
    }

    #[test]
    fn time_of_day_and_offset_do_not_matter() {
        let schedules = vec![
            schedule("midnight", Some("2025-06-25T00:00:00")),
            schedule("form", Some("2025-06-25T10:00")),
            schedule("offset", Some("2025-06-25T23:30:00+09:00")),
            schedule("next", Some("2025-06-26T00:00:00")),
        ];
        let ids: Vec<_> = schedules_on(&schedules, ymd(2025, 6, 25))
            .into_iter()
            .filter_map(|s| s.schedule_id)
            .collect();
        assert_eq!(ids, vec!["midnight", "form", "offset"]);
    }

    #[test]
    fn missing_and_garbage_starts_are_excluded() {
        let schedules = vec![
            schedule("none", None),
            schedule("garbage", Some("not-a-date")),
            schedule("ok", Some("2025-06-25T09:00:00")),
        ];
        let matched = schedules_on(&schedules, ymd(2025, 6, 25));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].schedule_id.as_deref(), Some("ok"));
    }

    #[test]
    fn month_view_places_schedules_and_marks_today() {
        let schedules = vec![
            schedule("a", Some("2025-06-25T10:00:00")),
            schedule("b", Some("2025-07-01T08:00:00")),
            schedule("c", Some("2025-08-15T08:00:00")),
            schedule("bad", Some("??")),
        ];
        let view =
            build_month_view(YearMonth::new(2025, 6).unwrap(), &schedules, ymd(2025, 6, 10));
        assert_eq!(view.len(), 42);

        let day = view.iter().find(|d| d.date == ymd(2025, 6, 25)).unwrap();
        assert_eq!(day.schedules.len(), 1);

        let trailing = view.iter().find(|d| d.date == ymd(2025, 7, 1)).unwrap();
        assert!(trailing.outside_current_month);
        assert_eq!(trailing.schedules.len(), 1);

        assert_eq!(view.iter().filter(|d| d.is_today).count(), 1);
        assert_eq!(view.iter().map(|d| d.schedules.len()).sum::<usize>(), 2);
    }
}

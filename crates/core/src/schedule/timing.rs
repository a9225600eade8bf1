//! Time-relative presentation of a schedule

use chrono::NaiveDateTime;
use gagso_domain::constants::{PARTICIPANTS_DISPLAY_LIMIT, WIRE_DATE_FORMAT};
use gagso_domain::{impl_wire_enum_conversions, Schedule};
use serde::{Deserialize, Serialize};

/// Where a schedule sits relative to "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScheduleStatus {
    Past,
    Ongoing,
    Upcoming,
    /// Start or end is missing or unparseable
    Unknown,
}

impl_wire_enum_conversions!(ScheduleStatus {
    Past => "PAST",
    Ongoing => "ONGOING",
    Upcoming => "UPCOMING",
    Unknown => "UNKNOWN",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlarmStatus {
    None,
    Scheduled,
    Sent,
}

impl_wire_enum_conversions!(AlarmStatus {
    None => "NONE",
    Scheduled => "SCHEDULED",
    Sent => "SENT",
});

/// Derived, display-ready timing facts for one schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleTiming {
    pub status: ScheduleStatus,
    pub duration_minutes: i64,
    pub duration_display: String,
    pub minutes_until_start: i64,
    pub progress_percentage: u8,
    pub alarm_status: AlarmStatus,
    pub participants_display: String,
    pub date_range_display: String,
    pub time_range_display: String,
}

impl ScheduleTiming {
    pub fn at(schedule: &Schedule, now: NaiveDateTime) -> Self {
        let start = schedule.start();
        let end = schedule.end();
        let duration_minutes = duration_minutes(start, end);

        Self {
            status: status(start, end, now),
            duration_minutes,
            duration_display: duration_display(duration_minutes),
            minutes_until_start: start.map_or(0, |s| (s - now).num_minutes().max(0)),
            progress_percentage: progress(start, end, now),
            alarm_status: alarm_status(schedule, now),
            participants_display: participants_display(&schedule.participants),
            date_range_display: date_range_display(start, end),
            time_range_display: time_range_display(start, end),
        }
    }
}

pub fn status(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> ScheduleStatus {
    match (start, end) {
        (_, Some(end)) if end < now => ScheduleStatus::Past,
        (Some(start), Some(end)) if start <= now && now < end => ScheduleStatus::Ongoing,
        (Some(start), _) if start > now => ScheduleStatus::Upcoming,
        _ => ScheduleStatus::Unknown,
    }
}

fn duration_minutes(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => (end - start).num_minutes().max(0),
        _ => 0,
    }
}

/// "1h 30m", "45m", "2h"; "unscheduled" for zero.
pub fn duration_display(minutes: i64) -> String {
    if minutes <= 0 {
        return "unscheduled".to_string();
    }
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

fn progress(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>, now: NaiveDateTime) -> u8 {
    let (Some(start), Some(end)) = (start, end) else {
        return 0;
    };
    if now < start {
        return 0;
    }
    let total = (end - start).num_minutes();
    if now >= end || total <= 0 {
        return 100;
    }
    let elapsed = (now - start).num_minutes();
    u8::try_from(elapsed * 100 / total).unwrap_or(100)
}

fn alarm_status(schedule: &Schedule, now: NaiveDateTime) -> AlarmStatus {
    if !schedule.alarm_enabled {
        return AlarmStatus::None;
    }
    match schedule.alarm_at() {
        None => AlarmStatus::None,
        Some(alarm) if alarm < now => AlarmStatus::Sent,
        Some(_) => AlarmStatus::Scheduled,
    }
}

pub fn participants_display(participants: &[String]) -> String {
    if participants.is_empty() {
        return "none".to_string();
    }
    let shown = participants[..participants.len().min(PARTICIPANTS_DISPLAY_LIMIT)].join(", ");
    match participants.len().saturating_sub(PARTICIPANTS_DISPLAY_LIMIT) {
        0 => shown,
        rest => format!("{shown} +{rest} more"),
    }
}

fn date_range_display(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> String {
    let Some(start) = start else {
        return String::new();
    };
    let first = start.format(WIRE_DATE_FORMAT).to_string();
    match end {
        Some(end) if end.date() != start.date() => {
            format!("{first} ~ {}", end.format(WIRE_DATE_FORMAT))
        }
        _ => first,
    }
}

fn time_range_display(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> String {
    let Some(start) = start else {
        return String::new();
    };
    match end {
        Some(end) => format!("{} - {}", start.format("%H:%M"), end.format("%H:%M")),
        None => start.format("%H:%M").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn schedule(start: &str, end: &str) -> Schedule {
        Schedule {
            start_date: Some(start.into()),
            end_date: Some(end.into()),
            ..Default::default()
        }
    }

    #[test]
    fn status_transitions() {
        let s = schedule("2025-06-25T10:00:00", "2025-06-25T11:30:00");
        assert_eq!(ScheduleTiming::at(&s, at(25, 9, 0)).status, ScheduleStatus::Upcoming);
        assert_eq!(ScheduleTiming::at(&s, at(25, 10, 0)).status, ScheduleStatus::Ongoing);
        assert_eq!(ScheduleTiming::at(&s, at(25, 11, 30)).status, ScheduleStatus::Unknown);
        assert_eq!(ScheduleTiming::at(&s, at(25, 12, 0)).status, ScheduleStatus::Past);

        let broken = schedule("later", "");
        assert_eq!(ScheduleTiming::at(&broken, at(25, 9, 0)).status, ScheduleStatus::Unknown);
    }

    #[test]
    fn durations_render_compactly() {
        assert_eq!(duration_display(90), "1h 30m");
        assert_eq!(duration_display(45), "45m");
        assert_eq!(duration_display(120), "2h");
        assert_eq!(duration_display(0), "unscheduled");

        let s = schedule("2025-06-25T10:00:00", "2025-06-25T11:30:00");
        let timing = ScheduleTiming::at(&s, at(25, 9, 0));
        assert_eq!(timing.duration_minutes, 90);
        assert_eq!(timing.minutes_until_start, 60);
        assert_eq!(timing.time_range_display, "10:00 - 11:30");
        assert_eq!(timing.date_range_display, "2025-06-25");
    }

    #[test]
    fn progress_is_clamped() {
        let s = schedule("2025-06-25T10:00:00", "2025-06-25T12:00:00");
        assert_eq!(ScheduleTiming::at(&s, at(25, 9, 0)).progress_percentage, 0);
        assert_eq!(ScheduleTiming::at(&s, at(25, 11, 0)).progress_percentage, 50);
        assert_eq!(ScheduleTiming::at(&s, at(26, 0, 0)).progress_percentage, 100);
        assert_eq!(ScheduleTiming::at(&s, at(25, 11, 0)).minutes_until_start, 0);
    }

    #[test]
    fn multi_day_range() {
        let s = schedule("2025-06-25T10:00:00", "2025-06-27T09:00:00");
        assert_eq!(
            ScheduleTiming::at(&s, at(1, 0, 0)).date_range_display,
            "2025-06-25 ~ 2025-06-27"
        );
    }

    #[test]
    fn alarm_states() {
        let mut s = schedule("2025-06-25T10:00:00", "2025-06-25T12:00:00");
        assert_eq!(ScheduleTiming::at(&s, at(25, 8, 0)).alarm_status, AlarmStatus::None);

        s.alarm_enabled = true;
        assert_eq!(ScheduleTiming::at(&s, at(25, 8, 0)).alarm_status, AlarmStatus::None);

        s.alarm_time = Some("2025-06-25T09:30:00".into());
        assert_eq!(ScheduleTiming::at(&s, at(25, 8, 0)).alarm_status, AlarmStatus::Scheduled);
        assert_eq!(ScheduleTiming::at(&s, at(25, 9, 45)).alarm_status, AlarmStatus::Sent);
    }

    #[test]
    fn participant_summary() {
        let names = |n: usize| (1..=n).map(|i| format!("P{i}")).collect::<Vec<_>>();
        assert_eq!(participants_display(&[]), "none");
        assert_eq!(participants_display(&names(3)), "P1, P2, P3");
        assert_eq!(participants_display(&names(5)), "P1, P2, P3 +2 more");
    }
}

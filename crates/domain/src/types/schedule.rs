//! Schedule records as exchanged with the backend

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::Visibility;
use crate::utils::datetime::{local_date_of, parse_local_datetime};

/// A schedule as returned by the backend.
///
/// Timestamps and visibility are kept as the raw wire strings. Records with
/// malformed values still deserialize; the calendar logic decides how to
/// treat them (see [`Schedule::start`] and [`Schedule::visibility`]).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(default)]
    pub schedule_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub visibility: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alarm_enabled: bool,
    #[serde(default)]
    pub alarm_time: Option<String>,
    /// Author of the schedule
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participant_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Schedule {
    /// Identifier for log fields; `"<unsaved>"` when the backend sent none.
    pub fn id_or_placeholder(&self) -> &str {
        self.schedule_id.as_deref().unwrap_or("<unsaved>")
    }

    /// Author id, preferring `employeeId` over `createdBy`.
    pub fn author(&self) -> Option<&str> {
        self.employee_id.as_deref().or(self.created_by.as_deref())
    }

    pub fn start(&self) -> Option<NaiveDateTime> {
        self.start_date.as_deref().and_then(parse_local_datetime)
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        self.end_date.as_deref().and_then(parse_local_datetime)
    }

    pub fn alarm_at(&self) -> Option<NaiveDateTime> {
        self.alarm_time.as_deref().and_then(parse_local_datetime)
    }

    /// Calendar day the schedule starts on.
    pub fn start_day(&self) -> Option<NaiveDate> {
        self.start_date.as_deref().and_then(local_date_of)
    }

    /// Recognized visibility, or `None` when the wire value is unknown.
    pub fn visibility(&self) -> Option<Visibility> {
        Visibility::from_wire(&self.visibility)
    }

    pub fn is_participant(&self, employee_id: &str) -> bool {
        self.participant_ids.iter().any(|id| id == employee_id)
    }
}

/// Per-user counters from `/api/schedules/statistics`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStatistics {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub today_count: u64,
    #[serde(default)]
    pub upcoming_count: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_nulls_and_unknown_fields() {
        let json = r#"{
            "scheduleId": "S-1",
            "title": null,
            "description": null,
            "startDate": "2025-06-25T10:00:00",
            "endDate": null,
            "visibility": "DEPARTMENT",
            "alarmEnabled": null,
            "participants": null,
            "status": "UPCOMING"
        }"#;
        let schedule: Schedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.title, "");
        assert!(!schedule.alarm_enabled);
        assert!(schedule.participants.is_empty());
        assert_eq!(schedule.visibility(), Some(Visibility::Group));
        assert_eq!(schedule.start_day(), NaiveDate::from_ymd_opt(2025, 6, 25));
        assert!(schedule.end().is_none());
    }

    #[test]
    fn unparseable_start_is_none() {
        let schedule = Schedule { start_date: Some("soon".into()), ..Default::default() };
        assert!(schedule.start().is_none());
        assert!(schedule.start_day().is_none());
    }

    #[test]
    fn author_prefers_employee_id() {
        let schedule = Schedule {
            employee_id: Some("E1".into()),
            created_by: Some("E9".into()),
            ..Default::default()
        };
        assert_eq!(schedule.author(), Some("E1"));
        let legacy = Schedule { created_by: Some("E9".into()), ..Default::default() };
        assert_eq!(legacy.author(), Some("E9"));
        assert_eq!(legacy.id_or_placeholder(), "<unsaved>");
    }

    #[test]
    fn statistics_from_backend_shape() {
        let stats: ScheduleStatistics =
            serde_json::from_str(r#"{"totalCount":12,"todayCount":2,"upcomingCount":5}"#).unwrap();
        assert_eq!(stats.upcoming_count, 5);
    }
}

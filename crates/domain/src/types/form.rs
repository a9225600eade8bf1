//! Registration payloads

use serde::{Deserialize, Serialize};

use super::Schedule;
use crate::errors::FieldViolation;

/// Canonical body of `POST /api/schedules`.
///
/// Produced only by the form normalizer; every field the backend reads is
/// always present. Missing dates and a disabled alarm's `alarmTime` are
/// serialized as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRegisterRequest {
    pub title: String,
    pub description: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub visibility: String,
    pub alarm_enabled: bool,
    pub alarm_time: Option<String>,
    pub participant_ids: Vec<String>,
}

/// Body of a 400 response: `{errors: [{field, message}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    #[serde(default)]
    pub errors: Vec<FieldViolation>,
}

/// Body of a successful registration.
///
/// The backend wraps the created record as `{result, schedule, ...}`; older
/// deployments return the bare schedule. Both decode here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RegistrationResponse {
    Wrapped { schedule: Schedule },
    Bare(Schedule),
}

impl RegistrationResponse {
    pub fn into_schedule(self) -> Schedule {
        match self {
            Self::Wrapped { schedule } | Self::Bare(schedule) => schedule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case_with_null_alarm() {
        let request = ScheduleRegisterRequest {
            title: "Standup".into(),
            start_date: Some("2025-06-25T10:00:00".into()),
            visibility: "PUBLIC".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["startDate"], "2025-06-25T10:00:00");
        assert!(json["alarmTime"].is_null());
        assert!(json["endDate"].is_null());
        assert_eq!(json["participantIds"], serde_json::json!([]));
    }

    #[test]
    fn validation_body_decodes() {
        let body: ValidationErrorBody = serde_json::from_str(
            r#"{"result":false,"errors":[{"field":"title","message":"required"}]}"#,
        )
        .unwrap();
        assert_eq!(body.errors, vec![FieldViolation::new("title", "required")]);
    }

    #[test]
    fn registration_response_accepts_both_shapes() {
        let wrapped: RegistrationResponse =
            serde_json::from_str(r#"{"result":true,"schedule":{"scheduleId":"S-9","title":"A"}}"#)
                .unwrap();
        assert_eq!(wrapped.into_schedule().schedule_id.as_deref(), Some("S-9"));

        let bare: RegistrationResponse =
            serde_json::from_str(r#"{"scheduleId":"S-10","title":"B"}"#).unwrap();
        assert_eq!(bare.into_schedule().title, "B");
    }
}

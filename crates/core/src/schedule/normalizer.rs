//! Form state to registration payload mapping
//!
//! The single translation point between the loosely-typed form state and
//! the backend's registration contract. Field renames handled here:
//!
//! | form state              | payload          |
//! |-------------------------|------------------|
//! | `startDateTime`         | `startDate`      |
//! | `endDateTime`           | `endDate`        |
//! | `isAlarmEnabled`        | `alarmEnabled`   |
//! | `selectedParticipants`  | `participantIds` |
//!
//! The canonical payload names are accepted as input too, which makes
//! normalization idempotent.

use gagso_domain::{ensure_seconds, ScheduleRegisterRequest, Visibility};
use serde_json::Value;

const TITLE_KEYS: &[&str] = &["title"];
const DESCRIPTION_KEYS: &[&str] = &["description"];
const START_KEYS: &[&str] = &["startDate", "startDateTime"];
const END_KEYS: &[&str] = &["endDate", "endDateTime"];
const ALARM_ENABLED_KEYS: &[&str] = &["alarmEnabled", "isAlarmEnabled"];
const ALARM_TIME_KEYS: &[&str] = &["alarmTime"];
const PARTICIPANT_KEYS: &[&str] = &["selectedParticipants", "participantIds"];
const PARTICIPANT_ID_KEYS: &[&str] = &["employeeId", "id", "participantId"];

/// Build the registration payload from raw form state.
///
/// Total: any JSON value is accepted and a best-effort payload returned.
/// Rejecting bad input is left to validation and the backend.
pub fn normalize_form(form: &Value) -> ScheduleRegisterRequest {
    let alarm_enabled = first(form, ALARM_ENABLED_KEYS).is_some_and(coerce_bool);
    let alarm_time = if alarm_enabled { datetime_field(form, ALARM_TIME_KEYS) } else { None };

    ScheduleRegisterRequest {
        title: text_field(form, TITLE_KEYS).unwrap_or_default(),
        description: text_field(form, DESCRIPTION_KEYS).unwrap_or_default(),
        start_date: datetime_field(form, START_KEYS),
        end_date: datetime_field(form, END_KEYS),
        visibility: normalize_visibility(first(form, &["visibility"])),
        alarm_enabled,
        alarm_time,
        participant_ids: participant_ids(form),
    }
}

/// Canonical visibility wire value.
///
/// Missing, null, non-string and blank values become `PUBLIC`; the
/// `DEPARTMENT` synonym becomes `GROUP`; anything else is upper-cased and
/// passed through.
pub fn normalize_visibility(raw: Option<&Value>) -> String {
    let Some(Value::String(text)) = raw else {
        return Visibility::Public.as_str().to_string();
    };
    let text = text.trim();
    if text.is_empty() {
        return Visibility::Public.as_str().to_string();
    }
    match Visibility::from_wire(text) {
        Some(visibility) => visibility.as_str().to_string(),
        None => text.to_uppercase(),
    }
}

/// Strict boolean from a checkbox-ish value.
///
/// `true`, non-zero numbers and the strings `true`/`1`/`yes`/`on` are true;
/// everything else, including null, is false.
pub fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => {
            matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on")
        }
        _ => false,
    }
}

/// First non-null value among `keys`.
fn first<'a>(form: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().filter_map(|key| form.get(key)).find(|value| !value.is_null())
}

fn text_field(form: &Value, keys: &[&str]) -> Option<String> {
    first(form, keys).and_then(scalar_text)
}

fn datetime_field(form: &Value, keys: &[&str]) -> Option<String> {
    text_field(form, keys).map(|raw| ensure_seconds(&raw)).filter(|value| !value.is_empty())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn participant_ids(form: &Value) -> Vec<String> {
    let Some(Value::Array(items)) = first(form, PARTICIPANT_KEYS) else {
        return Vec::new();
    };

    let mut ids: Vec<String> = Vec::with_capacity(items.len());
    for id in items.iter().filter_map(participant_id) {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

fn participant_id(item: &Value) -> Option<String> {
    let raw = match item {
        Value::Object(_) => first(item, PARTICIPANT_ID_KEYS).and_then(scalar_text),
        other => scalar_text(other),
    }?;
    let id = raw.trim();
    (!id.is_empty()).then(|| id.to_string())
}

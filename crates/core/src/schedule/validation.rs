//! Submit-time validation of a normalized registration payload
//!
//! Every rule runs; violations are collected rather than failing fast. The
//! first message recorded for a field wins.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use gagso_domain::constants::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};
use gagso_domain::{parse_local_datetime, FieldViolation, ScheduleRegisterRequest};
use serde::Serialize;

pub const FIELD_TITLE: &str = "title";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_START: &str = "startDate";
pub const FIELD_END: &str = "endDate";
pub const FIELD_ALARM: &str = "alarmTime";

/// Field to message mapping; empty means the payload may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    violations: Vec<FieldViolation>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation unless the field already has one.
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.violations.push(FieldViolation::new(field, message));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.violations.iter().find(|v| v.field == field).map(|v| v.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.violations.iter()
    }

    pub fn as_map(&self) -> BTreeMap<&str, &str> {
        self.violations.iter().map(|v| (v.field.as_str(), v.message.as_str())).collect()
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.violations
    }
}

impl From<Vec<FieldViolation>> for FieldErrors {
    fn from(violations: Vec<FieldViolation>) -> Self {
        let mut errors = Self::new();
        for violation in violations {
            errors.insert(&violation.field, violation.message);
        }
        errors
    }
}

/// Check `request` against `now`.
pub fn validate(request: &ScheduleRegisterRequest, now: NaiveDateTime) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let title = request.title.trim();
    if title.is_empty() {
        errors.insert(FIELD_TITLE, "Title is required.");
    } else if title.chars().count() > MAX_TITLE_LENGTH {
        errors.insert(FIELD_TITLE, format!("Title must be at most {MAX_TITLE_LENGTH} characters."));
    }

    if request.description.chars().count() > MAX_DESCRIPTION_LENGTH {
        errors.insert(
            FIELD_DESCRIPTION,
            format!("Description must be at most {MAX_DESCRIPTION_LENGTH} characters."),
        );
    }

    let start = timestamp(&mut errors, FIELD_START, "Start time", request.start_date.as_deref());
    if let Some(start) = start {
        if start <= now {
            errors.insert(FIELD_START, "Start time must be in the future.");
        }
    }

    let end = timestamp(&mut errors, FIELD_END, "End time", request.end_date.as_deref());
    if let Some(end) = end {
        if start.is_some_and(|start| end <= start) {
            errors.insert(FIELD_END, "End time must be after the start time.");
        }
        if end <= now {
            errors.insert(FIELD_END, "End time must be in the future.");
        }
    }

    if request.alarm_enabled {
        let alarm = timestamp(&mut errors, FIELD_ALARM, "Alarm time", request.alarm_time.as_deref());
        if let Some(alarm) = alarm {
            if alarm <= now {
                errors.insert(FIELD_ALARM, "Alarm time must be in the future.");
            } else if start.is_some_and(|start| alarm >= start) {
                errors.insert(FIELD_ALARM, "Alarm time must be before the start time.");
            }
        }
    }

    errors
}

/// Parse a required timestamp, recording "required" or "invalid" errors.
fn timestamp(
    errors: &mut FieldErrors,
    field: &str,
    label: &str,
    raw: Option<&str>,
) -> Option<NaiveDateTime> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        errors.insert(field, format!("{label} is required."));
        return None;
    };
    let parsed = parse_local_datetime(raw);
    if parsed.is_none() {
        errors.insert(field, format!("{label} has an invalid format."));
    }
    parsed
}

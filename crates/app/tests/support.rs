#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use gagso_app::AppContext;
use gagso_core::FixedClock;
use gagso_domain::{ApiConfig, Config, CurrentUser, LoggingConfig, Role, SessionConfig};
use gagso_infra::{ApiClient, ApiClientConfig, HttpEmployeeDirectory, HttpScheduleGateway};
use serde_json::{json, Value};
use wiremock::MockServer;

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}

/// Context wired against `server` with the clock frozen at `now`.
pub fn context(server: &MockServer, user: CurrentUser, now: NaiveDateTime) -> AppContext {
    let config = Config {
        api: ApiConfig { base_url: server.uri(), ..ApiConfig::default() },
        session: SessionConfig { employee_id: Some(user.employee_id.clone()), role: user.role },
        logging: LoggingConfig::default(),
    };
    let api = Arc::new(ApiClient::new(ApiClientConfig::from(&config.api)).unwrap());
    let gateway = Arc::new(HttpScheduleGateway::new(Arc::clone(&api)));
    let employees = Arc::new(HttpEmployeeDirectory::new(api, true));

    AppContext::with_ports(
        config,
        user,
        Arc::new(FixedClock(now)),
        gateway.clone(),
        gateway,
        employees,
    )
}

pub fn employee(id: &str) -> CurrentUser {
    CurrentUser::new(id, Role::Employee)
}

pub fn schedule_json(id: &str, start: &str, end: &str, visibility: &str, author: &str) -> Value {
    json!({
        "scheduleId": id,
        "title": format!("Schedule {id}"),
        "description": "",
        "startDate": start,
        "endDate": end,
        "visibility": visibility,
        "alarmEnabled": false,
        "employeeId": author,
        "participants": [],
        "participantIds": []
    })
}

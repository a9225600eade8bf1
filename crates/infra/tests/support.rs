#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use gagso_domain::CurrentUser;
use gagso_infra::{ApiClient, ApiClientConfig, HttpEmployeeDirectory, HttpScheduleGateway};
use serde_json::{json, Value};
use wiremock::MockServer;

pub fn user() -> CurrentUser {
    CurrentUser::employee("EMP001")
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}

pub fn api_for(server: &MockServer) -> Arc<ApiClient> {
    let config = ApiClientConfig { base_url: server.uri(), ..Default::default() };
    Arc::new(ApiClient::new(config).expect("api client should build"))
}

pub fn gateway_for(server: &MockServer) -> HttpScheduleGateway {
    HttpScheduleGateway::new(api_for(server))
}

pub fn directory_for(server: &MockServer, fallback: bool) -> HttpEmployeeDirectory {
    HttpEmployeeDirectory::new(api_for(server), fallback)
}

/// A schedule as the backend serializes it.
pub fn schedule_json(id: &str, title: &str, start: &str, end: &str) -> Value {
    json!({
        "scheduleId": id,
        "title": title,
        "description": null,
        "startDate": start,
        "endDate": end,
        "visibility": "PUBLIC",
        "alarmEnabled": false,
        "alarmTime": null,
        "employeeId": "EMP001",
        "participants": ["Kim Cheolsu"],
        "participantIds": ["EMP002"],
        "createdAt": "2025-05-20T09:00:00",
        "updatedAt": null
    })
}

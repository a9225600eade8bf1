use chrono::{NaiveDate, NaiveDateTime};
use gagso_domain::Schedule;

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A public schedule authored by `E1` starting at `start`.
pub fn schedule(id: &str, start: &str) -> Schedule {
    Schedule {
        schedule_id: Some(id.to_string()),
        title: format!("Schedule {id}"),
        start_date: Some(start.to_string()),
        visibility: "PUBLIC".to_string(),
        employee_id: Some("E1".to_string()),
        ..Default::default()
    }
}

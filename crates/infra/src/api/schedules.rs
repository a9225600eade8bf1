//! REST adapter for the schedule service

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use gagso_core::{ScheduleAccessCheck, ScheduleGateway};
use gagso_domain::constants::WIRE_DATE_FORMAT;
use gagso_domain::{
    CurrentUser, GagsoError, RegistrationResponse, Result, Schedule, ScheduleRegisterRequest,
    ScheduleStatistics, YearMonth,
};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::client::ApiClient;
use super::errors::ApiError;

const API_ROOT: &str = "api";
const SCHEDULES: &str = "schedules";

/// [`ScheduleGateway`] backed by `/api/schedules`
///
/// Every request carries the caller's `X-Employee-Id`. A 404 becomes the
/// empty value of the operation (empty list, `None`, zeroed statistics,
/// access denied); every other failure is returned as a [`GagsoError`].
#[derive(Clone)]
pub struct HttpScheduleGateway {
    api: Arc<ApiClient>,
}

impl HttpScheduleGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    async fn list(
        &self,
        user: &CurrentUser,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Vec<Schedule>> {
        let mut path = vec![API_ROOT, SCHEDULES];
        path.extend_from_slice(segments);
        let schedules: Option<Vec<Schedule>> =
            or_empty(self.api.get(&user.employee_id, &path, query).await)?;
        let schedules = schedules.unwrap_or_default();
        debug!(count = schedules.len(), "Schedules fetched");
        Ok(schedules)
    }
}

#[async_trait]
impl ScheduleGateway for HttpScheduleGateway {
    #[instrument(skip(self, user, request), fields(employee_id = %user.employee_id))]
    async fn register(
        &self,
        user: &CurrentUser,
        request: &ScheduleRegisterRequest,
    ) -> Result<Schedule> {
        let response: RegistrationResponse = self
            .api
            .post(&user.employee_id, &[API_ROOT, SCHEDULES], request)
            .await
            .map_err(GagsoError::from)?;
        let schedule = response.into_schedule();
        info!(schedule_id = %schedule.id_or_placeholder(), "Schedule registered");
        Ok(schedule)
    }

    #[instrument(skip(self, user), fields(employee_id = %user.employee_id))]
    async fn list_for_employee(&self, user: &CurrentUser) -> Result<Vec<Schedule>> {
        self.list(user, &[], &[("employeeId", user.employee_id.clone())]).await
    }

    #[instrument(skip(self, user), fields(employee_id = %user.employee_id))]
    async fn get(&self, user: &CurrentUser, schedule_id: &str) -> Result<Option<Schedule>> {
        or_empty(
            self.api
                .get(&user.employee_id, &[API_ROOT, SCHEDULES, schedule_id], &[])
                .await,
        )
    }

    #[instrument(skip(self, user), fields(employee_id = %user.employee_id, %month))]
    async fn monthly(&self, user: &CurrentUser, month: YearMonth) -> Result<Vec<Schedule>> {
        let query = [("year", month.year().to_string()), ("month", month.month().to_string())];
        self.list(user, &["monthly"], &query).await
    }

    #[instrument(skip(self, user), fields(employee_id = %user.employee_id, %date))]
    async fn daily(&self, user: &CurrentUser, date: NaiveDate) -> Result<Vec<Schedule>> {
        let query = [("date", date.format(WIRE_DATE_FORMAT).to_string())];
        self.list(user, &["daily"], &query).await
    }

    #[instrument(skip(self, user), fields(employee_id = %user.employee_id))]
    async fn today(&self, user: &CurrentUser) -> Result<Vec<Schedule>> {
        self.list(user, &["today"], &[]).await
    }

    #[instrument(skip(self, user), fields(employee_id = %user.employee_id))]
    async fn upcoming(&self, user: &CurrentUser) -> Result<Vec<Schedule>> {
        self.list(user, &["upcoming"], &[]).await
    }

    #[instrument(skip(self, user), fields(employee_id = %user.employee_id))]
    async fn search(&self, user: &CurrentUser, keyword: &str) -> Result<Vec<Schedule>> {
        self.list(user, &["search"], &[("keyword", keyword.trim().to_string())]).await
    }

    #[instrument(skip(self, user), fields(employee_id = %user.employee_id))]
    async fn participants(&self, user: &CurrentUser, schedule_id: &str) -> Result<Vec<String>> {
        let names: Option<Vec<String>> = or_empty(
            self.api
                .get(
                    &user.employee_id,
                    &[API_ROOT, SCHEDULES, schedule_id, "participants"],
                    &[],
                )
                .await,
        )?;
        Ok(names.unwrap_or_default())
    }

    #[instrument(skip(self, user), fields(employee_id = %user.employee_id))]
    async fn statistics(&self, user: &CurrentUser) -> Result<ScheduleStatistics> {
        let stats: Option<ScheduleStatistics> = or_empty(
            self.api
                .get(&user.employee_id, &[API_ROOT, SCHEDULES, "statistics"], &[])
                .await,
        )?;
        Ok(stats.unwrap_or_default())
    }
}

#[async_trait]
impl ScheduleAccessCheck for HttpScheduleGateway {
    #[instrument(skip(self, user), fields(employee_id = %user.employee_id))]
    async fn has_access(&self, user: &CurrentUser, schedule_id: &str) -> Result<bool> {
        let body: Option<Value> = or_empty(
            self.api
                .get(&user.employee_id, &[API_ROOT, SCHEDULES, schedule_id, "access"], &[])
                .await,
        )?;
        let granted = body.as_ref().is_some_and(access_granted);
        debug!(granted, "Access decision received");
        Ok(granted)
    }
}

/// Fold a 404 into `Ok(None)`; convert every other failure.
fn or_empty<T>(result: std::result::Result<T, ApiError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_not_found() => {
            debug!(error = %err, "Resource not found, treating as empty");
            Ok(None)
        }
        Err(err) => {
            warn!(error = %err, category = ?err.category(), "Schedule service call failed");
            Err(err.into())
        }
    }
}

/// Interpret the boolean-ish body of the access endpoint.
///
/// Accepts `true`, `"true"`, non-zero numbers, and objects carrying one of
/// `hasAccess`, `access`, `allowed` or `granted`. Anything else denies.
fn access_granted(body: &Value) -> bool {
    match body {
        Value::Bool(flag) => *flag,
        Value::String(text) => text.trim().eq_ignore_ascii_case("true"),
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::Object(map) => ["hasAccess", "access", "allowed", "granted"]
            .iter()
            .find_map(|key| map.get(*key))
            .is_some_and(access_granted),
        Value::Null | Value::Array(_) => false,
    }
}

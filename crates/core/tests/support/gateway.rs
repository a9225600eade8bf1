//! In-memory `ScheduleGateway` fake.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use gagso_core::ScheduleGateway;
use gagso_domain::{
    CurrentUser, GagsoError, Result as DomainResult, Schedule, ScheduleRegisterRequest,
    ScheduleStatistics, YearMonth,
};
use tokio::sync::Notify;

/// Serves canned month responses and records registrations.
///
/// A month can be gated on a [`Notify`] so tests control the order in which
/// concurrent loads complete.
#[derive(Default, Clone)]
pub struct MockScheduleGateway {
    months: Arc<Mutex<HashMap<YearMonth, DomainResult<Vec<Schedule>>>>>,
    gates: Arc<Mutex<HashMap<YearMonth, Arc<Notify>>>>,
    register_response: Arc<Mutex<Option<DomainResult<Schedule>>>>,
    registered: Arc<Mutex<Vec<(String, ScheduleRegisterRequest)>>>,
    monthly_calls: Arc<Mutex<Vec<YearMonth>>>,
}

impl MockScheduleGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_month(self, month: YearMonth, response: DomainResult<Vec<Schedule>>) -> Self {
        self.months.lock().unwrap().insert(month, response);
        self
    }

    pub fn set_month(&self, month: YearMonth, response: DomainResult<Vec<Schedule>>) {
        self.months.lock().unwrap().insert(month, response);
    }

    /// Block loads of `month` until the returned handle is notified.
    pub fn gate(&self, month: YearMonth) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates.lock().unwrap().insert(month, notify.clone());
        notify
    }

    pub fn with_register_response(self, response: DomainResult<Schedule>) -> Self {
        *self.register_response.lock().unwrap() = Some(response);
        self
    }

    pub fn registered(&self) -> Vec<(String, ScheduleRegisterRequest)> {
        self.registered.lock().unwrap().clone()
    }

    pub fn monthly_calls(&self) -> Vec<YearMonth> {
        self.monthly_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScheduleGateway for MockScheduleGateway {
    async fn register(
        &self,
        user: &CurrentUser,
        request: &ScheduleRegisterRequest,
    ) -> DomainResult<Schedule> {
        self.registered.lock().unwrap().push((user.employee_id.clone(), request.clone()));
        self.register_response.lock().unwrap().clone().unwrap_or_else(|| {
            Ok(Schedule {
                schedule_id: Some("S-NEW".to_string()),
                title: request.title.clone(),
                start_date: request.start_date.clone(),
                end_date: request.end_date.clone(),
                visibility: request.visibility.clone(),
                employee_id: Some(user.employee_id.clone()),
                participant_ids: request.participant_ids.clone(),
                ..Default::default()
            })
        })
    }

    async fn list_for_employee(&self, _user: &CurrentUser) -> DomainResult<Vec<Schedule>> {
        let months = self.months.lock().unwrap();
        Ok(months.values().filter_map(|r| r.as_ref().ok()).flatten().cloned().collect())
    }

    async fn get(&self, user: &CurrentUser, schedule_id: &str) -> DomainResult<Option<Schedule>> {
        let all = self.list_for_employee(user).await?;
        Ok(all.into_iter().find(|s| s.schedule_id.as_deref() == Some(schedule_id)))
    }

    async fn monthly(&self, _user: &CurrentUser, month: YearMonth) -> DomainResult<Vec<Schedule>> {
        self.monthly_calls.lock().unwrap().push(month);
        let gate = self.gates.lock().unwrap().get(&month).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.months.lock().unwrap().get(&month).cloned().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn daily(&self, user: &CurrentUser, date: NaiveDate) -> DomainResult<Vec<Schedule>> {
        let all = self.list_for_employee(user).await?;
        Ok(gagso_core::schedules_on(&all, date))
    }

    async fn today(&self, _user: &CurrentUser) -> DomainResult<Vec<Schedule>> {
        Ok(Vec::new())
    }

    async fn upcoming(&self, _user: &CurrentUser) -> DomainResult<Vec<Schedule>> {
        Ok(Vec::new())
    }

    async fn search(&self, user: &CurrentUser, keyword: &str) -> DomainResult<Vec<Schedule>> {
        let all = self.list_for_employee(user).await?;
        Ok(all.into_iter().filter(|s| s.title.contains(keyword)).collect())
    }

    async fn participants(
        &self,
        _user: &CurrentUser,
        _schedule_id: &str,
    ) -> DomainResult<Vec<String>> {
        Ok(Vec::new())
    }

    async fn statistics(&self, _user: &CurrentUser) -> DomainResult<ScheduleStatistics> {
        Err(GagsoError::NotFound("statistics".to_string()))
    }
}

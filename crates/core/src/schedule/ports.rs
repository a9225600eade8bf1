//! Port interfaces for the schedule backend
//!
//! These traits define the boundaries between core business logic
//! and the REST adapters in `gagso-infra`.

use async_trait::async_trait;
use chrono::NaiveDate;
use gagso_domain::{
    CurrentUser, Result, Schedule, ScheduleRegisterRequest, ScheduleStatistics, YearMonth,
};

/// Queries and commands against the schedule service.
///
/// Every call carries the requesting user explicitly. Implementations
/// translate transport failures into [`gagso_domain::GagsoError`] and map
/// "not found" onto empty results.
#[async_trait]
pub trait ScheduleGateway: Send + Sync {
    /// Submit a normalized registration payload
    async fn register(
        &self,
        user: &CurrentUser,
        request: &ScheduleRegisterRequest,
    ) -> Result<Schedule>;

    /// All schedules visible to `user`
    async fn list_for_employee(&self, user: &CurrentUser) -> Result<Vec<Schedule>>;

    /// Schedule detail; `None` when the backend does not know the id
    async fn get(&self, user: &CurrentUser, schedule_id: &str) -> Result<Option<Schedule>>;

    /// Schedules of one calendar month
    async fn monthly(&self, user: &CurrentUser, month: YearMonth) -> Result<Vec<Schedule>>;

    /// Schedules of one calendar day
    async fn daily(&self, user: &CurrentUser, date: NaiveDate) -> Result<Vec<Schedule>>;

    async fn today(&self, user: &CurrentUser) -> Result<Vec<Schedule>>;

    /// Schedules starting within the next week
    async fn upcoming(&self, user: &CurrentUser) -> Result<Vec<Schedule>>;

    /// Title keyword search
    async fn search(&self, user: &CurrentUser, keyword: &str) -> Result<Vec<Schedule>>;

    /// Participant names of one schedule
    async fn participants(&self, user: &CurrentUser, schedule_id: &str) -> Result<Vec<String>>;

    async fn statistics(&self, user: &CurrentUser) -> Result<ScheduleStatistics>;
}

/// Backend-side access decision for scoped schedules
#[async_trait]
pub trait ScheduleAccessCheck: Send + Sync {
    async fn has_access(&self, user: &CurrentUser, schedule_id: &str) -> Result<bool>;
}

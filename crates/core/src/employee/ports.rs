//! Port interface for the employee directory

use async_trait::async_trait;
use gagso_domain::{CurrentUser, Employee, Fetched};

/// Participant lookup.
///
/// Never fails outright: backend problems are reported through
/// [`Fetched::Degraded`] or [`Fetched::Failed`] so callers choose how to
/// surface them.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn search(&self, user: &CurrentUser, keyword: &str) -> Fetched<Vec<Employee>>;
}

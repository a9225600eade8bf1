//! REST adapter for participant lookup, with an explicit degraded mode

use std::sync::Arc;

use async_trait::async_trait;
use gagso_core::EmployeeDirectory;
use gagso_domain::{CurrentUser, Employee, Fetched};
use tracing::{debug, instrument, warn};

use super::client::ApiClient;

/// [`EmployeeDirectory`] backed by `/api/employees/search`
///
/// When the backend fails and `fallback` is enabled, the built-in
/// [`fixture_directory`] filtered by the keyword is returned as
/// [`Fetched::Degraded`]. A 404 is an empty, fresh result.
pub struct HttpEmployeeDirectory {
    api: Arc<ApiClient>,
    fallback: bool,
}

impl HttpEmployeeDirectory {
    pub fn new(api: Arc<ApiClient>, fallback: bool) -> Self {
        Self { api, fallback }
    }
}

#[async_trait]
impl EmployeeDirectory for HttpEmployeeDirectory {
    #[instrument(skip(self, user), fields(employee_id = %user.employee_id))]
    async fn search(&self, user: &CurrentUser, keyword: &str) -> Fetched<Vec<Employee>> {
        let keyword = keyword.trim();
        let result = self
            .api
            .get::<Vec<Employee>>(
                &user.employee_id,
                &["api", "employees", "search"],
                &[("keyword", keyword.to_string())],
            )
            .await;

        match result {
            Ok(employees) => {
                debug!(count = employees.len(), "Employees fetched");
                Fetched::fresh(employees)
            }
            Err(err) if err.is_not_found() => Fetched::fresh(Vec::new()),
            Err(err) if self.fallback => {
                warn!(error = %err, "Employee search failed, serving built-in directory");
                Fetched::Degraded { data: search_fixture(keyword), reason: err.to_string() }
            }
            Err(err) => {
                warn!(error = %err, "Employee search failed");
                Fetched::Failed { reason: err.to_string() }
            }
        }
    }
}

/// Directory served while the backend is unavailable.
pub fn fixture_directory() -> Vec<Employee> {
    [
        ("EMP001", "Hong Gildong", "D001", "Development"),
        ("EMP002", "Kim Cheolsu", "D001", "Development"),
        ("EMP003", "Lee Younghee", "D002", "Planning"),
        ("EMP004", "Park Miyoung", "D003", "Design"),
        ("EMP005", "Jung Suho", "D001", "Development"),
        ("EMP006", "Choi Jiyoung", "D004", "Marketing"),
    ]
    .into_iter()
    .map(|(id, name, dept_id, dept_name)| Employee::new(id, name).with_department(dept_id, dept_name))
    .collect()
}

fn search_fixture(keyword: &str) -> Vec<Employee> {
    fixture_directory().into_iter().filter(|employee| employee.matches(keyword)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_keyword_returns_whole_fixture() {
        assert_eq!(search_fixture("").len(), 6);
        assert_eq!(search_fixture("   ").len(), 6);
    }

    #[test]
    fn fixture_filters_by_name_department_or_id() {
        let names = |keyword: &str| {
            search_fixture(keyword).into_iter().map(|e| e.employee_id).collect::<Vec<_>>()
        };
        assert_eq!(names("kim"), vec!["EMP002"]);
        assert_eq!(names("development"), vec!["EMP001", "EMP002", "EMP005"]);
        assert_eq!(names("emp006"), vec!["EMP006"]);
        assert!(names("nobody").is_empty());
    }
}

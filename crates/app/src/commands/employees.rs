//! Participant lookup command

use std::fmt;

use gagso_domain::{Employee, Fetched};
use serde::Serialize;

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Employee search result, including how it was obtained
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeReport {
    pub keyword: String,
    pub result: Fetched<Vec<Employee>>,
}

impl EmployeeReport {
    pub fn is_failure(&self) -> bool {
        matches!(self.result, Fetched::Failed { .. })
    }
}

impl fmt::Display for EmployeeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let employees = match &self.result {
            Fetched::Fresh { data } => data,
            Fetched::Degraded { data, .. } => {
                writeln!(f, "Employee service unavailable; showing the built-in directory.")?;
                data
            }
            Fetched::Failed { .. } => return write!(f, "Employee lookup failed. Please try again."),
        };

        if employees.is_empty() {
            return write!(f, "No employees found.");
        }
        for (index, employee) in employees.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:<8} {:<16} {}",
                employee.employee_id,
                employee.name,
                employee.dept_name.as_deref().unwrap_or("-")
            )?;
        }
        Ok(())
    }
}

/// Search the directory; never fails, degradation is part of the report.
pub async fn search_employees(ctx: &AppContext, keyword: &str) -> EmployeeReport {
    let start = std::time::Instant::now();
    let result = ctx.employees.search(&ctx.user, keyword).await;
    let error_type = match &result {
        Fetched::Fresh { .. } => None,
        Fetched::Degraded { .. } => Some("degraded"),
        Fetched::Failed { .. } => Some("failed"),
    };
    log_command_execution("employees::search", start.elapsed(), error_type);
    EmployeeReport { keyword: keyword.trim().to_string(), result }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degraded_report_warns_before_listing() {
        let report = EmployeeReport {
            keyword: "kim".into(),
            result: Fetched::Degraded {
                data: vec![Employee::new("EMP002", "Kim Cheolsu").with_department("D001", "Development")],
                reason: "Server error: 503".into(),
            },
        };

        let text = report.to_string();
        assert!(text.starts_with("Employee service unavailable"));
        assert!(text.contains("EMP002   Kim Cheolsu      Development"));
        assert!(!report.is_failure());
    }

    #[test]
    fn failed_report_hides_reason() {
        let report = EmployeeReport {
            keyword: String::new(),
            result: Fetched::Failed { reason: "tcp connect error".into() },
        };
        assert!(report.is_failure());
        assert!(!report.to_string().contains("tcp"));
    }
}

//! Employee directory entries

use serde::{Deserialize, Serialize};

/// An employee as returned by `/api/employees/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dept_id: Option<String>,
    #[serde(default)]
    pub dept_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl Employee {
    pub fn new(employee_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            name: name.into(),
            dept_id: None,
            dept_name: None,
            phone_number: None,
        }
    }

    #[must_use]
    pub fn with_department(mut self, dept_id: impl Into<String>, dept_name: impl Into<String>) -> Self {
        self.dept_id = Some(dept_id.into());
        self.dept_name = Some(dept_name.into());
        self
    }

    /// Case-insensitive substring match on name, id or department name.
    pub fn matches(&self, keyword: &str) -> bool {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.employee_id.to_lowercase().contains(&needle)
            || self.dept_name.as_deref().is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

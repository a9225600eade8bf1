//! Current user context
//!
//! Passed explicitly into every operation that depends on who is asking.

use serde::{Deserialize, Serialize};

use crate::impl_wire_enum_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    Employee,
    Administrator,
}

impl_wire_enum_conversions!(Role {
    Employee => "EMPLOYEE",
    Administrator => "ADMINISTRATOR",
});

/// The signed-in employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub employee_id: String,
    #[serde(default)]
    pub role: Role,
}

impl CurrentUser {
    pub fn new(employee_id: impl Into<String>, role: Role) -> Self {
        Self { employee_id: employee_id.into(), role }
    }

    pub fn employee(employee_id: impl Into<String>) -> Self {
        Self::new(employee_id, Role::Employee)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Administrator
    }
}

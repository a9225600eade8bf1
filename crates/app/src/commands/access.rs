//! Visibility check command

use std::fmt;

use gagso_core::VisibilityBadge;
use gagso_domain::{GagsoError, Result};
use serde::Serialize;

use super::timed;
use crate::AppContext;

/// Whether the acting user may view one schedule
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReport {
    pub schedule_id: String,
    pub viewer: String,
    pub author: Option<String>,
    pub visibility: VisibilityBadge,
    pub allowed: bool,
}

impl fmt::Display for AccessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.allowed { "can view" } else { "cannot view" };
        write!(
            f,
            "{} {} schedule {} ({}, author {})",
            self.viewer,
            verdict,
            self.schedule_id,
            self.visibility.label,
            self.author.as_deref().unwrap_or("unknown")
        )
    }
}

/// Fetch the schedule and evaluate the visibility policy for the acting user.
///
/// # Errors
///
/// `GagsoError::NotFound` when the schedule does not exist; backend failures
/// of the access check propagate.
pub async fn check_access(ctx: &AppContext, schedule_id: &str) -> Result<AccessReport> {
    timed("visibility::check", async {
        let schedule = ctx
            .schedules
            .get(&ctx.user, schedule_id)
            .await?
            .ok_or_else(|| GagsoError::NotFound(format!("schedule {schedule_id}")))?;
        let allowed = ctx.visibility.can_view(&ctx.user, &schedule).await?;
        Ok(AccessReport {
            schedule_id: schedule_id.to_string(),
            viewer: ctx.user.employee_id.clone(),
            author: schedule.author().map(str::to_string),
            visibility: ctx.visibility.badge(&schedule),
            allowed,
        })
    })
    .await
}

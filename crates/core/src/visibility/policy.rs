//! Visibility classification and access decisions

use std::sync::Arc;

use gagso_domain::{CurrentUser, Result, Schedule, Visibility, VisibilityIcon};
use serde::Serialize;
use tracing::{debug, warn};

use crate::schedule::ScheduleAccessCheck;

/// Display facts for a schedule's visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibilityBadge {
    /// Effective visibility; unknown wire values are treated as private
    pub visibility: Visibility,
    pub label: &'static str,
    pub icon: VisibilityIcon,
    /// False when the wire value was not recognized
    pub recognized: bool,
}

/// Classify a raw visibility value.
///
/// Never fails: unrecognized values get the most restrictive treatment and
/// are logged.
pub fn classify(raw: &str) -> VisibilityBadge {
    let (visibility, recognized) = match Visibility::from_wire(raw) {
        Some(visibility) => (visibility, true),
        None => {
            warn!(visibility = raw, "Unrecognized visibility, treating as PRIVATE");
            (Visibility::Private, false)
        }
    };
    VisibilityBadge { visibility, label: visibility.label(), icon: visibility.icon(), recognized }
}

/// Decides whether a viewer may see a schedule.
///
/// PUBLIC is open to everyone. PRIVATE is limited to the author and
/// administrators and is decided locally. GROUP membership is owned by the
/// backend, so it is always delegated to [`ScheduleAccessCheck`].
pub struct VisibilityPolicy {
    access_check: Arc<dyn ScheduleAccessCheck>,
}

impl VisibilityPolicy {
    pub fn new(access_check: Arc<dyn ScheduleAccessCheck>) -> Self {
        Self { access_check }
    }

    pub fn badge(&self, schedule: &Schedule) -> VisibilityBadge {
        classify(&schedule.visibility)
    }

    /// Access errors from the backend are propagated, never read as "granted".
    pub async fn can_view(&self, viewer: &CurrentUser, schedule: &Schedule) -> Result<bool> {
        let badge = classify(&schedule.visibility);
        match badge.visibility {
            Visibility::Public => Ok(true),
            Visibility::Private => Ok(is_owner_or_admin(viewer, schedule)),
            Visibility::Group => {
                let Some(schedule_id) = schedule.schedule_id.as_deref() else {
                    warn!("GROUP schedule without an id, cannot ask the backend; denying");
                    return Ok(false);
                };
                let granted = self.access_check.has_access(viewer, schedule_id).await?;
                debug!(schedule_id, granted, "Backend access decision");
                Ok(granted)
            }
        }
    }
}

fn is_owner_or_admin(viewer: &CurrentUser, schedule: &Schedule) -> bool {
    viewer.is_admin() || schedule.author() == Some(viewer.employee_id.as_str())
}

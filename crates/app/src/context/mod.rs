//! Application context - dependency injection container

use std::sync::Arc;

use chrono::NaiveDateTime;
use gagso_core::{
    CalendarSession, Clock, EmployeeDirectory, ScheduleAccessCheck, ScheduleGateway,
    ScheduleRegistrationService, SystemClock, VisibilityPolicy,
};
use gagso_domain::{Config, CurrentUser, GagsoError, Result, SessionConfig, YearMonth};
use gagso_infra::{ApiClient, ApiClientConfig, HttpEmployeeDirectory, HttpScheduleGateway};
use tracing::info;

/// Type alias for schedule gateway trait object
type DynScheduleGateway = dyn ScheduleGateway + 'static;

/// Type alias for access check trait object
type DynScheduleAccessCheck = dyn ScheduleAccessCheck + 'static;

/// Type alias for employee directory trait object
type DynEmployeeDirectory = dyn EmployeeDirectory + 'static;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub user: CurrentUser,
    pub clock: Arc<dyn Clock>,
    pub schedules: Arc<DynScheduleGateway>,
    pub employees: Arc<DynEmployeeDirectory>,
    pub registration: ScheduleRegistrationService,
    pub visibility: VisibilityPolicy,
}

impl AppContext {
    /// Wire the HTTP adapters for `config`.
    ///
    /// # Errors
    ///
    /// Returns `GagsoError::Config` when no employee is configured or the API
    /// client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let user = current_user(&config.session)?;
        let api = ApiClient::new(ApiClientConfig::from(&config.api)).map_err(GagsoError::from)?;
        let api = Arc::new(api);

        let gateway = Arc::new(HttpScheduleGateway::new(Arc::clone(&api)));
        let employees = Arc::new(HttpEmployeeDirectory::new(api, config.api.employee_fallback));

        info!(
            base_url = %config.api.base_url,
            employee_id = %user.employee_id,
            role = %user.role,
            "Application context initialized"
        );

        Ok(Self::with_ports(
            config,
            user,
            Arc::new(SystemClock),
            gateway.clone(),
            gateway,
            employees,
        ))
    }

    /// Assemble the context from explicit ports.
    pub fn with_ports(
        config: Config,
        user: CurrentUser,
        clock: Arc<dyn Clock>,
        schedules: Arc<DynScheduleGateway>,
        access: Arc<DynScheduleAccessCheck>,
        employees: Arc<DynEmployeeDirectory>,
    ) -> Self {
        let registration = ScheduleRegistrationService::new(Arc::clone(&schedules), Arc::clone(&clock));
        let visibility = VisibilityPolicy::new(access);
        Self { config, user, clock, schedules, employees, registration, visibility }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Fresh calendar session positioned on `month`
    pub fn calendar_session(&self, month: YearMonth) -> CalendarSession {
        CalendarSession::new(
            Arc::clone(&self.schedules),
            Arc::clone(&self.clock),
            self.user.clone(),
            month,
        )
    }
}

fn current_user(session: &SessionConfig) -> Result<CurrentUser> {
    let employee_id = session
        .employee_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            GagsoError::Config(
                "No employee configured; set GAGSO_EMPLOYEE_ID, session.employee_id or --employee-id"
                    .to_string(),
            )
        })?;
    Ok(CurrentUser::new(employee_id, session.role))
}

#[cfg(test)]
mod tests {
    use gagso_domain::{ApiConfig, LoggingConfig, Role};

    use super::*;

    fn config(employee_id: Option<&str>) -> Config {
        Config {
            api: ApiConfig::default(),
            session: SessionConfig {
                employee_id: employee_id.map(str::to_string),
                role: Role::Administrator,
            },
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn builds_with_configured_user() {
        let ctx = AppContext::new(config(Some(" EMP001 "))).unwrap();
        assert_eq!(ctx.user.employee_id, "EMP001");
        assert!(ctx.user.is_admin());
    }

    #[test]
    fn missing_employee_is_a_config_error() {
        assert!(matches!(AppContext::new(config(None)), Err(GagsoError::Config(_))));
        assert!(matches!(AppContext::new(config(Some("  "))), Err(GagsoError::Config(_))));
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        let mut cfg = config(Some("EMP001"));
        cfg.api.base_url = "not a url".into();
        assert!(matches!(AppContext::new(cfg), Err(GagsoError::Config(_))));
    }
}

//! Schedule registration use case

use std::sync::Arc;

use gagso_domain::{CurrentUser, GagsoError, Result, Schedule};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::normalizer::normalize_form;
use super::ports::ScheduleGateway;
use super::validation::{validate, FieldErrors};
use crate::clock::Clock;

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    Created(Schedule),
    /// Field-level problems, from local validation or from the backend
    Rejected(FieldErrors),
}

/// Normalize, validate and submit a registration form
pub struct ScheduleRegistrationService {
    gateway: Arc<dyn ScheduleGateway>,
    clock: Arc<dyn Clock>,
}

impl ScheduleRegistrationService {
    pub fn new(gateway: Arc<dyn ScheduleGateway>, clock: Arc<dyn Clock>) -> Self {
        Self { gateway, clock }
    }

    /// Submit `form` on behalf of `user`.
    ///
    /// The gateway is only called when local validation passes. Any error
    /// other than a backend validation rejection is returned as-is.
    #[instrument(skip(self, form), fields(employee_id = %user.employee_id))]
    pub async fn register(&self, user: &CurrentUser, form: &Value) -> Result<RegistrationOutcome> {
        let request = normalize_form(form);
        let errors = validate(&request, self.clock.now());
        if !errors.is_empty() {
            info!(fields = errors.len(), "Registration rejected by local validation");
            return Ok(RegistrationOutcome::Rejected(errors));
        }

        match self.gateway.register(user, &request).await {
            Ok(schedule) => {
                info!(schedule_id = schedule.id_or_placeholder(), "Schedule registered");
                Ok(RegistrationOutcome::Created(schedule))
            }
            Err(GagsoError::Validation(violations)) => {
                warn!(fields = violations.len(), "Registration rejected by backend");
                Ok(RegistrationOutcome::Rejected(FieldErrors::from(violations)))
            }
            Err(err) => Err(err),
        }
    }
}

//! Month navigation state with stale-response protection
//!
//! Rapid navigation can leave several month loads in flight. Each load is
//! stamped with a ticket from [`RequestSequencer`]; a response is applied
//! only if its ticket is still the newest one issued, so a slow June
//! response can never overwrite July.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use gagso_domain::{CalendarDay, CurrentUser, ErrorDisposition, GagsoError, Schedule, YearMonth};
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::filter::{build_month_view, schedules_on};
use crate::clock::Clock;
use crate::schedule::ScheduleGateway;

/// Monotonic request stamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Hands out increasing tickets and tells whether one is still current
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// What happened to one month load
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The response replaced the schedule list
    Applied { month: YearMonth, count: usize },
    /// A newer load was issued meanwhile; the response was discarded
    Superseded { month: YearMonth, ticket: Ticket },
    /// The load failed; the previous list is kept
    Failed { month: YearMonth, disposition: ErrorDisposition, message: String },
}

#[derive(Debug)]
struct SessionState {
    month: YearMonth,
    schedules: Vec<Schedule>,
    last_error: Option<GagsoError>,
}

/// Calendar screen state for one user
pub struct CalendarSession {
    gateway: Arc<dyn ScheduleGateway>,
    clock: Arc<dyn Clock>,
    user: CurrentUser,
    sequencer: RequestSequencer,
    state: Mutex<SessionState>,
}

impl CalendarSession {
    pub fn new(
        gateway: Arc<dyn ScheduleGateway>,
        clock: Arc<dyn Clock>,
        user: CurrentUser,
        month: YearMonth,
    ) -> Self {
        Self {
            gateway,
            clock,
            user,
            sequencer: RequestSequencer::new(),
            state: Mutex::new(SessionState { month, schedules: Vec::new(), last_error: None }),
        }
    }

    /// Session opened on the current month
    pub fn starting_today(
        gateway: Arc<dyn ScheduleGateway>,
        clock: Arc<dyn Clock>,
        user: CurrentUser,
    ) -> Self {
        let month = YearMonth::of(clock.today());
        Self::new(gateway, clock, user, month)
    }

    pub fn user(&self) -> &CurrentUser {
        &self.user
    }

    pub async fn current_month(&self) -> YearMonth {
        self.state.lock().await.month
    }

    pub async fn schedules(&self) -> Vec<Schedule> {
        self.state.lock().await.schedules.clone()
    }

    pub async fn last_error(&self) -> Option<GagsoError> {
        self.state.lock().await.last_error.clone()
    }

    /// Navigate to `month` and load its schedules.
    #[instrument(skip_all, fields(employee_id = %self.user.employee_id, month = %month))]
    pub async fn load_month(&self, month: YearMonth) -> LoadOutcome {
        let ticket = {
            let mut state = self.state.lock().await;
            state.month = month;
            self.sequencer.issue()
        };

        let result = self.gateway.monthly(&self.user, month).await;

        let mut state = self.state.lock().await;
        if !self.sequencer.is_current(ticket) {
            warn!(ticket = ticket.value(), "Discarding superseded month response");
            return LoadOutcome::Superseded { month, ticket };
        }

        match result {
            Ok(schedules) => {
                let count = schedules.len();
                state.schedules = schedules;
                state.last_error = None;
                debug!(count, "Month loaded");
                LoadOutcome::Applied { month, count }
            }
            Err(err) => {
                warn!(error = %err, "Month load failed, keeping previous schedules");
                let outcome = LoadOutcome::Failed {
                    month,
                    disposition: err.disposition(),
                    message: err.user_message(),
                };
                state.last_error = Some(err);
                outcome
            }
        }
    }

    pub async fn next_month(&self) -> LoadOutcome {
        let month = self.current_month().await.next();
        self.load_month(month).await
    }

    pub async fn prev_month(&self) -> LoadOutcome {
        let month = self.current_month().await.prev();
        self.load_month(month).await
    }

    /// Re-issue the load for the month currently shown
    pub async fn retry(&self) -> LoadOutcome {
        let month = self.current_month().await;
        self.load_month(month).await
    }

    /// The 42-day view, rebuilt from the current list on every call
    pub async fn month_view(&self) -> Vec<CalendarDay> {
        let state = self.state.lock().await;
        build_month_view(state.month, &state.schedules, self.clock.today())
    }

    pub async fn day(&self, date: NaiveDate) -> Vec<Schedule> {
        schedules_on(&self.state.lock().await.schedules, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_newest_ticket_is_current() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        assert!(sequencer.is_current(first));

        let second = sequencer.issue();
        assert!(second > first);
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }
}

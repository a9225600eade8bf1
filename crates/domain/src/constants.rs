//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Calendar grid
pub const CALENDAR_GRID_WEEKS: usize = 6;
pub const DAYS_PER_WEEK: usize = 7;
pub const CALENDAR_GRID_DAYS: usize = CALENDAR_GRID_WEEKS * DAYS_PER_WEEK;

// Form limits
pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

// Wire formats
pub const WIRE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
pub const FORM_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

// HTTP
pub const EMPLOYEE_ID_HEADER: &str = "X-Employee-Id";

// Display
pub const PARTICIPANTS_DISPLAY_LIMIT: usize = 3;

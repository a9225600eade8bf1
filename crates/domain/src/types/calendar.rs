//! Calendar grid value types

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Schedule;

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// A calendar month. Always holds a valid month in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Build from a year and a month that may be out of range.
    ///
    /// Months outside `1..=12` roll over into neighbouring years
    /// (`month = 13` is January of the next year, `month = 0` is December of
    /// the previous one). Years are clamped to `1..=9999`.
    pub fn rolled(year: i32, month: i64) -> Self {
        let zero_based = month - 1;
        let year_shift = zero_based.div_euclid(12);
        let month = (zero_based.rem_euclid(12) + 1) as u32;
        let year = (i64::from(year) + year_shift).clamp(i64::from(MIN_YEAR), i64::from(MAX_YEAR));
        Self { year: year as i32, month }
    }

    /// Strict constructor; `None` when `month` is not in `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) && (MIN_YEAR..=MAX_YEAR).contains(&year) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self::rolled(date.year(), i64::from(date.month()))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn next(&self) -> Self {
        Self::rolled(self.year, i64::from(self.month) + 1)
    }

    pub fn prev(&self) -> Self {
        Self::rolled(self.year, i64::from(self.month) - 1)
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One cell of the 42-day month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub date: NaiveDate,
    /// True for the leading/trailing days borrowed from adjacent months.
    pub outside_current_month: bool,
}

/// A grid cell together with the schedules that start on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub outside_current_month: bool,
    pub is_today: bool,
    pub schedules: Vec<Schedule>,
}

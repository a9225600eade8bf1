//! Month grid construction

use chrono::{Datelike, Days, NaiveDate};
use gagso_domain::constants::CALENDAR_GRID_DAYS;
use gagso_domain::{CalendarDate, YearMonth};

/// First cell of the grid: the Sunday on or before the 1st of `month`.
pub fn grid_start(month: YearMonth) -> NaiveDate {
    let first = month.first_day();
    let offset = u64::from(first.weekday().num_days_from_sunday());
    first.checked_sub_days(Days::new(offset)).unwrap_or(first)
}

/// Build the 6x7 grid for `month`.
///
/// Always returns exactly 42 consecutive dates, Sunday to Saturday. Days
/// borrowed from the neighbouring months are flagged
/// `outside_current_month`.
pub fn build_month_grid(month: YearMonth) -> Vec<CalendarDate> {
    let start = grid_start(month);
    start
        .iter_days()
        .take(CALENDAR_GRID_DAYS)
        .map(|date| CalendarDate { date, outside_current_month: !month.contains(date) })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn june_2025_starts_on_its_first_day() {
        let grid = build_month_grid(ym(2025, 6));
        assert_eq!(grid.len(), 42);
        assert_eq!(grid[0].date, ymd(2025, 6, 1));
        assert!(!grid[0].outside_current_month);
        assert_eq!(grid[41].date, ymd(2025, 7, 12));
        assert_eq!(grid.iter().filter(|d| d.outside_current_month).count(), 12);
    }

    #[test]
    fn leading_days_come_from_previous_month() {
        // March 2025 starts on a Saturday.
        let grid = build_month_grid(ym(2025, 3));
        assert_eq!(grid[0].date, ymd(2025, 2, 23));
        assert!(grid[..6].iter().all(|d| d.outside_current_month));
        assert_eq!(grid[6].date, ymd(2025, 3, 1));
        assert!(!grid[6].outside_current_month);
    }

    #[test]
    fn every_month_has_a_well_formed_grid() {
        for year in [1999, 2000, 2024, 2025, 2100] {
            for month in 1..=12 {
                let month = ym(year, month);
                let grid = build_month_grid(month);
                assert_eq!(grid.len(), 42);
                assert_eq!(grid[0].date.weekday(), Weekday::Sun);
                assert_eq!(grid[41].date.weekday(), Weekday::Sat);
                for pair in grid.windows(2) {
                    assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
                }
                let inside: Vec<_> = grid.iter().filter(|d| !d.outside_current_month).collect();
                assert_eq!(inside.first().map(|d| d.date), Some(month.first_day()));
                assert!(inside.iter().all(|d| month.contains(d.date)));
                let days_in_month = month.next().first_day().pred_opt().unwrap().day() as usize;
                assert_eq!(inside.len(), days_in_month);
            }
        }
    }

    #[test]
    fn february_of_a_leap_year_spans_into_march() {
        let grid = build_month_grid(ym(2024, 2));
        assert_eq!(grid[0].date, ymd(2024, 1, 28));
        assert!(grid.iter().any(|d| d.date == ymd(2024, 2, 29) && !d.outside_current_month));
        assert_eq!(grid[41].date, ymd(2024, 3, 9));
    }
}

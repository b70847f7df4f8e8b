//! Fiscal calendar math.
//!
//! Pure functions mapping a calendar date and a [`FiscalConfig`] to fiscal
//! week, fiscal year and fiscal quarter. Month indices are zero-based
//! (0 = January) and weekday indices count from Sunday (0 = Sunday).

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use crate::config::FiscalConfig;

/// First day of the month `month_index` months after January of `year`
///
/// `month_index` may fall outside 0..=11 and rolls into adjacent years, so
/// `first_of_month(2024, -1)` is 2023-12-01 and `first_of_month(2024, 12)` is
/// 2025-01-01. Returns `None` when the month lies outside chrono's date range.
pub fn first_of_month(year: i32, month_index: i32) -> Option<NaiveDate> {
    let year = year.checked_add(month_index.div_euclid(12))?;
    let month = month_index.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Years whose day grid, adjacent months and fiscal year start are all representable
pub fn navigable_years() -> RangeInclusive<i32> {
    (NaiveDate::MIN.year() + 1)..=(NaiveDate::MAX.year() - 1)
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Get the number of days in a month, rolling `month_index` over year boundaries
pub fn days_in_month(year: i32, month_index: i32) -> u32 {
    let year = year + month_index.div_euclid(12);
    match month_index.rem_euclid(12) {
        1 => if is_leap_year(year) { 29 } else { 28 },
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Day of week with Sunday = 0 .. Saturday = 6
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(weekday_index(date), 0 | 6)
}

/// First day of the fiscal year that contains `date`
///
/// Saturates to `NaiveDate::MIN` when that fiscal year began before chrono's
/// earliest date.
pub fn fiscal_year_start(date: NaiveDate, config: &FiscalConfig) -> NaiveDate {
    let start_index = config.start_month_index();
    let year = if date.month0() < start_index {
        date.year() - 1
    } else {
        date.year()
    };
    first_of_month(year, start_index as i32).unwrap_or(NaiveDate::MIN)
}

/// 1-based fiscal week of `date`
///
/// Counts 7-day buckets from the fiscal year start, offset by the weekday the
/// fiscal year starts on so a partial first week is week 1. A fiscal year
/// starting on a Sunday would put its first day in week 0; that day is clamped
/// into week 1.
pub fn fiscal_week_of(date: NaiveDate, config: &FiscalConfig) -> u32 {
    let start = fiscal_year_start(date, config);
    let diff_days = (date - start).num_days().max(0) as u64;
    let offset = weekday_index(start) as u64;
    let week = (diff_days + offset).div_ceil(7);
    week.max(1) as u32
}

/// Fiscal year `date` belongs to, named after the calendar year it ends in
///
/// With a January start the fiscal year is the calendar year.
pub fn fiscal_year_of(date: NaiveDate, config: &FiscalConfig) -> i32 {
    if config.fiscal_start_month() == 1 {
        return date.year();
    }
    if date.month0() >= config.start_month_index() {
        date.year() + 1
    } else {
        date.year()
    }
}

/// Fiscal quarter (1..=4) containing the month of `date`
pub fn fiscal_quarter_of(date: NaiveDate, config: &FiscalConfig) -> u8 {
    let fiscal_month = (date.month0() + 12 - config.start_month_index()) % 12;
    (fiscal_month / 3 + 1) as u8
}

/// Zero-based month indices of a fiscal quarter, in fiscal order
///
/// The indices carry no year; a quarter spanning December/January returns
/// e.g. `[11, 0, 1]`.
pub fn quarter_month_indices(quarter: u8, config: &FiscalConfig) -> [u32; 3] {
    let start = ((quarter as u32).saturating_sub(1) * 3 + config.start_month_index()) % 12;
    [start, (start + 1) % 12, (start + 2) % 12]
}

//! Cell generation for the four picker grids.
//!
//! Produces the ordered cells a renderer lays out: a stable 6-row day grid,
//! the 12 months of a year and the 4 fiscal quarters of a year. Cells carry
//! their fiscal coordinates but no selection state; flags are added by the
//! picker controller.

use chrono::{Datelike, Days, NaiveDate};
use log::debug;
use shared::{DayCell, MonthCell, QuarterGroup};

use super::fiscal_calendar::{
    days_in_month, first_of_month, fiscal_week_of, fiscal_year_of, quarter_month_indices, weekday_index,
};
use crate::config::FiscalConfig;

/// Number of cells in the day grid (6 weeks of 7 days)
pub const DAY_GRID_CELLS: usize = 42;

/// Builds displayable cells for one fiscal configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct CellGenerator {
    config: FiscalConfig,
}

impl CellGenerator {
    pub fn new(config: FiscalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FiscalConfig {
        &self.config
    }

    /// Generate the 42-cell day grid for the month containing `anchor`
    ///
    /// Rows start on Sunday. Leading cells are the trailing days of the previous
    /// month, trailing cells the first days of the next month. The grid only
    /// comes up short when it would run past chrono's date range.
    pub fn generate_day_grid(&self, anchor: NaiveDate) -> Vec<DayCell> {
        let first = anchor.checked_sub_days(Days::new(anchor.day0() as u64));
        let start = first.and_then(|first| first.checked_sub_days(Days::new(weekday_index(first) as u64)));

        debug!(
            "🗓️ Generating day grid for {}-{:02}: {} month days, first cell {:?}",
            anchor.year(),
            anchor.month(),
            days_in_month(anchor.year(), anchor.month0() as i32),
            start
        );

        std::iter::successors(start, |date| date.succ_opt())
            .take(DAY_GRID_CELLS)
            .map(|date| DayCell {
                date,
                fiscal_week: fiscal_week_of(date, &self.config),
            })
            .collect()
    }

    /// Generate one cell per calendar month of `year`
    pub fn generate_month_grid(&self, year: i32) -> Vec<MonthCell> {
        (0..12).filter_map(|month_index| self.month_cell(year, month_index)).collect()
    }

    /// Generate the four fiscal quarters with member months dated within `year`
    pub fn generate_quarter_groups(&self, year: i32) -> Vec<QuarterGroup> {
        (1..=4u8)
            .filter_map(|quarter| {
                let [first, second, third] = quarter_month_indices(quarter, &self.config)
                    .map(|month_index| self.month_cell(year, month_index as i32));
                Some(QuarterGroup {
                    quarter,
                    member_months: [first?, second?, third?],
                })
            })
            .collect()
    }

    fn month_cell(&self, year: i32, month_index: i32) -> Option<MonthCell> {
        let date = first_of_month(year, month_index)?;
        Some(MonthCell {
            date,
            fiscal_year: fiscal_year_of(date, &self.config),
        })
    }
}

/// `start` and the six days after it, `None` when the week runs past chrono's last date
pub fn week_dates(start: NaiveDate) -> Option<[NaiveDate; 7]> {
    start.checked_add_days(Days::new(6))?;
    Some(std::array::from_fn(|offset| start + Days::new(offset as u64)))
}

/// Split a day grid into its week rows
pub fn week_rows(grid: &[DayCell]) -> impl Iterator<Item = &[DayCell]> {
    grid.chunks(7)
}

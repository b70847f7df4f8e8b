//! # Picker Controller
//!
//! Owns one picker session: the mode, the navigation anchor, the selection
//! store and the cell generator.
//!
//! ## Interaction model
//!
//! Each user interaction is one [`PickerAction`] passed to
//! [`PickerController::handle`], which applies it completely before returning.
//! The caller then re-reads [`PickerController::snapshot`] and renders it.
//!
//! ## Routing per mode
//!
//! | Mode | Arrows move | Clicks routed |
//! |------|-------------|---------------|
//! | Day | month | day, week number |
//! | Month | year | month |
//! | Quarter | year | quarter header, quarter month |
//! | MultiYearQuarter | year window | quarter header, quarter month, year label |
//!
//! Clicks a mode does not route are ignored.

use chrono::{Datelike, Local, NaiveDate};
use log::{debug, info, warn};
use shared::{
    DayCellView, HeaderLabel, MonthCellView, MonthKey, PickerMode, PickerSnapshot, QuarterGroupView,
    QuarterKey, QuarterMonthView, SelectionSummary, WeekRowView, YearKey, YearLabelView,
};

use super::cell_generator::{week_dates, week_rows, CellGenerator};
use super::fiscal_calendar::{
    first_of_month, fiscal_quarter_of, is_weekend, navigable_years, quarter_month_indices,
};
use super::selection_store::SelectionStore;
use super::summary::{header_label, summarize};
use crate::config::{ConfigError, FiscalConfig, PickerConfig};

/// One user interaction with the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    /// Navigation arrow: -1 for previous, +1 for next
    Navigate(i32),
    ClickDay(NaiveDate),
    /// Week number cell; carries the first date of the clicked row
    ClickWeek(NaiveDate),
    ClickMonth(NaiveDate),
    /// Quarter header (1..=4) of the displayed year
    ClickQuarter(u8),
    /// Month sub-cell below a quarter header
    ClickQuarterMonth { quarter: u8, date: NaiveDate },
    ClickYear(i32),
    Clear,
}

/// State machine for a single picker session
#[derive(Debug, Clone)]
pub struct PickerController {
    generator: CellGenerator,
    mode: PickerMode,
    anchor: NaiveDate,
    today: NaiveDate,
    selection: SelectionStore,
}

impl PickerController {
    /// Create a picker anchored on today's local date
    pub fn new(config: FiscalConfig, mode: PickerMode) -> Self {
        Self::with_today(config, mode, Local::now().date_naive())
    }

    /// Create a picker anchored on `today`
    pub fn with_today(config: FiscalConfig, mode: PickerMode, today: NaiveDate) -> Self {
        info!(
            "📅 Starting {:?} picker with fiscal year starting in month {} on {}",
            mode,
            config.fiscal_start_month(),
            today
        );
        Self {
            generator: CellGenerator::new(config),
            mode,
            anchor: today,
            today,
            selection: SelectionStore::new(today.year()),
        }
    }

    /// Create a picker from a loaded configuration, validating the fiscal start month
    pub fn from_config(config: &PickerConfig, today: NaiveDate) -> Result<Self, ConfigError> {
        Ok(Self::with_today(config.fiscal()?, config.mode, today))
    }

    pub fn config(&self) -> &FiscalConfig {
        self.generator.config()
    }

    pub fn mode(&self) -> PickerMode {
        self.mode
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    /// Move the anchor by whole calendar months, landing on the 1st
    ///
    /// The anchor stays put when the target month is outside [`navigable_years`].
    pub fn advance_month(&mut self, delta: i32) {
        let target = (self.anchor.month0() as i32)
            .checked_add(delta)
            .and_then(|month_index| first_of_month(self.anchor.year(), month_index));
        if self.move_anchor(target, delta) {
            info!("📅 Navigated to month {}/{}", self.anchor.month(), self.anchor.year());
        }
    }

    /// Move the anchor by whole years, landing on the 1st of the same month
    ///
    /// The anchor stays put when the target year is outside [`navigable_years`].
    pub fn advance_year(&mut self, delta: i32) {
        let target = self
            .anchor
            .year()
            .checked_add(delta)
            .and_then(|year| first_of_month(year, self.anchor.month0() as i32));
        if self.move_anchor(target, delta) {
            info!("📅 Navigated to year {}", self.anchor.year());
        }
    }

    fn move_anchor(&mut self, target: Option<NaiveDate>, delta: i32) -> bool {
        match target.filter(|date| navigable_years().contains(&date.year())) {
            Some(date) => {
                self.anchor = date;
                true
            }
            None => {
                warn!("📅 Cannot navigate by {} from {}, keeping anchor", delta, self.anchor);
                false
            }
        }
    }

    /// Shift all three years of the multi-year window; the anchor is untouched
    pub fn advance_year_window(&mut self, delta: i32) {
        let window = self.selection.year_window().shifted(delta);
        self.selection.set_year_window(window);
        info!("📅 Navigated to years {:?}", window.years());
    }

    /// Navigation arrow for the active mode
    pub fn navigate(&mut self, delta: i32) {
        match self.mode {
            PickerMode::Day => self.advance_month(delta),
            PickerMode::Month | PickerMode::Quarter => self.advance_year(delta),
            PickerMode::MultiYearQuarter => self.advance_year_window(delta),
        }
    }

    /// Clear the selection of the active mode
    pub fn clear(&mut self) {
        self.selection.clear(self.mode, self.anchor.year());
        info!("📅 Cleared {:?} selection", self.mode);
    }

    /// Apply one user action; returns false when the active mode does not route it
    pub fn handle(&mut self, action: PickerAction) -> bool {
        let handled = match action {
            PickerAction::Navigate(delta) => {
                self.navigate(delta);
                true
            }
            PickerAction::Clear => {
                self.clear();
                true
            }
            _ => match self.mode {
                PickerMode::Day => self.handle_day_action(action),
                PickerMode::Month => self.handle_month_action(action),
                PickerMode::Quarter => self.handle_quarter_action(action),
                PickerMode::MultiYearQuarter => self.handle_multi_year_action(action),
            },
        };
        if !handled {
            debug!("📅 Ignoring {:?} in {:?} mode", action, self.mode);
        }
        handled
    }

    fn handle_day_action(&mut self, action: PickerAction) -> bool {
        match action {
            PickerAction::ClickDay(date) => {
                self.selection.toggle_date(date);
                info!("📅 Toggled day {}", date);
                true
            }
            PickerAction::ClickWeek(start) => match week_dates(start) {
                Some(week) => {
                    self.selection.toggle_week(&week);
                    info!("📅 Toggled week starting {}", start);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    fn handle_month_action(&mut self, action: PickerAction) -> bool {
        match action {
            PickerAction::ClickMonth(date) => {
                let key = MonthKey::from_date(date);
                self.selection.toggle_month(key);
                info!("📅 Toggled month {}", key);
                true
            }
            _ => false,
        }
    }

    fn handle_quarter_action(&mut self, action: PickerAction) -> bool {
        match action {
            PickerAction::ClickQuarter(quarter) => self.select_quarter(quarter),
            PickerAction::ClickQuarterMonth { quarter, date } => self.select_quarter_month(quarter, date),
            _ => false,
        }
    }

    fn handle_multi_year_action(&mut self, action: PickerAction) -> bool {
        match action {
            PickerAction::ClickYear(year) => {
                self.selection.toggle_year(YearKey(year));
                info!("📅 Toggled year {}", year);
                true
            }
            _ => self.handle_quarter_action(action),
        }
    }

    /// Quarter header click: flip the quarter and force its months to the new state
    fn select_quarter(&mut self, quarter: u8) -> bool {
        if !(1..=4).contains(&quarter) {
            return false;
        }
        let key = self.quarter_key(quarter);
        let members = self.quarter_members(quarter);
        let was_selected = self.selection.is_quarter_selected(key);
        self.selection.toggle_quarter(key);
        self.selection.toggle_quarter_cascade(&members, was_selected);
        info!(
            "📅 {} quarter {}",
            if was_selected { "Deselected" } else { "Selected" },
            key
        );
        true
    }

    /// Month sub-cell click: flip the month, then bring the quarter flag in line
    fn select_quarter_month(&mut self, quarter: u8, date: NaiveDate) -> bool {
        if !(1..=4).contains(&quarter) {
            return false;
        }
        let members = self.quarter_members(quarter);
        let month = MonthKey::from_date(date);
        if !members.contains(&month) {
            return false;
        }
        let key = self.quarter_key(quarter);
        self.selection.toggle_month(month);
        self.selection.reconcile_quarter(key, &members);
        info!("📅 Toggled month {} of quarter {}", month, quarter);
        true
    }

    fn quarter_key(&self, quarter: u8) -> QuarterKey {
        QuarterKey::new(self.anchor.year(), quarter)
    }

    /// Member months of `quarter`, paired with the displayed year
    fn quarter_members(&self, quarter: u8) -> [MonthKey; 3] {
        let year = self.anchor.year();
        quarter_month_indices(quarter, self.config()).map(|month| MonthKey::new(year, month))
    }

    /// Day grid with selection, today, current-month and weekend flags
    pub fn day_cells(&self) -> Vec<DayCellView> {
        self.generator
            .generate_day_grid(self.anchor)
            .into_iter()
            .map(|cell| DayCellView {
                date: cell.date,
                day: cell.date.day(),
                fiscal_week: cell.fiscal_week,
                is_selected: self.selection.is_date_selected(cell.date),
                is_today: cell.date == self.today,
                is_current_month: cell.date.month() == self.anchor.month()
                    && cell.date.year() == self.anchor.year(),
                is_weekend: is_weekend(cell.date),
            })
            .collect()
    }

    /// Week-number column: each day-grid row's first date and its fiscal week
    pub fn week_rows(&self) -> Vec<WeekRowView> {
        let grid = self.generator.generate_day_grid(self.anchor);
        week_rows(&grid)
            .filter_map(|row| row.first())
            .map(|cell| WeekRowView {
                start: cell.date,
                fiscal_week: cell.fiscal_week,
            })
            .collect()
    }

    /// Month grid of the displayed year
    pub fn month_cells(&self) -> Vec<MonthCellView> {
        self.generator
            .generate_month_grid(self.anchor.year())
            .into_iter()
            .map(|cell| {
                let key = MonthKey::from_date(cell.date);
                MonthCellView {
                    key,
                    date: cell.date,
                    fiscal_year: cell.fiscal_year,
                    is_selected: self.selection.is_month_selected(key),
                    is_current_month: key == MonthKey::from_date(self.today),
                }
            })
            .collect()
    }

    /// Quarter headers and month sub-cells of the displayed year
    pub fn quarter_groups(&self) -> Vec<QuarterGroupView> {
        let today_quarter = (self.today.year() == self.anchor.year())
            .then(|| fiscal_quarter_of(self.today, self.config()));
        self.generator
            .generate_quarter_groups(self.anchor.year())
            .into_iter()
            .map(|group| {
                let key = self.quarter_key(group.quarter);
                QuarterGroupView {
                    key,
                    is_selected: self.selection.is_quarter_selected(key),
                    is_current_quarter: today_quarter == Some(group.quarter),
                    months: group
                        .member_months
                        .iter()
                        .map(|month| {
                            let month_key = MonthKey::from_date(month.date);
                            QuarterMonthView {
                                key: month_key,
                                date: month.date,
                                is_selected: self.selection.is_month_selected(month_key),
                            }
                        })
                        .collect(),
                }
            })
            .collect()
    }

    /// Year labels of the multi-year window
    pub fn year_labels(&self) -> Vec<YearLabelView> {
        self.selection
            .year_window()
            .years()
            .into_iter()
            .map(|year| YearLabelView {
                year,
                is_selected: self.selection.is_year_selected(YearKey(year)),
            })
            .collect()
    }

    pub fn header_label(&self) -> HeaderLabel {
        header_label(self.mode, self.anchor, self.selection.year_window(), self.config())
    }

    pub fn summary(&self) -> Option<SelectionSummary> {
        summarize(self.mode, &self.selection)
    }

    /// Render data for the active mode
    pub fn snapshot(&self) -> PickerSnapshot {
        let header = self.header_label();
        let summary = self.summary();
        let (day_cells, week_rows) = match self.mode {
            PickerMode::Day => (self.day_cells(), self.week_rows()),
            _ => (Vec::new(), Vec::new()),
        };
        let (month_cells, quarter_groups, year_labels) = match self.mode {
            PickerMode::Day => (Vec::new(), Vec::new(), Vec::new()),
            PickerMode::Month => (self.month_cells(), Vec::new(), Vec::new()),
            PickerMode::Quarter => (Vec::new(), self.quarter_groups(), Vec::new()),
            PickerMode::MultiYearQuarter => (Vec::new(), self.quarter_groups(), self.year_labels()),
        };
        PickerSnapshot {
            mode: self.mode,
            fiscal_start_month: self.config().fiscal_start_month(),
            header_text: header.to_string(),
            header,
            summary_text: summary.as_ref().map(|summary| summary.to_string()),
            summary,
            day_cells,
            week_rows,
            month_cells,
            quarter_groups,
            year_labels,
        }
    }
}

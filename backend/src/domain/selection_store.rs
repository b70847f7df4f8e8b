//! # Selection Store
//!
//! Holds what the user has selected at each granularity plus the year window
//! of multi-year mode.
//!
//! ## Rules
//!
//! - Membership is by value key (`NaiveDate`, [`MonthKey`], [`QuarterKey`],
//!   [`YearKey`]); dates and months are rebuilt on every render pass.
//! - Every mutation builds a new set and swaps it in, so a cloned snapshot
//!   taken before a call never sees a half-applied edit.
//! - A quarter click forces its three months all in or all out.
//! - After a single-month edit in quarter mode, [`SelectionStore::reconcile_quarter`]
//!   brings the quarter flag back in line with its months.
//! - The last selected year cannot be deselected.

use chrono::NaiveDate;
use log::debug;
use shared::{MonthKey, PickerMode, QuarterKey, YearKey, YearWindow};
use std::collections::BTreeSet;

/// Selected sets for every granularity of a picker session
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionStore {
    dates: BTreeSet<NaiveDate>,
    months: BTreeSet<MonthKey>,
    quarters: BTreeSet<QuarterKey>,
    years: BTreeSet<YearKey>,
    year_window: YearWindow,
}

impl SelectionStore {
    /// Create an empty selection with the year window centred on `current_year`
    ///
    /// `current_year` starts out as the one selected year.
    pub fn new(current_year: i32) -> Self {
        Self {
            dates: BTreeSet::new(),
            months: BTreeSet::new(),
            quarters: BTreeSet::new(),
            years: BTreeSet::from([YearKey(current_year)]),
            year_window: YearWindow::around(current_year),
        }
    }

    pub fn dates(&self) -> &BTreeSet<NaiveDate> {
        &self.dates
    }

    pub fn months(&self) -> &BTreeSet<MonthKey> {
        &self.months
    }

    pub fn quarters(&self) -> &BTreeSet<QuarterKey> {
        &self.quarters
    }

    pub fn years(&self) -> &BTreeSet<YearKey> {
        &self.years
    }

    pub fn year_window(&self) -> YearWindow {
        self.year_window
    }

    pub fn is_date_selected(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn is_month_selected(&self, key: MonthKey) -> bool {
        self.months.contains(&key)
    }

    pub fn is_quarter_selected(&self, key: QuarterKey) -> bool {
        self.quarters.contains(&key)
    }

    pub fn is_year_selected(&self, key: YearKey) -> bool {
        self.years.contains(&key)
    }

    /// Add `date` if absent, remove it if present
    pub fn toggle_date(&mut self, date: NaiveDate) {
        self.dates = toggled(&self.dates, date);
    }

    /// Toggle each date of a week on its own; days already selected drop out
    pub fn toggle_week(&mut self, dates: &[NaiveDate]) {
        let mut next = self.dates.clone();
        for date in dates {
            if !next.remove(date) {
                next.insert(*date);
            }
        }
        self.dates = next;
    }

    pub fn toggle_month(&mut self, key: MonthKey) {
        self.months = toggled(&self.months, key);
    }

    pub fn toggle_quarter(&mut self, key: QuarterKey) {
        self.quarters = toggled(&self.quarters, key);
    }

    /// Force a quarter's months to the opposite of the quarter's state before the click
    ///
    /// When the quarter was selected all three months are removed, otherwise all
    /// three are added. Months that disagreed with each other beforehand are not
    /// considered.
    pub fn toggle_quarter_cascade(&mut self, months: &[MonthKey], was_selected: bool) {
        let mut next = self.months.clone();
        for key in months {
            if was_selected {
                next.remove(key);
            } else {
                next.insert(*key);
            }
        }
        self.months = next;
    }

    /// Select `key`, or deselect it while at least one other year stays selected
    pub fn toggle_year(&mut self, key: YearKey) {
        if self.years.contains(&key) {
            if self.years.len() > 1 {
                self.years = self.years.iter().copied().filter(|year| *year != key).collect();
            } else {
                debug!("📅 Keeping {} selected: last selected year", key);
            }
        } else {
            self.years = self.years.iter().copied().chain([key]).collect();
        }
    }

    /// Re-derive a quarter's flag from its member months
    ///
    /// Returns true when the quarter flag changed.
    pub fn reconcile_quarter(&mut self, quarter: QuarterKey, members: &[MonthKey]) -> bool {
        let all_selected = members.iter().all(|key| self.months.contains(key));
        let marked = self.quarters.contains(&quarter);
        if all_selected != marked {
            self.toggle_quarter(quarter);
            debug!(
                "📅 Reconciled {}: {}",
                quarter,
                if all_selected { "all months selected" } else { "month removed" }
            );
            return true;
        }
        false
    }

    pub fn set_year_window(&mut self, window: YearWindow) {
        self.year_window = window;
    }

    /// Clear the selection that belongs to `mode`
    ///
    /// Quarter modes clear months, quarters and years together and recentre the
    /// year window on `anchor_year`.
    pub fn clear(&mut self, mode: PickerMode, anchor_year: i32) {
        match mode {
            PickerMode::Day => self.dates = BTreeSet::new(),
            PickerMode::Month => self.months = BTreeSet::new(),
            PickerMode::Quarter | PickerMode::MultiYearQuarter => {
                self.months = BTreeSet::new();
                self.quarters = BTreeSet::new();
                self.years = BTreeSet::new();
                self.year_window = YearWindow::around(anchor_year);
            }
        }
    }
}

fn toggled<T: Ord + Copy>(set: &BTreeSet<T>, item: T) -> BTreeSet<T> {
    if set.contains(&item) {
        set.iter().copied().filter(|existing| *existing != item).collect()
    } else {
        set.iter().copied().chain([item]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn q1_2024() -> [MonthKey; 3] {
        [MonthKey::new(2024, 0), MonthKey::new(2024, 1), MonthKey::new(2024, 2)]
    }

    #[test]
    fn test_new_store() {
        let store = SelectionStore::new(2024);
        assert!(store.dates().is_empty());
        assert!(store.months().is_empty());
        assert!(store.quarters().is_empty());
        assert!(store.is_year_selected(YearKey(2024)));
        assert_eq!(store.year_window().years(), [2023, 2024, 2025]);
    }

    #[test]
    fn test_toggle_date_twice_restores() {
        let mut store = SelectionStore::new(2024);
        store.toggle_date(date(2024, 1, 5));
        assert!(store.is_date_selected(date(2024, 1, 5)));
        store.toggle_date(date(2024, 1, 5));
        assert!(store.dates().is_empty());
    }

    #[test]
    fn test_toggle_month_and_quarter_twice_restores() {
        let mut store = SelectionStore::new(2024);
        store.toggle_month(MonthKey::new(2024, 4));
        store.toggle_quarter(QuarterKey::new(2024, 2));
        assert!(store.is_month_selected(MonthKey::new(2024, 4)));
        assert!(store.is_quarter_selected(QuarterKey::new(2024, 2)));

        store.toggle_month(MonthKey::new(2024, 4));
        store.toggle_quarter(QuarterKey::new(2024, 2));
        assert_eq!(store, SelectionStore::new(2024));
    }

    #[test]
    fn test_toggle_week_is_per_day() {
        let mut store = SelectionStore::new(2024);
        store.toggle_date(date(2024, 1, 9));

        let week: Vec<NaiveDate> = (7..=13).map(|day| date(2024, 1, day)).collect();
        store.toggle_week(&week);

        assert_eq!(store.dates().len(), 6);
        assert!(!store.is_date_selected(date(2024, 1, 9)));
        assert!(store.is_date_selected(date(2024, 1, 7)));
    }

    #[test]
    fn test_toggle_week_collapses_duplicates() {
        let mut store = SelectionStore::new(2024);
        let day = date(2024, 1, 7);
        store.toggle_week(&[day, day]);
        // Second occurrence toggles the first back out
        assert!(store.dates().is_empty());
    }

    #[test]
    fn test_cascade_adds_all_months() {
        let mut store = SelectionStore::new(2024);
        store.toggle_month(MonthKey::new(2024, 1));
        store.toggle_quarter_cascade(&q1_2024(), false);
        assert_eq!(store.months().len(), 3);
        for key in q1_2024() {
            assert!(store.is_month_selected(key));
        }
    }

    #[test]
    fn test_cascade_removes_all_months() {
        let mut store = SelectionStore::new(2024);
        store.toggle_month(MonthKey::new(2024, 0));
        store.toggle_month(MonthKey::new(2024, 5));
        store.toggle_quarter_cascade(&q1_2024(), true);
        assert_eq!(store.months().iter().copied().collect::<Vec<_>>(), vec![MonthKey::new(2024, 5)]);
    }

    #[test]
    fn test_cascade_then_reconcile_marks_quarter() {
        let mut store = SelectionStore::new(2024);
        let quarter = QuarterKey::new(2024, 1);
        store.toggle_quarter_cascade(&q1_2024(), false);
        assert!(store.reconcile_quarter(quarter, &q1_2024()));
        assert!(store.is_quarter_selected(quarter));
        assert!(!store.reconcile_quarter(quarter, &q1_2024()));
    }

    #[test]
    fn test_reconcile_unmarks_partial_quarter() {
        let mut store = SelectionStore::new(2024);
        let quarter = QuarterKey::new(2024, 1);
        store.toggle_quarter(quarter);
        store.toggle_quarter_cascade(&q1_2024(), false);

        store.toggle_month(MonthKey::new(2024, 1));
        assert!(store.reconcile_quarter(quarter, &q1_2024()));
        assert!(!store.is_quarter_selected(quarter));
    }

    #[test]
    fn test_toggle_year_keeps_last_year() {
        let mut store = SelectionStore::new(2024);
        store.toggle_year(YearKey(2024));
        assert_eq!(store.years().len(), 1);
        assert!(store.is_year_selected(YearKey(2024)));
    }

    #[test]
    fn test_toggle_year_add_and_remove() {
        let mut store = SelectionStore::new(2024);
        store.toggle_year(YearKey(2025));
        assert_eq!(store.years().len(), 2);

        store.toggle_year(YearKey(2024));
        assert_eq!(store.years().iter().copied().collect::<Vec<_>>(), vec![YearKey(2025)]);
    }

    #[test]
    fn test_clear_day_mode_only_clears_dates() {
        let mut store = SelectionStore::new(2024);
        store.toggle_date(date(2024, 1, 5));
        store.toggle_month(MonthKey::new(2024, 0));
        store.clear(PickerMode::Day, 2024);
        assert!(store.dates().is_empty());
        assert_eq!(store.months().len(), 1);
    }

    #[test]
    fn test_clear_month_mode_only_clears_months() {
        let mut store = SelectionStore::new(2024);
        store.toggle_date(date(2024, 1, 5));
        store.toggle_month(MonthKey::new(2024, 0));
        store.clear(PickerMode::Month, 2024);
        assert!(store.months().is_empty());
        assert_eq!(store.dates().len(), 1);
    }

    #[test]
    fn test_clear_quarter_modes_reset_window() {
        for mode in [PickerMode::Quarter, PickerMode::MultiYearQuarter] {
            let mut store = SelectionStore::new(2024);
            store.toggle_quarter_cascade(&q1_2024(), false);
            store.toggle_quarter(QuarterKey::new(2024, 1));
            store.set_year_window(YearWindow::around(2030));

            store.clear(mode, 2026);
            assert!(store.months().is_empty());
            assert!(store.quarters().is_empty());
            assert!(store.years().is_empty());
            assert_eq!(store.year_window().years(), [2025, 2026, 2027]);
        }
    }

    #[test]
    fn test_snapshot_is_unaffected_by_later_edits() {
        let mut store = SelectionStore::new(2024);
        store.toggle_month(MonthKey::new(2024, 0));
        let snapshot = store.clone();
        store.toggle_quarter_cascade(&q1_2024(), false);
        assert_eq!(snapshot.months().len(), 1);
        assert_eq!(store.months().len(), 3);
    }
}

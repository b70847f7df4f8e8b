//! Display derivations: the selection summary banner and the navigation header.
//!
//! Both are pure functions of the current state and are recomputed on every
//! change rather than stored.

use chrono::{Datelike, NaiveDate};
use shared::{HeaderLabel, PickerMode, SelectionSummary, YearWindow};

use super::fiscal_calendar::fiscal_year_of;
use super::selection_store::SelectionStore;
use crate::config::FiscalConfig;

/// Summarize the selection of `mode`, `None` when the banner should be hidden
pub fn summarize(mode: PickerMode, store: &SelectionStore) -> Option<SelectionSummary> {
    match mode {
        PickerMode::Day => {
            let dates = store.dates();
            match dates.len() {
                0 => None,
                1 => dates.iter().next().copied().map(SelectionSummary::SingleDate),
                count => Some(SelectionSummary::Dates(count)),
            }
        }
        PickerMode::Month => {
            let months = store.months();
            match months.len() {
                0 => None,
                1 => months.iter().next().copied().map(SelectionSummary::SingleMonth),
                count => Some(SelectionSummary::Months(count)),
            }
        }
        PickerMode::Quarter | PickerMode::MultiYearQuarter => {
            let months = store.months();
            let quarters = store.quarters().len();
            match (quarters, months.len()) {
                (0, 0) => None,
                (0, 1) => months.iter().next().copied().map(SelectionSummary::SingleMonth),
                (quarters, months) => Some(SelectionSummary::Quarters { quarters, months }),
            }
        }
    }
}

/// Header shown between the navigation arrows
pub fn header_label(
    mode: PickerMode,
    anchor: NaiveDate,
    year_window: YearWindow,
    config: &FiscalConfig,
) -> HeaderLabel {
    match mode {
        PickerMode::Day => HeaderLabel::MonthYear {
            month: anchor.month(),
            year: anchor.year(),
            fiscal_year: fiscal_year_of(anchor, config),
        },
        PickerMode::Month => HeaderLabel::Year(anchor.year()),
        PickerMode::Quarter => HeaderLabel::FiscalYear(anchor.year()),
        PickerMode::MultiYearQuarter => HeaderLabel::YearWindow(year_window.years()),
    }
}

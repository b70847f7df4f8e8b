use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selection granularity of a picker session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickerMode {
    /// Individual days on a 6-week grid with fiscal week numbers
    #[default]
    Day,
    /// Whole months of one calendar year
    Month,
    /// Fiscal quarters and their member months of one year
    Quarter,
    /// Quarters plus a navigable 3-year window of selectable years
    MultiYearQuarter,
}

impl PickerMode {
    /// Get the button text for this mode
    pub fn label(&self) -> &'static str {
        match self {
            PickerMode::Day => "Date",
            PickerMode::Month => "Year-Month",
            PickerMode::Quarter => "Quarter",
            PickerMode::MultiYearQuarter => "Multi Yr Qtr Month",
        }
    }
}

/// Identity of a selected month: year plus zero-based month index (0 = January)
///
/// Displays as `{year}-{month}`, e.g. `2024-0` for January 2024.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Key of the month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}

/// Identity of a selected fiscal quarter, displays as `{year}-Q{quarter}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuarterKey {
    pub year: i32,
    pub quarter: u8,
}

impl QuarterKey {
    pub fn new(year: i32, quarter: u8) -> Self {
        Self { year, quarter }
    }
}

impl fmt::Display for QuarterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-Q{}", self.year, self.quarter)
    }
}

/// Identity of a selected year label in multi-year mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearKey(pub i32);

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Three consecutive years shown side by side in multi-year mode
///
/// Stored as the centre year, so the window is always `[center - 1, center, center + 1]`.
/// Year numbers wrap at the ends of `i32`, which keeps `shifted(k)` followed by
/// `shifted(-k)` an exact round trip for every `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearWindow {
    center: i32,
}

impl YearWindow {
    /// Window centred on `year`
    pub fn around(year: i32) -> Self {
        Self { center: year }
    }

    /// The three years in ascending order
    pub fn years(&self) -> [i32; 3] {
        [self.center.wrapping_sub(1), self.center, self.center.wrapping_add(1)]
    }

    /// Window with every entry moved by `delta`
    pub fn shifted(&self, delta: i32) -> Self {
        Self {
            center: self.center.wrapping_add(delta),
        }
    }
}

/// A single day of the 6-week grid annotated with its fiscal week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub fiscal_week: u32,
}

/// A calendar month (dated on its first day) tagged with the fiscal year it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCell {
    pub date: NaiveDate,
    pub fiscal_year: i32,
}

/// A fiscal quarter and its three member months in fiscal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterGroup {
    pub quarter: u8,
    pub member_months: [MonthCell; 3],
}

/// Day cell with the flags a renderer needs for styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCellView {
    pub date: NaiveDate,
    pub day: u32,
    pub fiscal_week: u32,
    pub is_selected: bool,
    pub is_today: bool,
    /// False for padding days borrowed from the adjacent months
    pub is_current_month: bool,
    pub is_weekend: bool,
}

/// Week-number column entry for one row of the day grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRowView {
    /// First date of the row, sent back when the week number is clicked
    pub start: NaiveDate,
    pub fiscal_week: u32,
}

/// Month cell of the year-month grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthCellView {
    pub key: MonthKey,
    pub date: NaiveDate,
    pub fiscal_year: i32,
    pub is_selected: bool,
    /// The month that contains today
    pub is_current_month: bool,
}

/// Month sub-cell below a quarter header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterMonthView {
    pub key: MonthKey,
    pub date: NaiveDate,
    pub is_selected: bool,
}

/// Quarter header plus its month sub-cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterGroupView {
    pub key: QuarterKey,
    pub is_selected: bool,
    /// The quarter that contains today
    pub is_current_quarter: bool,
    pub months: Vec<QuarterMonthView>,
}

/// Year label of the multi-year window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearLabelView {
    pub year: i32,
    pub is_selected: bool,
}

/// Navigation header contents for the active mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HeaderLabel {
    /// Day mode: month (1-12), calendar year and the anchor's fiscal year
    MonthYear { month: u32, year: i32, fiscal_year: i32 },
    /// Month mode: the displayed calendar year
    Year(i32),
    /// Quarter mode: the displayed fiscal year
    FiscalYear(i32),
    /// Multi-year mode: the three window years
    YearWindow([i32; 3]),
}

impl fmt::Display for HeaderLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderLabel::MonthYear { month, year, fiscal_year } => write!(
                f,
                "{} {} - FY{:02}",
                month_name(*month),
                year,
                fiscal_year.rem_euclid(100)
            ),
            HeaderLabel::Year(year) => write!(f, "{}", year),
            HeaderLabel::FiscalYear(year) => write!(f, "FY {}", year),
            HeaderLabel::YearWindow([a, b, c]) => write!(f, "{} {} {}", a, b, c),
        }
    }
}

/// Summary banner contents; absent when nothing is selected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionSummary {
    SingleDate(NaiveDate),
    Dates(usize),
    SingleMonth(MonthKey),
    Months(usize),
    Quarters { quarters: usize, months: usize },
}

impl fmt::Display for SelectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionSummary::SingleDate(date) => write!(f, "{}", date.format("%a %b %d %Y")),
            SelectionSummary::Dates(count) => {
                write!(f, "{} {} selected", count, plural(*count, "date"))
            }
            SelectionSummary::SingleMonth(key) => write!(f, "{}", key),
            SelectionSummary::Months(count) => {
                write!(f, "{} {} selected", count, plural(*count, "month"))
            }
            SelectionSummary::Quarters { quarters, months } => write!(
                f,
                "{} {}, {} {} selected",
                quarters,
                plural(*quarters, "quarter"),
                months,
                plural(*months, "month")
            ),
        }
    }
}

/// Everything a renderer needs for one frame of the picker
///
/// Cell collections not used by `mode` are left empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerSnapshot {
    pub mode: PickerMode,
    pub fiscal_start_month: u32,
    pub header: HeaderLabel,
    pub header_text: String,
    pub summary: Option<SelectionSummary>,
    pub summary_text: Option<String>,
    pub day_cells: Vec<DayCellView>,
    pub week_rows: Vec<WeekRowView>,
    pub month_cells: Vec<MonthCellView>,
    pub quarter_groups: Vec<QuarterGroupView>,
    pub year_labels: Vec<YearLabelView>,
}

/// Get the human-readable name for a month number (1-12)
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key_display_is_zero_based() {
        assert_eq!(MonthKey::new(2024, 0).to_string(), "2024-0");
        assert_eq!(MonthKey::new(2024, 11).to_string(), "2024-11");
    }

    #[test]
    fn test_month_key_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        let key = MonthKey::from_date(date);
        assert_eq!(key, MonthKey::new(2024, 2));
    }

    #[test]
    fn test_quarter_and_year_key_display() {
        assert_eq!(QuarterKey::new(2024, 1).to_string(), "2024-Q1");
        assert_eq!(YearKey(2025).to_string(), "2025");
    }

    #[test]
    fn test_year_window() {
        let window = YearWindow::around(2024);
        assert_eq!(window.years(), [2023, 2024, 2025]);

        let shifted = window.shifted(1);
        assert_eq!(shifted.years(), [2024, 2025, 2026]);
        assert_eq!(shifted.shifted(-1), window);
    }

    #[test]
    fn test_year_window_extreme_shifts_round_trip() {
        let window = YearWindow::around(2024);
        for k in [i32::MAX, -i32::MAX, i32::MIN + 2025, 1_000_000_000] {
            assert_eq!(window.shifted(k).shifted(-k), window);
        }
        assert_eq!(YearWindow::around(i32::MAX).years(), [i32::MAX - 1, i32::MAX, i32::MIN]);
        assert_eq!(YearWindow::around(i32::MIN).years(), [i32::MAX, i32::MIN, i32::MIN + 1]);
    }

    #[test]
    fn test_header_label_text() {
        let day = HeaderLabel::MonthYear { month: 2, year: 2024, fiscal_year: 2024 };
        assert_eq!(day.to_string(), "February 2024 - FY24");

        let turn_of_century = HeaderLabel::MonthYear { month: 12, year: 2099, fiscal_year: 2100 };
        assert_eq!(turn_of_century.to_string(), "December 2099 - FY00");

        assert_eq!(HeaderLabel::Year(2024).to_string(), "2024");
        assert_eq!(HeaderLabel::FiscalYear(2024).to_string(), "FY 2024");
        assert_eq!(HeaderLabel::YearWindow([2023, 2024, 2025]).to_string(), "2023 2024 2025");
    }

    #[test]
    fn test_summary_text() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(SelectionSummary::SingleDate(date).to_string(), "Fri Jan 05 2024");
        assert_eq!(SelectionSummary::Dates(3).to_string(), "3 dates selected");
        assert_eq!(SelectionSummary::Months(1).to_string(), "1 month selected");
        assert_eq!(SelectionSummary::SingleMonth(MonthKey::new(2024, 4)).to_string(), "2024-4");
        assert_eq!(
            SelectionSummary::Quarters { quarters: 1, months: 3 }.to_string(),
            "1 quarter, 3 months selected"
        );
        assert_eq!(
            SelectionSummary::Quarters { quarters: 0, months: 2 }.to_string(),
            "0 quarters, 2 months selected"
        );
    }

    #[test]
    fn test_mode_serializes_snake_case() {
        let json = serde_json::to_string(&PickerMode::MultiYearQuarter).unwrap();
        assert_eq!(json, "\"multi_year_quarter\"");

        let mode: PickerMode = serde_json::from_str("\"quarter\"").unwrap();
        assert_eq!(mode, PickerMode::Quarter);
        assert_eq!(mode.label(), "Quarter");
        assert!(serde_json::from_str::<PickerMode>("\"week\"").is_err());
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "Invalid Month");
    }
}

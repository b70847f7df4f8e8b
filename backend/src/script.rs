//! Text commands for driving a picker from the command line.
//!
//! | Command | Action |
//! |---------|--------|
//! | `next` / `prev` | navigation arrow |
//! | `clear` | clear button |
//! | `day:2024-01-05` | day cell |
//! | `week:2024-01-07` | week number of the row starting on that date |
//! | `month:2024-04` | month cell |
//! | `quarter:2` | quarter header |
//! | `qmonth:2:2024-05` | month sub-cell of a quarter |
//! | `year:2025` | year label |

use chrono::NaiveDate;
use std::str::FromStr;

use crate::domain::picker_controller::PickerAction;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ScriptError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("invalid argument in {command}: {argument}")]
    InvalidArgument { command: String, argument: String },
}

/// Parse one command into a picker action
pub fn parse_action(command: &str) -> Result<PickerAction, ScriptError> {
    let (name, argument) = command.split_once(':').unwrap_or((command, ""));
    let invalid = || ScriptError::InvalidArgument {
        command: command.to_string(),
        argument: argument.to_string(),
    };

    match name {
        "next" => Ok(PickerAction::Navigate(1)),
        "prev" => Ok(PickerAction::Navigate(-1)),
        "clear" => Ok(PickerAction::Clear),
        "day" => parse_date(argument).map(PickerAction::ClickDay).ok_or_else(invalid),
        "week" => parse_date(argument).map(PickerAction::ClickWeek).ok_or_else(invalid),
        "month" => parse_month(argument).map(PickerAction::ClickMonth).ok_or_else(invalid),
        "quarter" => parse_number::<u8>(argument)
            .map(PickerAction::ClickQuarter)
            .ok_or_else(invalid),
        "qmonth" => {
            let (quarter, month) = argument.split_once(':').ok_or_else(invalid)?;
            let quarter = parse_number::<u8>(quarter).ok_or_else(invalid)?;
            let date = parse_month(month).ok_or_else(invalid)?;
            Ok(PickerAction::ClickQuarterMonth { quarter, date })
        }
        "year" => parse_number::<i32>(argument)
            .map(PickerAction::ClickYear)
            .ok_or_else(invalid),
        _ => Err(ScriptError::UnknownCommand(command.to_string())),
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn parse_month(text: &str) -> Option<NaiveDate> {
    parse_date(&format!("{}-01", text))
}

fn parse_number<T: FromStr>(text: &str) -> Option<T> {
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse_action("next"), Ok(PickerAction::Navigate(1)));
        assert_eq!(parse_action("prev"), Ok(PickerAction::Navigate(-1)));
        assert_eq!(parse_action("clear"), Ok(PickerAction::Clear));
    }

    #[test]
    fn test_parse_clicks() {
        assert_eq!(parse_action("day:2024-01-05"), Ok(PickerAction::ClickDay(date(2024, 1, 5))));
        assert_eq!(parse_action("week:2024-01-07"), Ok(PickerAction::ClickWeek(date(2024, 1, 7))));
        assert_eq!(parse_action("month:2024-04"), Ok(PickerAction::ClickMonth(date(2024, 4, 1))));
        assert_eq!(parse_action("quarter:3"), Ok(PickerAction::ClickQuarter(3)));
        assert_eq!(
            parse_action("qmonth:2:2024-05"),
            Ok(PickerAction::ClickQuarterMonth { quarter: 2, date: date(2024, 5, 1) })
        );
        assert_eq!(parse_action("year:2025"), Ok(PickerAction::ClickYear(2025)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_action("fortnight"),
            Err(ScriptError::UnknownCommand("fortnight".to_string()))
        );
        assert!(matches!(parse_action("day:2024-02-30"), Err(ScriptError::InvalidArgument { .. })));
        assert!(matches!(parse_action("quarter:x"), Err(ScriptError::InvalidArgument { .. })));
        assert!(matches!(parse_action("qmonth:2"), Err(ScriptError::InvalidArgument { .. })));
    }
}

//! Date utility functions for the filter panel.

use chrono::NaiveDate;

/// Format used by `<input type="date">` values.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// German short calendar date, e.g. `1.1.2024`.
pub const DISPLAY_DATE_FORMAT: &str = "%-d.%-m.%Y";

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, INPUT_DATE_FORMAT)?)
}

/// Interpret the value of a date input.
///
/// An emptied input yields `None`. Text that is not a calendar date is
/// logged and also yields `None`, so the field falls back to "unset".
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match parse_date(value) {
        Ok(date) => Some(date),
        Err(e) => {
            log::warn!("Ignoring unparsable date input {:?}: {}", value, e);
            None
        }
    }
}

/// Render a date back into a date input (`""` when unset).
pub fn input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(INPUT_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Format a date for the active filter summary.
pub fn format_display_date(date: &NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_date() {
        assert_eq!(
            parse_input_date("2024-01-31"),
            NaiveDate::from_ymd_opt(2024, 1, 31)
        );
    }

    #[test]
    fn test_parse_input_date_empty_is_unset() {
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("   "), None);
    }

    #[test]
    fn test_parse_input_date_garbage_is_unset() {
        assert_eq!(parse_input_date("31.01.2024"), None);
        assert_eq!(parse_input_date("2024-02-30"), None);
    }

    #[test]
    fn test_parse_date_error() {
        assert!(parse_date("not a date").is_err());
    }

    #[test]
    fn test_input_value() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(input_value(Some(date)), "2024-03-05");
        assert_eq!(input_value(None), "");
    }

    #[test]
    fn test_format_display_date_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(format_display_date(&date), "1.1.2024");
        let date = NaiveDate::from_ymd_opt(2023, 12, 24).unwrap();
        assert_eq!(format_display_date(&date), "24.12.2023");
    }
}

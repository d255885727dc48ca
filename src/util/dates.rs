//! Conversions between `time::Date` and the `YYYY-MM-DD` strings that
//! `<input type="date">` exchanges with us.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

const HTML_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a date-input value. An empty or malformed value (a cleared
/// picker) comes back as `None` rather than an error.
pub fn parse_input(value: &str) -> Option<Date> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Date::parse(trimmed, HTML_DATE).ok()
}

/// Formats a date back into input-value form; `None` clears the field.
pub fn input_value(date: Option<Date>) -> String {
    date.and_then(|d| d.format(HTML_DATE).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn parses_the_browser_date_format() {
        assert_eq!(parse_input("2024-01-04"), Some(date!(2024 - 01 - 04)));
        assert_eq!(parse_input(" 2024-12-31 "), Some(date!(2024 - 12 - 31)));
    }

    #[test]
    fn cleared_or_garbled_values_are_none() {
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("   "), None);
        assert_eq!(parse_input("04/01/2024"), None);
        assert_eq!(parse_input("2024-13-01"), None);
    }

    #[test]
    fn formats_what_the_input_expects() {
        assert_eq!(input_value(Some(date!(2024 - 03 - 10))), "2024-03-10");
        assert_eq!(input_value(None), "");
    }
}

//! Calendar date validation

use chrono::NaiveDate;

/// Format produced by browser date inputs
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` calendar date. Surrounding whitespace is not stripped.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("1990-01-01"), NaiveDate::from_ymd_opt(1990, 1, 1));
    }

    #[rstest]
    #[case("1990-01-01", true)]
    #[case("2000-02-29", true)]
    #[case("2001-02-29", false)]
    #[case("1990-13-01", false)]
    #[case("01/01/1990", false)]
    #[case("yesterday", false)]
    #[case("", false)]
    #[case(" 1990-01-01 ", false)]
    #[case("1990-01-01\n", false)]
    fn test_is_valid_date(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_date(value), expected);
    }
}

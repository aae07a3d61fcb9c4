//! Post date parsing and display formatting.

use chrono::{Datelike, NaiveDate};

use crate::PostError;

/// Accepted `date` format, as reported in [`PostError::InvalidDate`].
pub const DATE_FORMAT: &str = "YYYY-MM-DD";

/// Parse a `YYYY-MM-DD` date.
///
/// The shape is checked strictly (4-digit year, 2-digit month and day, `-`
/// separators) before calendar validation, so `2024-3-5` is rejected.
///
/// # Errors
///
/// Returns [`PostError::InvalidDate`] if the value has the wrong shape or
/// names a day that does not exist.
pub fn parse_date(value: &str) -> Result<NaiveDate, PostError> {
    let invalid = || PostError::InvalidDate {
        value: value.to_owned(),
        expected_format: DATE_FORMAT,
    };

    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    let year: i32 = value[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = value[5..7].parse().map_err(|_| invalid())?;
    let day: u32 = value[8..10].parse().map_err(|_| invalid())?;
    if year == 0 {
        return Err(invalid());
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Format a date as `Month Day, Year`, e.g. `March 5, 2024`.
///
/// The day is written as a plain number, so it never has a leading zero.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use inkpost_post::display_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(display_date(date), "March 5, 2024");
/// ```
pub fn display_date(date: NaiveDate) -> String {
    format!("{} {}, {:04}", date.format("%B"), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid_date() {
        assert_eq!(parse_date("2024-03-05"), Ok(date(2024, 3, 5)));
        assert_eq!(parse_date("1999-12-31"), Ok(date(1999, 12, 31)));
    }

    #[test]
    fn test_parse_leap_day() {
        assert_eq!(parse_date("2024-02-29"), Ok(date(2024, 2, 29)));
        assert!(parse_date("2023-02-29").is_err());
    }

    #[test]
    fn test_parse_rejects_loose_shapes() {
        for value in [
            "2024-3-5",
            "24-03-05",
            "2024/03/05",
            "2024-03-05T00:00",
            " 2024-03-05",
            "March 5, 2024",
            "",
            "+024-03-05",
        ] {
            assert_eq!(
                parse_date(value),
                Err(PostError::InvalidDate {
                    value: value.to_owned(),
                    expected_format: DATE_FORMAT,
                }),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("2024-00-10").is_err());
        assert!(parse_date("2024-04-31").is_err());
        assert!(parse_date("0000-01-01").is_err());
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        assert!(parse_date("２０２４-03-05").is_err());
    }

    #[test]
    fn test_display_strips_leading_zero() {
        assert_eq!(display_date(date(2024, 3, 5)), "March 5, 2024");
        assert_eq!(display_date(date(2024, 1, 9)), "January 9, 2024");
    }

    #[test]
    fn test_display_two_digit_days() {
        assert_eq!(display_date(date(2023, 10, 10)), "October 10, 2023");
        assert_eq!(display_date(date(2023, 12, 31)), "December 31, 2023");
    }

    #[test]
    fn test_display_small_year_padded() {
        assert_eq!(display_date(date(5, 6, 7)), "June 7, 0005");
    }
}

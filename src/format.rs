use std::fmt::Display;

use chrono::DateTime;

use crate::error::ForecastError;

pub const DEGREE_CELSIUS: &str = "\u{00B0}C";

const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";
const OUTPUT_FORMAT: &str = "%A %d %B %Y";

/// Renders an ISO-8601 timestamp such as `2023-06-05T18:00:00+01:00` as
/// `Monday 05 June 2023`. The calendar date is taken in the timestamp's own
/// offset.
pub fn format_date(iso: &str) -> Result<String, ForecastError> {
    let date = DateTime::parse_from_str(iso, INPUT_FORMAT).map_err(|source| ForecastError::Date {
        input: iso.to_string(),
        source,
    })?;
    Ok(date.format(OUTPUT_FORMAT).to_string())
}

pub fn format_temperature<T: Display>(value: T) -> String {
    format!("{value}{DEGREE_CELSIUS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date("2023-06-05T18:00:00+01:00").unwrap(),
            "Monday 05 June 2023"
        );
        assert_eq!(
            format_date("2021-07-02T07:00:00+08:00").unwrap(),
            "Friday 02 July 2021"
        );
    }

    #[test]
    fn test_format_date_keeps_offset_day() {
        // 23:30 at -05:00 is already the next day in UTC
        assert_eq!(
            format_date("2020-02-29T23:30:00-05:00").unwrap(),
            "Saturday 29 February 2020"
        );
    }

    #[test]
    fn test_format_date_rejects_malformed() {
        for input in ["2023-06-05", "05/06/2023 18:00", "2023-06-05T18:00:00", ""] {
            match format_date(input) {
                Err(ForecastError::Date { input: bad, .. }) => assert_eq!(bad, input),
                other => panic!("expected a date error for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(20), "20°C");
        assert_eq!(format_temperature(20.5), "20.5°C");
        assert_eq!(format_temperature(20.0_f64), "20°C");
        assert_eq!(format_temperature(-3.2), "-3.2°C");
    }
}

use chrono::{NaiveDate, NaiveDateTime};

/// Date-time layouts accepted for DATE_OCC / DATE_RPTD values.
/// The raw export carries timestamps like "01/08/2020 12:00:00 AM".
const DATETIME_FORMATS: [&str; 2] = ["%m/%d/%Y %I:%M:%S %p", "%Y-%m-%d %H:%M:%S"];

/// Date-only layouts accepted after an earlier cleaning pass.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Parse a raw date cell into a calendar date.
///
/// Tries each accepted layout in order and returns `None` when none of them
/// matches. Callers treat `None` as a null cell, never as a failure.
///
/// # Arguments
/// * `raw` - Raw cell content, surrounding whitespace ignored
///
/// # Returns
/// * `Option<NaiveDate>` - The calendar date, or `None` if unparseable
///
/// # Example
/// ```
/// use cii_rust::time::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let date = parse_calendar_date("01/08/2020 12:00:00 AM");
/// assert_eq!(date, NaiveDate::from_ymd_opt(2020, 1, 8));
/// assert_eq!(parse_calendar_date("not a date"), None);
/// ```
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }
    None
}

/// Left-pad a clock value with zeros to the canonical 4-character form.
///
/// Values already 4 characters or longer are returned unchanged.
///
/// # Example
/// ```
/// use cii_rust::time::pad_clock;
///
/// assert_eq!(pad_clock("930"), "0930");
/// assert_eq!(pad_clock("5"), "0005");
/// assert_eq!(pad_clock("2359"), "2359");
/// ```
pub fn pad_clock(raw: &str) -> String {
    format!("{:0>4}", raw.trim())
}

/// Extract the hour of day from a padded clock value.
///
/// Reads the first two characters and parses them as an integer. Returns
/// `None` when the prefix is not numeric or falls outside 0-23.
///
/// # Example
/// ```
/// use cii_rust::time::hour_from_clock;
///
/// assert_eq!(hour_from_clock("0930"), Some(9));
/// assert_eq!(hour_from_clock("2359"), Some(23));
/// assert_eq!(hour_from_clock("9900"), None);
/// assert_eq!(hour_from_clock("ab30"), None);
/// ```
pub fn hour_from_clock(clock: &str) -> Option<u32> {
    let prefix = clock.get(0..2)?;
    let hour: u32 = prefix.parse().ok()?;
    if hour <= 23 {
        Some(hour)
    } else {
        None
    }
}

/// First day of the given month, used to synthesize a representative date
/// for monthly aggregates.
///
/// # Example
/// ```
/// use cii_rust::time::month_start;
/// use chrono::NaiveDate;
///
/// assert_eq!(month_start(2021, 2), NaiveDate::from_ymd_opt(2021, 2, 1));
/// assert_eq!(month_start(2021, 13), None);
/// ```
pub fn month_start(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_raw_export_timestamps() {
        let date = parse_calendar_date("03/14/2021 06:30:00 PM");
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 3, 14));
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_calendar_date("2021-03-14"),
            NaiveDate::from_ymd_opt(2021, 3, 14)
        );
        assert_eq!(
            parse_calendar_date("  2021-03-14 00:00:00  "),
            NaiveDate::from_ymd_opt(2021, 3, 14)
        );
    }

    #[test]
    fn rejects_garbage_dates() {
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("   "), None);
        assert_eq!(parse_calendar_date("14/32/2021"), None);
        assert_eq!(parse_calendar_date("yesterday"), None);
    }

    #[test]
    fn pads_short_clock_values() {
        assert_eq!(pad_clock("930"), "0930");
        assert_eq!(pad_clock("0"), "0000");
        assert_eq!(pad_clock(" 45 "), "0045");
        assert_eq!(pad_clock("12345"), "12345");
    }

    #[test]
    fn hour_extraction_respects_range() {
        assert_eq!(hour_from_clock("0000"), Some(0));
        assert_eq!(hour_from_clock("2359"), Some(23));
        assert_eq!(hour_from_clock("2400"), None);
        assert_eq!(hour_from_clock("9999"), None);
    }

    #[test]
    fn hour_extraction_rejects_non_numeric() {
        assert_eq!(hour_from_clock("xx30"), None);
        assert_eq!(hour_from_clock(""), None);
        assert_eq!(hour_from_clock("7"), None);
    }

    #[test]
    fn month_start_handles_invalid_months() {
        assert_eq!(month_start(2021, 1), NaiveDate::from_ymd_opt(2021, 1, 1));
        assert_eq!(month_start(2021, 0), None);
        assert_eq!(month_start(2021, 13), None);
    }
}

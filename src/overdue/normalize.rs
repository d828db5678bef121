//! Calendar-day normalization for due dates and clock readings

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse a raw due date into a calendar date.
///
/// Accepts plain `YYYY-MM-DD` dates, RFC 3339 timestamps and naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps. Time of day is dropped as written;
/// no timezone conversion happens. Anything else yields `None`.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.date_naive());
    }

    NaiveDateTime::parse_from_str(raw, NAIVE_DATETIME_FORMAT)
        .ok()
        .map(|dt| dt.date())
}

/// Truncate an instant to its calendar day.
pub fn day_of(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// Whole days from `earlier` to `later`; zero or negative when not later.
pub fn whole_days_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_due_date("2026-01-28"), Some(date(2026, 1, 28)));
        assert_eq!(parse_due_date("  2026-01-28\n"), Some(date(2026, 1, 28)));
    }

    #[test]
    fn test_parse_rfc3339_keeps_written_day() {
        assert_eq!(
            parse_due_date("2026-01-28T23:30:00-08:00"),
            Some(date(2026, 1, 28))
        );
        assert_eq!(
            parse_due_date("2026-01-28T00:15:00Z"),
            Some(date(2026, 1, 28))
        );
    }

    #[test]
    fn test_parse_naive_datetime() {
        assert_eq!(
            parse_due_date("2026-01-28T17:45:00"),
            Some(date(2026, 1, 28))
        );
        assert_eq!(
            parse_due_date("2026-01-28T17:45:00.250"),
            Some(date(2026, 1, 28))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_due_date(""), None);
        assert_eq!(parse_due_date("   "), None);
        assert_eq!(parse_due_date("tomorrow"), None);
        assert_eq!(parse_due_date("2026-02-30"), None);
        assert_eq!(parse_due_date("2026-13-01"), None);
        assert_eq!(parse_due_date("28/01/2026"), None);
    }

    #[test]
    fn test_day_of_drops_time() {
        let late = Utc.with_ymd_and_hms(2026, 1, 29, 23, 59, 59).unwrap();
        let early = Utc.with_ymd_and_hms(2026, 1, 29, 0, 0, 0).unwrap();
        assert_eq!(day_of(late), date(2026, 1, 29));
        assert_eq!(day_of(late), day_of(early));
    }

    #[test]
    fn test_whole_days_between() {
        assert_eq!(whole_days_between(date(2026, 1, 29), date(2026, 1, 28)), 1);
        assert_eq!(whole_days_between(date(2026, 1, 29), date(2025, 12, 1)), 59);
        assert_eq!(whole_days_between(date(2026, 1, 29), date(2026, 1, 29)), 0);
        assert_eq!(whole_days_between(date(2026, 1, 28), date(2026, 1, 29)), -1);
    }
}

//! Catalog-query date ranges and lenient sample-date parsing.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};

use crate::error::Result;

/// Default lookback window before the sample date, in days.
pub const DEFAULT_TIME_BUFFER_DAYS: i64 = 15;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a catalog search range covering `time_buffer_days` days up to and
/// including the sample date, as `"YYYY-MM-DD/YYYY-MM-DD"`.
pub fn date_range(date: NaiveDate, time_buffer_days: i64) -> String {
    let range_start = date - Duration::days(time_buffer_days);
    format!("{}/{}", range_start.format(DATE_FORMAT), date.format(DATE_FORMAT))
}

/// Parse a sample date from the formats catalogs and sample tables use:
/// plain dates, RFC 3339 datetimes, or space-separated datetimes.
///
/// Datetimes are truncated to day granularity.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.date_naive());
    }
    // Last resort; on failure this is the error the caller sees.
    let dt = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")?;
    Ok(dt.date())
}

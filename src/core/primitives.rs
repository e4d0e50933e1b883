use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Inverse of [`datetime_to_unix_seconds`] at millisecond precision.
#[must_use]
pub fn unix_seconds_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).round();
    if millis > i64::MAX as f64 || millis < i64::MIN as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

const DATETIME_PATTERNS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parses a textual timestamp into UNIX seconds (UTC).
///
/// Accepted: RFC 3339, naive `date time` forms, bare dates (midnight UTC,
/// unpadded month/day allowed) and plain numbers interpreted as seconds.
pub fn parse_time_text(text: &str) -> ChartResult<f64> {
    let trimmed = text.trim();
    if let Ok(seconds) = trimmed.parse::<f64>() {
        if seconds.is_finite() {
            return Ok(seconds);
        }
    }
    if let Ok(time) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime_to_unix_seconds(time.with_timezone(&Utc)));
    }
    for pattern in DATETIME_PATTERNS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(datetime_to_unix_seconds(naive.and_utc()));
        }
    }
    if let Some(midnight) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(datetime_to_unix_seconds(midnight.and_utc()));
    }
    Err(ChartError::InvalidTime(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::{parse_time_text, unix_seconds_to_datetime};

    #[test]
    fn parses_supported_text_forms() {
        assert_eq!(parse_time_text("2020-01-01").expect("date"), 1_577_836_800.0);
        assert_eq!(parse_time_text("2020-1-1").expect("unpadded"), 1_577_836_800.0);
        assert_eq!(
            parse_time_text("2020-01-01T00:01:00Z").expect("rfc3339"),
            1_577_836_860.0
        );
        assert_eq!(
            parse_time_text("2020-01-01 00:00:30").expect("naive"),
            1_577_836_830.0
        );
        assert_eq!(parse_time_text("1577836800").expect("numeric"), 1_577_836_800.0);
    }

    #[test]
    fn rejects_unknown_text() {
        assert!(parse_time_text("yesterday").is_err());
        assert!(parse_time_text("NaN").is_err());
    }

    #[test]
    fn unix_seconds_round_trip_through_datetime() {
        let time = unix_seconds_to_datetime(1_577_836_800.5).expect("valid time");
        assert_eq!(time.timestamp_millis(), 1_577_836_800_500);
        assert!(unix_seconds_to_datetime(f64::NAN).is_none());
    }
}

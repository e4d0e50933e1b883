use crate::core::unix_seconds_to_datetime;

/// Formats a price with a fixed number of decimals.
pub(super) fn format_price_label(value: f64, precision: u8) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    let precision = usize::from(precision);
    let text = format!("{value:.precision$}");
    // `-0.00` reads as noise next to a zero tick.
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_owned()
    } else {
        text
    }
}

/// Formats UNIX seconds in UTC with a strftime pattern.
///
/// Out-of-range instants fall back to whole seconds.
pub(super) fn format_time_label(seconds: f64, pattern: &str) -> String {
    if !seconds.is_finite() {
        return "nan".to_owned();
    }
    match unix_seconds_to_datetime(seconds) {
        Some(instant) => instant.format(pattern).to_string(),
        None => format!("{seconds:.0}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_price_label, format_time_label};

    #[test]
    fn price_labels_use_fixed_precision() {
        assert_eq!(format_price_label(10.5, 2), "10.50");
        assert_eq!(format_price_label(3.4, 0), "3");
        assert_eq!(format_price_label(-0.001, 2), "0.00");
        assert_eq!(format_price_label(-1.26, 1), "-1.3");
        assert_eq!(format_price_label(f64::NAN, 2), "nan");
    }

    #[test]
    fn time_labels_format_in_utc() {
        assert_eq!(format_time_label(1_577_836_800.0, "%Y-%m-%d"), "2020-01-01");
        assert_eq!(
            format_time_label(1_577_840_400.0, "%Y-%m-%d %H:%M"),
            "2020-01-01 01:00"
        );
    }

    #[test]
    fn unrepresentable_time_falls_back_to_seconds() {
        assert_eq!(format_time_label(1.0e300, "%Y"), format!("{:.0}", 1.0e300));
    }
}

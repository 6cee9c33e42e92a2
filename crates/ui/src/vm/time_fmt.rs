use chrono::{DateTime, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// One decimal place, e.g. `66.7%`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use annie_core::time::fixed_now;

    #[test]
    fn formats_fixed_timestamp() {
        assert_eq!(format_datetime(fixed_now()), "2023-11-14 22:13 UTC");
    }

    #[test]
    fn percentage_has_one_decimal() {
        assert_eq!(format_percentage(100.0), "100.0%");
        assert_eq!(format_percentage(200.0 / 3.0), "66.7%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }
}

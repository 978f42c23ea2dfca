//! Display formatting for backend-provided date strings.

use chrono::{DateTime, NaiveDate};

/// Format a server timestamp for display, e.g. `"Aug 7, 2026"`.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (the format the
/// date inputs produce); anything else is shown as-is rather than dropped.
pub fn format_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%b %-d, %Y").to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_rfc3339_timestamps() {
        assert_eq!(format_date("2026-08-07T12:30:00Z"), "Aug 7, 2026");
    }

    #[test]
    fn test_formats_plain_dates() {
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
    }

    #[test]
    fn test_unparseable_input_passes_through() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }
}

//! Date normalization and duration formatting for meeting metadata.

use chrono::NaiveDate;

/// Formats tried, in order, when the input is not already `YYYY-MM-DD`.
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

/// Normalize a date string to `YYYY-MM-DD`.
///
/// Accepts ISO dates (with or without a time part), `2026/02/05`,
/// `02/05/2026`, `02-05-2026`, `February 05, 2026`, and `Feb 05, 2026`.
/// Text with nothing before its first `T` (`T10:00`, `Today`) has no date.
pub fn parse_date(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    if is_iso_date(text) {
        return Some(text.to_string());
    }
    if let Some((date, _time)) = text.split_once('T') {
        return (!date.is_empty()).then(|| date.to_string());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .map(|date| date.format("%Y-%m-%d").to_string())
}

/// `dddd-dd-dd`, without checking the ranges.
fn is_iso_date(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Human-readable duration: `30 minutes`, `1 hour`, `2 hours`, `1h 30m`.
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{} minutes", minutes);
    }
    let hours = minutes / 60;
    let remaining = minutes % 60;
    if remaining == 0 {
        let unit = if hours > 1 { "hours" } else { "hour" };
        return format!("{} {}", hours, unit);
    }
    format!("{}h {}m", hours, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso() {
        assert_eq!(parse_date("2026-02-05").as_deref(), Some("2026-02-05"));
        assert_eq!(parse_date("2026-02-05T14:30:00Z").as_deref(), Some("2026-02-05"));
    }

    #[test]
    fn test_parse_slashes_and_dashes() {
        assert_eq!(parse_date("2026/02/05").as_deref(), Some("2026-02-05"));
        assert_eq!(parse_date("02/05/2026").as_deref(), Some("2026-02-05"));
        assert_eq!(parse_date("02-05-2026").as_deref(), Some("2026-02-05"));
    }

    #[test]
    fn test_parse_month_names() {
        assert_eq!(parse_date("February 05, 2026").as_deref(), Some("2026-02-05"));
        assert_eq!(parse_date("Feb 05, 2026").as_deref(), Some("2026-02-05"));
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("13/45/2026"), None);
    }

    #[test]
    fn test_parse_empty_date_part() {
        assert_eq!(parse_date("T10:00"), None);
        assert_eq!(parse_date("Today"), None);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0 minutes");
        assert_eq!(format_duration(30), "30 minutes");
        assert_eq!(format_duration(60), "1 hour");
        assert_eq!(format_duration(90), "1h 30m");
        assert_eq!(format_duration(120), "2 hours");
        assert_eq!(format_duration(180), "3 hours");
    }
}

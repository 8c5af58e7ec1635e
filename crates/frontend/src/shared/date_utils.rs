/// Date and time formatting for booking tables.
///
/// The backend sends dates as `YYYY-MM-DD` (sometimes with a time part)
/// and times as `HH:MM[:SS]`. Anything that does not parse is shown as is.
use chrono::{NaiveDate, NaiveTime};

/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15 Mar 2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.trim().split('T').next().unwrap_or_default();
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Example: "14:05" or "14:05:30" -> "02:05 PM"
pub fn format_time(time_str: &str) -> String {
    let trimmed = time_str.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map(|t| t.format("%I:%M %p").to_string())
        .unwrap_or_else(|_| time_str.to_string())
}

/// Date and optional time in one cell; empty parts are skipped
pub fn format_schedule(date: Option<&str>, time: Option<&str>) -> String {
    let parts: Vec<String> = [date.map(format_date), time.map(format_time)]
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect();
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15 Mar 2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15 Mar 2024");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("14:05"), "02:05 PM");
        assert_eq!(format_time("09:30:00"), "09:30 AM");
    }

    #[test]
    fn test_schedule() {
        assert_eq!(format_schedule(Some("2024-12-31"), Some("23:59")), "31 Dec 2024 11:59 PM");
        assert_eq!(format_schedule(Some(""), None), "-");
        assert_eq!(format_schedule(None, None), "-");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("tomorrow"), "tomorrow");
        assert_eq!(format_time("noon"), "noon");
    }
}

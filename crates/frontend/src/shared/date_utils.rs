/// Utilities for date and time formatting
///
/// The backend sends ISO-8601 strings, with or without seconds, fraction
/// or offset. Everything is shown as DD/MM/YYYY [HH:MM].
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt::Display;

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Format ISO datetime string to DD/MM/YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123" -> "15/03/2024 14:02"
///
/// Timestamps with an offset are shown in the browser's local time, those
/// without one as they are. A date without time is shown as a date;
/// anything unparseable is returned unchanged.
pub fn format_datetime(datetime_str: &str) -> String {
    format_datetime_in(datetime_str, &Local)
}

fn format_datetime_in<Tz>(datetime_str: &str, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let raw = datetime_str.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(zone).format("%d/%m/%Y %H:%M").to_string();
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return dt.format("%d/%m/%Y %H:%M").to_string();
        }
    }
    format_date(datetime_str)
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.trim().split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Like [`format_datetime`], "-" when there is nothing to show
pub fn format_optional_datetime(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => format_datetime(v),
        _ => "-".to_string(),
    }
}

pub fn format_optional_date(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => format_date(v),
        _ => "-".to_string(),
    }
}

/// Today in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-12-31T08:05"), "31/12/2024 08:05");
        assert_eq!(format_datetime_in("2024-12-31T23:59:59Z", &Utc), "31/12/2024 23:59");
    }

    #[test]
    fn test_offset_timestamps_shift_to_local_zone() {
        let brasilia = FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(
            format_datetime_in("2024-01-01T01:30:00Z", &brasilia),
            "31/12/2023 22:30"
        );
        assert_eq!(
            format_datetime_in("2024-03-15T14:02:26-03:00", &brasilia),
            "15/03/2024 14:02"
        );
        assert_eq!(
            format_datetime_in("2024-03-15T14:02:26", &brasilia),
            "15/03/2024 14:02"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_datetime("2024-03-15"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_missing_values_show_dash() {
        assert_eq!(format_optional_datetime(None), "-");
        assert_eq!(format_optional_datetime(Some("  ")), "-");
        assert_eq!(format_optional_date(Some("2024-01-02")), "02/01/2024");
    }
}

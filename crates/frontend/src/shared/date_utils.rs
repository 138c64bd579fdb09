/// Utilities for date and time formatting
///
/// Operations carry ISO 8601 timestamps; filter inputs use `datetime-local` values.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Format ISO datetime string to DD.MM.YYYY HH:MM
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02"
pub fn format_datetime_short(datetime_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.naive_local().format("%d.%m.%Y %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d.%m.%Y %H:%M").to_string();
    }
    datetime_str.to_string()
}

/// Parse a value coming from `<input type="datetime-local">` or `<input type="date">`
pub fn parse_date_input(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, INPUT_FORMAT))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Value for `<input type="datetime-local">`
pub fn to_date_input_value(value: Option<NaiveDateTime>) -> String {
    value
        .map(|dt| dt.format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

//! Display formatting for backend date strings.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::Date;
use time::macros::format_description;

/// `YYYY-MM-DD` → `DD.MM.YYYY`.
///
/// Values that are not a valid calendar date fall back to reversing the
/// dash-separated parts; missing or blank values render as `""`.
#[must_use]
pub fn format_birthday(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .and_then(|date| date.format(format_description!("[day].[month].[year]")).ok())
        .unwrap_or_else(|| reverse_parts(raw))
}

/// Date portion of an ISO datetime (`2023-03-29T10:11:12`) as `DD.MM.YYYY`.
#[must_use]
pub fn format_timestamp(raw: Option<&str>) -> String {
    let date = raw.and_then(|s| s.trim().split(['T', ' ']).next());
    format_birthday(date)
}

fn reverse_parts(raw: &str) -> String {
    raw.split('-').rev().collect::<Vec<_>>().join(".")
}

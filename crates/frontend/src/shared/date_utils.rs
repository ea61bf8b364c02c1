/// Utilities for date formatting
///
/// Backend dates stay ISO 8601 strings until they reach a card; these
/// helpers render them for display and fall back to the raw string when a
/// date does not parse.
use chrono::NaiveDate;

/// Format an ISO date or datetime string for display
/// Example: "2026-03-15" or "2026-03-15T14:02:26Z" -> "Mar 15, 2026"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Format an optional date, with an em-dash placeholder for absent values
pub fn format_date_opt(date_str: Option<&str>) -> String {
    match date_str {
        Some(s) => format_date(s),
        None => "—".to_string(),
    }
}

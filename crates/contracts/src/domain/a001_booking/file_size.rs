//! Aggregation of the backend's human-readable file sizes
//!
//! The backend reports each deliverable's size as a display string like
//! "512 KB" or "3.2 MB". The cards show one aggregate figure per order, so
//! the strings are parsed back to kilobytes, summed, and re-rendered.

use once_cell::sync::Lazy;
use regex::Regex;

static SIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(\.\d+)?)\s*(KB|MB)").expect("size pattern"));

/// Parse a single size string into kilobytes.
///
/// Only the first match in the string counts. A string that does not match
/// the `<number> KB|MB` shape contributes 0 — logged, so a backend format
/// change (say, GB) shows up in the console instead of silently vanishing.
pub fn parse_size_kb(size: &str) -> f64 {
    let Some(caps) = SIZE_RE.captures(size) else {
        log::warn!("unparseable file size '{}', counting as 0", size);
        return 0.0;
    };
    let value: f64 = caps[1].parse().unwrap_or(0.0);
    match &caps[3] {
        "MB" => value * 1024.0,
        _ => value,
    }
}

/// Render a kilobyte total the way the backend renders single files:
/// megabytes once the total reaches 1024 KB, two decimals either way.
pub fn format_size_kb(total_kb: f64) -> String {
    if total_kb >= 1024.0 {
        format!("{:.2} MB", total_kb / 1024.0)
    } else {
        format!("{:.2} KB", total_kb)
    }
}

/// Aggregate a list of per-file size strings into one display string.
pub fn aggregate_sizes<'a, I>(sizes: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let total_kb: f64 = sizes.into_iter().map(parse_size_kb).sum();
    format_size_kb(total_kb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kb_and_mb() {
        assert_eq!(parse_size_kb("500 KB"), 500.0);
        assert_eq!(parse_size_kb("1.5 MB"), 1536.0);
        assert_eq!(parse_size_kb("3.2MB"), 3.2 * 1024.0);
    }

    #[test]
    fn test_first_match_wins() {
        // Trailing noise after the first match is ignored
        assert_eq!(parse_size_kb("2 MB (was 4 MB)"), 2048.0);
    }

    #[test]
    fn test_unparseable_counts_as_zero() {
        assert_eq!(parse_size_kb(""), 0.0);
        assert_eq!(parse_size_kb("large"), 0.0);
        assert_eq!(parse_size_kb("3.2 GB"), 0.0);
    }

    #[test]
    fn test_aggregate_rounding() {
        // 500 KB + 1.5 MB = 2036 KB; 2036/1024 = 1.988... -> "1.99 MB"
        assert_eq!(aggregate_sizes(["500 KB", "1.5 MB"]), "1.99 MB");
    }

    #[test]
    fn test_aggregate_stays_in_kb_below_threshold() {
        assert_eq!(aggregate_sizes(["500 KB", "100 KB"]), "600.00 KB");
        assert_eq!(aggregate_sizes(Vec::<&str>::new()), "0.00 KB");
    }

    #[test]
    fn test_aggregate_boundary() {
        assert_eq!(aggregate_sizes(["1024 KB"]), "1.00 MB");
        assert_eq!(aggregate_sizes(["1023 KB"]), "1023.00 KB");
    }
}

//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a front-matter date string in the formats authors actually use
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 / ISO 8601 with offset, compared in UTC
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc())
}

/// Format a date the way the site displays it (`January 5, 2024`)
pub fn format_date(s: &str) -> String {
    match parse_date(s) {
        Some(dt) => dt.format("%B %-d, %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// Today's date as `YYYY-MM-DD`, used for new posts
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

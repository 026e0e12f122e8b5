// ABOUTME: RFC 822 date formatting for RSS pubDate and lastBuildDate.
// ABOUTME: Always renders in GMT with English day and month names.

use chrono::{DateTime, Datelike, Utc};

/// chrono's `%a` and `%b` are English abbreviations regardless of host locale.
const DAY_MONTH: &str = "%a, %d %b";
const CLOCK_GMT: &str = "%H:%M:%S GMT";

/// Formats a UTC timestamp the way RSS readers expect, e.g.
/// `Sat, 07 Sep 2002 00:00:01 GMT`.
///
/// The year is written as a plain number padded to four digits; `%Y` would
/// prefix years past 9999 with `+`.
pub fn format_rfc822(dt: &DateTime<Utc>) -> String {
    format!(
        "{} {:04} {}",
        dt.format(DAY_MONTH),
        dt.year(),
        dt.format(CLOCK_GMT)
    )
}

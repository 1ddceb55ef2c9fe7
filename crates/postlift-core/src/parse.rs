//! Low-level text helpers used when turning a [`crate::RawPost`] into a
//! [`crate::PostRecord`]: display-count parsing, hashtag extraction and
//! lenient timestamp parsing.
//!
//! Every helper degrades to a default (`0`, empty, `None`) instead of failing,
//! since the acquisition side routinely hands over partial data.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\w+").expect("valid regex"));

static EMBEDDED_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4}-\d{2}-\d{2})").expect("valid regex"));

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Offset forms RFC 3339 rejects: minutes-only precision or a space separator.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
];

/// Parses a display count such as `"1.2K"`, `"3M"` or `"12,345"`.
///
/// Suffixes are case-insensitive. Fractional values are truncated after the
/// multiplier is applied. Anything unparseable (including negatives) is `0`.
#[must_use]
pub fn parse_count(text: &str) -> u64 {
    let normalized = text.trim().to_uppercase().replace(',', "");
    if normalized.is_empty() {
        return 0;
    }

    let scaled = |mantissa: &str, multiplier: f64| -> u64 {
        match mantissa.trim().parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let count = (v * multiplier) as u64;
                count
            }
            _ => 0,
        }
    };

    if let Some(mantissa) = normalized.strip_suffix('K') {
        scaled(mantissa, 1_000.0)
    } else if let Some(mantissa) = normalized.strip_suffix('M') {
        scaled(mantissa, 1_000_000.0)
    } else {
        normalized.parse::<u64>().unwrap_or(0)
    }
}

/// Extracts every `#word` token from a caption, in order, case preserved.
///
/// Repeated tags are kept; the grouping analyzers de-duplicate per post.
#[must_use]
pub fn extract_hashtags(caption: &str) -> Vec<String> {
    HASHTAG_RE
        .find_iter(caption)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Parses a timestamp string into a naive wall-clock time.
///
/// Accepted, in order:
/// 1. RFC 3339 (`2024-03-04T09:15:00Z`, `2024-03-04T09:15:00+02:00`); the
///    wall-clock time at the given offset is kept and the offset dropped.
/// 2. Offset datetimes RFC 3339 rejects (`2024-03-04T09:15+02:00`), handled
///    the same way.
/// 3. Naive ISO-8601 datetimes without an offset, with or without seconds.
/// 4. A bare `YYYY-MM-DD` date, or the first such date embedded anywhere in
///    the text, at midnight.
///
/// Returns `None` when nothing parses.
#[must_use]
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.naive_local());
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt);
        }
    }

    let date_text = EMBEDDED_DATE_RE.captures(trimmed)?.get(1)?.as_str();
    NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Converts unix seconds into a naive UTC wall-clock time.
#[must_use]
pub(crate) fn timestamp_from_unix(secs: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(secs, 0).map(|dt| dt.naive_utc())
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;

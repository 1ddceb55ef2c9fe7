//! Posting-window performance by hour of day and weekday.
//!
//! Timestamps are used exactly as captured. Posts from different timezones
//! therefore share "9am" buckets; no normalization is attempted.

use chrono::{Datelike, Timelike};
use postlift_core::{PostRecord, WINDOW_MIN_SAMPLES};

use crate::buckets::OrderedBuckets;
use crate::summary::mean;
use crate::types::{TemporalReport, WindowResult};

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Short weekday name for a Monday-based index, `"?"` if out of range.
#[must_use]
pub fn weekday_label(index: u32) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| WEEKDAY_LABELS.get(i))
        .copied()
        .unwrap_or("?")
}

fn rank(buckets: OrderedBuckets<u32>, top_n: usize) -> Vec<WindowResult> {
    let mut ranked: Vec<WindowResult> = buckets
        .qualifying(WINDOW_MIN_SAMPLES)
        .map(|(key, rates)| WindowResult {
            key,
            average_rate: mean(&rates),
            sample_size: rates.len(),
        })
        .collect();
    ranked.sort_by(|a, b| b.average_rate.total_cmp(&a.average_rate));
    ranked.truncate(top_n);
    ranked
}

/// Ranks hours and weekdays by average engagement.
///
/// Only posts with both a timestamp and a rate contribute. Each dimension
/// keeps windows with at least two posts, sorts them best first (stable on
/// first appearance) and returns at most `top_n` of them.
#[must_use]
pub fn posting_window_performance(posts: &[PostRecord], top_n: usize) -> TemporalReport {
    let mut hours = OrderedBuckets::new();
    let mut weekdays = OrderedBuckets::new();

    for post in posts {
        let (Some(ts), Some(rate)) = (post.timestamp, post.engagement_rate) else {
            continue;
        };
        hours.push(ts.hour(), rate);
        weekdays.push(ts.weekday().num_days_from_monday(), rate);
    }

    tracing::debug!(
        hour_windows = hours.len(),
        weekday_windows = weekdays.len(),
        "bucketed posting windows"
    );

    TemporalReport {
        hours: rank(hours, top_n),
        weekdays: rank(weekdays, top_n),
    }
}

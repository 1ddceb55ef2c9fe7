//! Grouped lift: how much a hashtag or content category moves engagement
//! relative to the profile's overall average.

use postlift_core::{PostRecord, CATEGORY_MIN_OCCURRENCES};

use crate::buckets::OrderedBuckets;
use crate::summary::mean;
use crate::types::{GroupResult, LiftReport};

/// Mean engagement over every post with a present rate.
fn overall_average(posts: &[PostRecord]) -> f64 {
    let rates: Vec<f64> = posts.iter().filter_map(|p| p.engagement_rate).collect();
    mean(&rates)
}

/// Groups rated posts by the keys `keys_of` returns (already distinct per
/// post), keeps groups with at least `min_occurrences` posts and ranks them by
/// lift. The sort is stable, so equal lifts keep first-encounter order.
fn group_lift<F>(posts: &[PostRecord], min_occurrences: usize, keys_of: F) -> LiftReport
where
    F: Fn(&PostRecord) -> Vec<String>,
{
    let overall = overall_average(posts);
    let mut buckets = OrderedBuckets::new();

    for post in posts {
        let Some(rate) = post.engagement_rate else {
            continue;
        };
        for key in keys_of(post) {
            buckets.push(key, rate);
        }
    }

    let total_groups = buckets.len();
    let mut groups: Vec<GroupResult> = buckets
        .qualifying(min_occurrences)
        .map(|(key, rates)| {
            let average_rate = mean(&rates);
            GroupResult {
                key,
                sample_size: rates.len(),
                average_rate,
                lift: average_rate - overall,
            }
        })
        .collect();
    groups.sort_by(|a, b| b.lift.total_cmp(&a.lift));

    tracing::debug!(
        total_groups,
        reportable = groups.len(),
        min_occurrences,
        overall,
        "computed group lift"
    );

    LiftReport {
        overall_average: overall,
        groups,
    }
}

/// Distinct lowercase hashtags of a post, in caption order.
fn distinct_hashtags(post: &PostRecord) -> Vec<String> {
    let mut seen = Vec::with_capacity(post.hashtags.len());
    for tag in &post.hashtags {
        let key = tag.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
        }
    }
    seen
}

/// Lift of each hashtag used on at least `min_occurrences` rated posts.
///
/// Tags are compared case-insensitively and reported in lowercase. A tag
/// repeated within one caption counts once for that post.
#[must_use]
pub fn hashtag_lift(posts: &[PostRecord], min_occurrences: usize) -> LiftReport {
    group_lift(posts, min_occurrences, distinct_hashtags)
}

/// Lift of each content theme carried by at least two rated posts.
#[must_use]
pub fn category_lift(posts: &[PostRecord]) -> LiftReport {
    group_lift(posts, CATEGORY_MIN_OCCURRENCES, |post| vec![post.theme.clone()])
}

#[cfg(test)]
#[path = "lift_test.rs"]
mod tests;

//! Per-profile analysis orchestration.

use std::collections::BTreeSet;

use postlift_core::classify::DEFAULT_THEME;
use postlift_core::{AnalysisConfig, Classifier, PostRecord, ProfileSnapshot};

use crate::cadence::posts_per_week;
use crate::correlation::caption_length_vs_rate;
use crate::lift::{category_lift, hashtag_lift};
use crate::summary::{mean, summarize};
use crate::temporal::posting_window_performance;
use crate::types::ProfileAnalysis;

/// Mean of one raw count across all posts; a missing count is already `0`.
fn count_mean<F>(posts: &[PostRecord], count: F) -> f64
where
    F: Fn(&PostRecord) -> u64,
{
    #[allow(clippy::cast_precision_loss)]
    let values: Vec<f64> = posts.iter().map(|p| count(p) as f64).collect();
    mean(&values)
}

/// Most frequent theme; the earliest-seen theme wins a tie.
fn dominant_theme(posts: &[PostRecord]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for post in posts {
        if let Some(slot) = counts.iter().position(|(theme, _)| *theme == post.theme) {
            counts[slot].1 += 1;
        } else {
            counts.push((post.theme.as_str(), 1));
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (theme, n) in counts {
        if best.map_or(true, |(_, best_n)| n > best_n) {
            best = Some((theme, n));
        }
    }
    best.map_or_else(|| DEFAULT_THEME.to_string(), |(theme, _)| theme.to_string())
}

/// Run every analyzer over one profile's snapshot.
///
/// The analyzers are independent: each reads `snapshot.posts` and builds its
/// own result. Nothing here fails; degenerate inputs (no posts, no rated
/// posts, a single timestamp) produce the documented defaults.
#[must_use]
pub fn analyze_profile(
    snapshot: &ProfileSnapshot,
    config: &AnalysisConfig,
    country_classifier: &dyn Classifier,
) -> ProfileAnalysis {
    let posts = snapshot.posts.as_slice();

    let rated_posts = posts.iter().filter(|p| p.engagement_rate.is_some()).count();
    for post in posts.iter().filter(|p| p.engagement_rate.is_none()) {
        tracing::debug!(
            profile = %snapshot.username,
            url = %post.url,
            "post has no views; excluded from rate aggregates"
        );
    }

    let timestamps: Vec<_> = posts.iter().filter_map(|p| p.timestamp).collect();
    let hashtags_used: Vec<String> = posts
        .iter()
        .flat_map(|p| p.hashtags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let analysis = ProfileAnalysis {
        username: snapshot.username.clone(),
        display_name: snapshot.display_name.clone(),
        followers: snapshot.followers,
        following: snapshot.following,
        posts_analyzed: posts.len(),
        rated_posts,
        engagement: summarize(posts.iter().map(|p| p.engagement_rate)),
        avg_likes: count_mean(posts, |p| p.counts.likes),
        avg_comments: count_mean(posts, |p| p.counts.comments),
        avg_shares: count_mean(posts, |p| p.counts.shares),
        avg_saves: count_mean(posts, |p| p.counts.saves),
        posts_per_week: posts_per_week(&timestamps),
        dominant_theme: dominant_theme(posts),
        country: country_classifier.classify(&snapshot.bio),
        hashtags_used,
        hashtag_lift: hashtag_lift(posts, config.min_hashtag_occurrences()),
        category_lift: category_lift(posts),
        posting_windows: posting_window_performance(posts, config.top_windows()),
        caption_correlation: caption_length_vs_rate(posts),
    };

    tracing::info!(
        profile = %analysis.username,
        posts = analysis.posts_analyzed,
        rated = analysis.rated_posts,
        mean_rate = analysis.engagement.mean,
        "analyzed profile"
    );

    analysis
}

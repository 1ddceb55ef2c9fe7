use serde::Serialize;

use crate::summary::Summary;

/// Average engagement of one hashtag or category and its lift over baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupResult {
    pub key: String,
    /// Distinct posts with a rate that carry this key.
    pub sample_size: usize,
    pub average_rate: f64,
    /// `average_rate - overall_average`. Positive means above baseline.
    pub lift: f64,
}

/// Output of a grouped lift analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LiftReport {
    /// Mean rate over every post with a rate; `0.0` if none.
    pub overall_average: f64,
    /// Reportable groups, highest lift first.
    pub groups: Vec<GroupResult>,
}

impl LiftReport {
    /// The first `n` groups, for display.
    #[must_use]
    pub fn top(&self, n: usize) -> &[GroupResult] {
        &self.groups[..n.min(self.groups.len())]
    }
}

/// Average engagement of one posting window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowResult {
    /// Hour of day `0..=23`, or weekday `0..=6` with Monday as `0`.
    pub key: u32,
    pub average_rate: f64,
    pub sample_size: usize,
}

/// Hour-of-day and weekday rankings, best average first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemporalReport {
    pub hours: Vec<WindowResult>,
    pub weekdays: Vec<WindowResult>,
}

/// One caption-length range and the posts that fell into it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthBucket {
    pub label: String,
    /// Inclusive lower bound.
    pub min: usize,
    /// Inclusive upper bound; `None` for the open-ended last range.
    pub max: Option<usize>,
    /// `0.0` when the bucket is empty.
    pub average_rate: f64,
    pub sample_size: usize,
}

/// Caption length vs. engagement: Pearson coefficient plus a bucketed view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationResult {
    /// In `[-1, 1]`; `None` with fewer than two pairs or zero variance.
    pub coefficient: Option<f64>,
    /// Always six buckets, in ascending length order.
    pub buckets: Vec<LengthBucket>,
}

/// Everything computed for one profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileAnalysis {
    pub username: String,
    pub display_name: String,
    pub followers: u64,
    pub following: u64,
    pub posts_analyzed: usize,
    /// Posts with a present engagement rate.
    pub rated_posts: usize,
    pub engagement: Summary,
    pub avg_likes: f64,
    pub avg_comments: f64,
    pub avg_shares: f64,
    pub avg_saves: f64,
    pub posts_per_week: Option<f64>,
    pub dominant_theme: String,
    pub country: String,
    /// Sorted, de-duplicated hashtags across all posts.
    pub hashtags_used: Vec<String>,
    pub hashtag_lift: LiftReport,
    pub category_lift: LiftReport,
    pub posting_windows: TemporalReport,
    pub caption_correlation: CorrelationResult,
}

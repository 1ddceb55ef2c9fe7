use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::classify::Classifier;
use crate::parse::{extract_hashtags, parse_count, parse_timestamp, timestamp_from_unix};

/// A count as handed over by the acquisition side: either a number from
/// embedded JSON or display text scraped from the page (`"1.2K"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCount {
    Number(u64),
    Text(String),
}

impl RawCount {
    #[must_use]
    pub fn value(&self) -> u64 {
        match self {
            RawCount::Number(n) => *n,
            RawCount::Text(t) => parse_count(t),
        }
    }
}

fn count_or_zero(count: Option<&RawCount>) -> u64 {
    count.map_or(0, RawCount::value)
}

/// One post exactly as the acquisition collaborator produced it. Every field
/// other than `url` may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPost {
    pub url: String,
    pub views: Option<RawCount>,
    pub likes: Option<RawCount>,
    pub comments: Option<RawCount>,
    pub shares: Option<RawCount>,
    pub saves: Option<RawCount>,
    pub caption: Option<String>,
    /// Unix seconds. Preferred over `published` when both are present.
    pub create_time: Option<i64>,
    /// Free-form date text, e.g. a `<time datetime=...>` attribute.
    pub published: Option<String>,
}

/// Raw interaction counts of one post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionCounts {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub saves: u64,
}

impl InteractionCounts {
    /// Sum of likes, comments, shares and saves.
    #[must_use]
    pub fn interactions(&self) -> u64 {
        self.likes
            .saturating_add(self.comments)
            .saturating_add(self.shares)
            .saturating_add(self.saves)
    }
}

/// View-adjusted engagement rate: interactions divided by views.
///
/// Returns `None` when `views` is zero; an unknown view count must already
/// have been mapped to zero by the caller. The result is not clamped and may
/// exceed `1.0`.
#[must_use]
pub fn engagement_rate(counts: &InteractionCounts) -> Option<f64> {
    if counts.views == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let rate = counts.interactions() as f64 / counts.views as f64;
    Some(rate)
}

/// One analyzed post. Built once from a [`RawPost`] and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub url: String,
    pub counts: InteractionCounts,
    pub caption: String,
    /// Caption length in Unicode scalar values.
    pub caption_length: usize,
    /// `#`-prefixed tokens from the caption, in order, case preserved.
    pub hashtags: Vec<String>,
    /// Naive wall-clock time as captured; no timezone normalization.
    pub timestamp: Option<NaiveDateTime>,
    pub theme: String,
    /// `None` exactly when `counts.views == 0`.
    pub engagement_rate: Option<f64>,
}

impl PostRecord {
    /// Builds a record from raw acquisition output.
    ///
    /// Missing counts become `0`, a missing caption becomes empty, and the
    /// theme is assigned by `classifier` over the hashtags and caption.
    #[must_use]
    pub fn from_raw(raw: RawPost, classifier: &dyn Classifier) -> Self {
        let counts = InteractionCounts {
            views: count_or_zero(raw.views.as_ref()),
            likes: count_or_zero(raw.likes.as_ref()),
            comments: count_or_zero(raw.comments.as_ref()),
            shares: count_or_zero(raw.shares.as_ref()),
            saves: count_or_zero(raw.saves.as_ref()),
        };
        let caption = raw.caption.unwrap_or_default();
        let hashtags = extract_hashtags(&caption);
        let timestamp = raw
            .create_time
            .and_then(timestamp_from_unix)
            .or_else(|| raw.published.as_deref().and_then(parse_timestamp));
        let theme = classifier.classify(&format!("{} {caption}", hashtags.join(" ")));

        Self {
            url: raw.url,
            engagement_rate: engagement_rate(&counts),
            caption_length: caption.chars().count(),
            counts,
            caption,
            hashtags,
            timestamp,
            theme,
        }
    }
}

//! Post builders shared by the unit tests.

use chrono::NaiveDateTime;
use postlift_core::{engagement_rate, InteractionCounts, PostRecord};

pub(crate) struct PostBuilder {
    record: PostRecord,
}

/// A post with `views` views and `likes` likes (no other interactions).
pub(crate) fn post(views: u64, likes: u64) -> PostBuilder {
    let counts = InteractionCounts {
        views,
        likes,
        ..InteractionCounts::default()
    };
    PostBuilder {
        record: PostRecord {
            url: format!("https://example.com/video/{views}-{likes}"),
            counts,
            caption: String::new(),
            caption_length: 0,
            hashtags: Vec::new(),
            timestamp: None,
            theme: "general english".to_string(),
            engagement_rate: engagement_rate(&counts),
        },
    }
}

impl PostBuilder {
    pub(crate) fn counts(mut self, counts: InteractionCounts) -> Self {
        self.record.counts = counts;
        self.record.engagement_rate = engagement_rate(&counts);
        self
    }

    pub(crate) fn tags(mut self, tags: &[&str]) -> Self {
        self.record.hashtags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    pub(crate) fn theme(mut self, theme: &str) -> Self {
        self.record.theme = theme.to_string();
        self
    }

    pub(crate) fn caption_len(mut self, len: usize) -> Self {
        self.record.caption = "x".repeat(len);
        self.record.caption_length = len;
        self
    }

    /// Sets the timestamp from `YYYY-MM-DD HH:MM`.
    pub(crate) fn at(mut self, when: &str) -> Self {
        self.record.timestamp =
            Some(NaiveDateTime::parse_from_str(when, "%Y-%m-%d %H:%M").expect("valid fixture time"));
        self
    }

    pub(crate) fn build(self) -> PostRecord {
        self.record
    }
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

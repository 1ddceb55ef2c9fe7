//! Engagement analytics over one profile's post snapshot.
//!
//! Every analyzer reads the same immutable `&[PostRecord]` and returns its own
//! freshly built result; none of them share state, so they can run in any
//! order or in parallel. Posts without an engagement rate are excluded from
//! every rate-based aggregate rather than counted as zero.

pub mod cadence;
pub mod correlation;
pub mod lift;
pub mod pipeline;
pub mod summary;
pub mod temporal;
pub mod types;

mod buckets;

pub use cadence::posts_per_week;
pub use correlation::{caption_length_vs_rate, pearson_correlation, LENGTH_BUCKETS};
pub use lift::{category_lift, hashtag_lift};
pub use pipeline::analyze_profile;
pub use postlift_core::engagement_rate;
pub use summary::{mean, summarize, Summary};
pub use temporal::{posting_window_performance, weekday_label};
pub use types::{
    CorrelationResult, GroupResult, LengthBucket, LiftReport, ProfileAnalysis, TemporalReport,
    WindowResult,
};

#[cfg(test)]
mod fixtures;

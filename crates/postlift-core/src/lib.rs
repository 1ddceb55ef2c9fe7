//! Shared data model and configuration for postlift.
//!
//! Post records arrive here from the acquisition collaborator as [`RawPost`]
//! values and are turned into immutable [`PostRecord`]s that the analytics
//! crate reads as a snapshot.

pub mod app_config;
pub mod classify;
pub mod config;
pub mod error;
pub mod parse;
pub mod posts;
pub mod snapshot;

pub use app_config::{
    AnalysisConfig, AnalysisOverrides, AppConfig, CATEGORY_MIN_OCCURRENCES, WINDOW_MIN_SAMPLES,
};
pub use classify::{Classifier, CountryClassifier, ThemeClassifier};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError};
pub use parse::{extract_hashtags, parse_count, parse_timestamp};
pub use posts::{engagement_rate, InteractionCounts, PostRecord, RawCount, RawPost};
pub use snapshot::{load_snapshot, ProfileSnapshot, RawProfileSnapshot};

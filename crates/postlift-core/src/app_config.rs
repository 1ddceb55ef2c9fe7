use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Minimum posts a content category needs before it is reported.
pub const CATEGORY_MIN_OCCURRENCES: usize = 2;

/// Minimum posts an hour or weekday window needs before it is ranked.
pub const WINDOW_MIN_SAMPLES: usize = 2;

/// Thresholds and display cutoffs passed explicitly into each analysis run.
///
/// Construct through [`AnalysisConfig::new`] so that an invalid threshold is
/// rejected before any analyzer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    min_hashtag_occurrences: usize,
    top_lift: usize,
    top_windows: usize,
}

impl AnalysisConfig {
    /// Validate and build an analysis configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if `min_hashtag_occurrences` is zero.
    pub fn new(
        min_hashtag_occurrences: usize,
        top_lift: usize,
        top_windows: usize,
    ) -> Result<Self, ConfigError> {
        if min_hashtag_occurrences < 1 {
            return Err(ConfigError::Validation(format!(
                "min_hashtag_occurrences must be at least 1, got {min_hashtag_occurrences}"
            )));
        }
        Ok(Self {
            min_hashtag_occurrences,
            top_lift,
            top_windows,
        })
    }

    /// Posts a hashtag must appear in before its lift is reported.
    #[must_use]
    pub fn min_hashtag_occurrences(&self) -> usize {
        self.min_hashtag_occurrences
    }

    /// How many hashtag/category lift rows a report shows.
    #[must_use]
    pub fn top_lift(&self) -> usize {
        self.top_lift
    }

    /// How many hour/weekday windows a report shows.
    #[must_use]
    pub fn top_windows(&self) -> usize {
        self.top_windows
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_hashtag_occurrences: 2,
            top_lift: 5,
            top_windows: 3,
        }
    }
}

/// Values supplied on the command line. A `Some` field replaces the matching
/// environment variable, which is then never read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisOverrides {
    pub min_hashtag_occurrences: Option<usize>,
    pub top_lift: Option<usize>,
    pub top_windows: Option<usize>,
}

/// Process-wide settings resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub analysis: AnalysisConfig,
}

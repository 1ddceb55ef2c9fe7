use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classify::Classifier;
use crate::posts::{PostRecord, RawPost};
use crate::CoreError;

/// A profile and its recent posts as written by the acquisition collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawProfileSnapshot {
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub followers: Option<u64>,
    #[serde(default)]
    pub following: Option<u64>,
    #[serde(default)]
    pub posts: Vec<RawPost>,
}

/// One profile's immutable post collection, ready for analysis.
#[derive(Debug, Clone)]
pub struct ProfileSnapshot {
    pub username: String,
    pub display_name: String,
    pub bio: String,
    pub followers: u64,
    pub following: u64,
    pub posts: Vec<PostRecord>,
}

impl ProfileSnapshot {
    /// Builds records for every raw post, classifying themes with `classifier`.
    ///
    /// A missing display name falls back to the username.
    #[must_use]
    pub fn from_raw(raw: RawProfileSnapshot, classifier: &dyn Classifier) -> Self {
        let posts = raw
            .posts
            .into_iter()
            .map(|p| PostRecord::from_raw(p, classifier))
            .collect();

        Self {
            display_name: raw
                .display_name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| raw.username.clone()),
            username: raw.username,
            bio: raw.bio.unwrap_or_default(),
            followers: raw.followers.unwrap_or(0),
            following: raw.following.unwrap_or(0),
            posts,
        }
    }
}

/// Load a profile snapshot from a JSON or YAML file (chosen by extension,
/// JSON otherwise) and build its post records.
///
/// # Errors
///
/// Returns `CoreError` if the file cannot be read or parsed.
pub fn load_snapshot(path: &Path, classifier: &dyn Classifier) -> Result<ProfileSnapshot, CoreError> {
    let content = std::fs::read_to_string(path).map_err(|e| CoreError::SnapshotIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let raw: RawProfileSnapshot = if is_yaml {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };

    tracing::debug!(
        profile = %raw.username,
        posts = raw.posts.len(),
        path = %path.display(),
        "loaded profile snapshot"
    );

    Ok(ProfileSnapshot::from_raw(raw, classifier))
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("configuration validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to read snapshot {path}: {source}")]
    SnapshotIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON snapshot: {0}")]
    SnapshotJson(#[from] serde_json::Error),

    #[error("failed to parse YAML snapshot: {0}")]
    SnapshotYaml(#[from] serde_yaml::Error),
}

use crate::app_config::{AnalysisConfig, AnalysisOverrides, AppConfig};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
/// Fields set in `overrides` take precedence and their env vars are ignored.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed or fails validation.
pub fn load_app_config(overrides: &AnalysisOverrides) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env(overrides)
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed or fails validation.
pub fn load_app_config_from_env(
    overrides: &AnalysisOverrides,
) -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key), overrides)
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(
    lookup: F,
    overrides: &AnalysisOverrides,
) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize =
        |var: &str, default: &str, flag: Option<usize>| -> Result<usize, ConfigError> {
            if let Some(value) = flag {
                return Ok(value);
            }
            let raw = or_default(var, default);
            raw.trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                })
        };

    let log_level = or_default("POSTLIFT_LOG_LEVEL", "info");
    let min_hashtag_occurrences = parse_usize(
        "POSTLIFT_MIN_HASHTAG_OCCURRENCES",
        "2",
        overrides.min_hashtag_occurrences,
    )?;
    let top_lift = parse_usize("POSTLIFT_TOP_LIFT", "5", overrides.top_lift)?;
    let top_windows = parse_usize("POSTLIFT_TOP_WINDOWS", "3", overrides.top_windows)?;

    let analysis = AnalysisConfig::new(min_hashtag_occurrences, top_lift, top_windows)?;

    Ok(AppConfig {
        log_level,
        analysis,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

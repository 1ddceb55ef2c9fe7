//! `analyze` command handler.
//!
//! Profiles are processed one at a time. A snapshot that cannot be read is
//! logged and skipped so one bad file does not abort the whole run.

use std::io::Write;
use std::path::PathBuf;

use postlift_analytics::analyze_profile;
use postlift_core::{load_snapshot, AnalysisConfig, CountryClassifier, ThemeClassifier};

use crate::report::{render_text, SummaryRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable console summary with a per-post snapshot
    Text,
    /// One compact summary row per profile, as a JSON line
    Json,
    /// The complete structured analysis, as pretty JSON
    Full,
}

pub(crate) struct AnalyzeArgs {
    pub snapshots: Vec<PathBuf>,
    pub format: OutputFormat,
    pub analysis: AnalysisConfig,
}

/// Analyze every snapshot in `args` and write reports to stdout.
///
/// # Errors
///
/// Returns an error if writing to stdout fails, or if no snapshot could be
/// loaded at all.
pub(crate) fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut analyzed = 0usize;
    let mut failed = 0usize;

    for path in &args.snapshots {
        let snapshot = match load_snapshot(path, &ThemeClassifier) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping snapshot");
                failed += 1;
                continue;
            }
        };

        if snapshot.posts.is_empty() {
            tracing::warn!(
                profile = %snapshot.username,
                "no recent posts in snapshot (profile private or grid blocked); skipping"
            );
            continue;
        }

        let analysis = analyze_profile(&snapshot, &args.analysis, &CountryClassifier);

        match args.format {
            OutputFormat::Text => {
                writeln!(out, "{}", render_text(&snapshot, &analysis, &args.analysis))?;
            }
            OutputFormat::Json => {
                let row = SummaryRow::from_analysis(&analysis, &args.analysis);
                writeln!(out, "{}", serde_json::to_string(&row)?)?;
            }
            OutputFormat::Full => {
                writeln!(out, "{}", serde_json::to_string_pretty(&analysis)?)?;
            }
        }
        analyzed += 1;
    }

    tracing::info!(analyzed, failed, "analyze run complete");

    if analyzed == 0 && failed > 0 {
        anyhow::bail!("all {failed} snapshot(s) failed to load");
    }
    Ok(())
}

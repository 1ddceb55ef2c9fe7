mod analyze;
mod report;

use clap::{Parser, Subcommand};
use postlift_core::AnalysisOverrides;
use tracing_subscriber::EnvFilter;

use crate::analyze::{AnalyzeArgs, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "postlift")]
#[command(about = "Engagement analytics for social media profile snapshots")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze one or more profile snapshot files (JSON or YAML)
    Analyze {
        /// Snapshot files, one profile each
        #[arg(required = true)]
        snapshots: Vec<std::path::PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Posts a hashtag must appear in before its lift is reported
        #[arg(long)]
        min_hashtag_occurrences: Option<usize>,

        /// Hashtag/category lift rows to show
        #[arg(long)]
        top_lift: Option<usize>,

        /// Hour/weekday windows to show
        #[arg(long)]
        top_windows: Option<usize>,
    },
}

impl Commands {
    /// Flag values that take precedence over the environment.
    fn analysis_overrides(&self) -> AnalysisOverrides {
        match self {
            Commands::Analyze {
                min_hashtag_occurrences,
                top_lift,
                top_windows,
                ..
            } => AnalysisOverrides {
                min_hashtag_occurrences: *min_hashtag_occurrences,
                top_lift: *top_lift,
                top_windows: *top_windows,
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let overrides = cli
        .command
        .as_ref()
        .map(Commands::analysis_overrides)
        .unwrap_or_default();

    let config = postlift_core::load_app_config(&overrides)?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Analyze {
            snapshots, format, ..
        }) => {
            analyze::run_analyze(&AnalyzeArgs {
                snapshots,
                format,
                analysis: config.analysis,
            })?;
        }
        None => println!("postlift: run `postlift analyze <SNAPSHOT>...`"),
    }

    Ok(())
}

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use carsize::Rule;
use carsize::pipeline::{DEFAULT_GROUPS, EvaluateJob, NormalizeJob, run_evaluate, run_normalize};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "carsize", version, about = "Normalize car datasets and score the size boundary")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Min-max normalizes each group file into the output directory.
    Normalize {
        #[arg(long, default_value = "Data")]
        data_dir: PathBuf,
        #[arg(long, default_value = "Data/normalized")]
        output_dir: PathBuf,
        /// Group files to process, relative to the data directory.
        #[arg(long, value_delimiter = ',', default_values_t = default_groups())]
        groups: Vec<String>,
    },
    /// Scores the decision boundary on each group and writes reports and matrix data.
    Evaluate {
        #[arg(long, default_value = "Data/normalized")]
        input_dir: PathBuf,
        #[arg(long, default_value = "plots/normalized/confusion")]
        plot_dir: PathBuf,
        #[arg(long, value_delimiter = ',', default_values_t = default_groups())]
        groups: Vec<String>,
        /// Coordinate space of the input files.
        #[arg(long, value_enum, default_value_t = Space::Normalized)]
        space: Space,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Space {
    Original,
    Normalized,
}

impl From<Space> for Rule {
    fn from(space: Space) -> Self {
        match space {
            Space::Original => Rule::Original,
            Space::Normalized => Rule::Normalized,
        }
    }
}

fn default_groups() -> Vec<String> {
    DEFAULT_GROUPS.iter().map(|g| g.to_string()).collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Normalize {
            data_dir,
            output_dir,
            groups,
        } => {
            let job = NormalizeJob {
                data_dir,
                output_dir,
                groups,
            };
            let summary = run_normalize(&job).with_context(|| {
                format!(
                    "failed to create output directory {}",
                    job.output_dir.display()
                )
            })?;
            info!(
                "🧮 {} normalized, {} skipped",
                summary.completed.len(),
                summary.skipped.len()
            );
        }
        Commands::Evaluate {
            input_dir,
            plot_dir,
            groups,
            space,
        } => {
            let job = EvaluateJob {
                input_dir,
                plot_dir,
                groups,
                rule: space.into(),
            };
            let summary = run_evaluate(&job, vec![Box::new(io::stdout())])
                .with_context(|| format!("evaluation in {} aborted", job.plot_dir.display()))?;
            info!(
                "📊 {} evaluated, {} skipped",
                summary.completed.len(),
                summary.skipped.len()
            );
        }
    }
    Ok(())
}

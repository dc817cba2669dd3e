//! Batch drivers that run normalization or evaluation over a list of group files.
//!
//! A failure on one group is logged and that group is skipped; the remaining groups
//! still run. Only failing to prepare the output location aborts a run.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::classify::Rule;
use crate::error::{Error, Result};
use crate::evaluate::{ConfusionMatrix, evaluate};
use crate::ingest::read_dataset;
use crate::normalize::{Bounds, normalize};
use crate::point::Dataset;
use crate::report::{Reporter, write_dataset, write_matrix_data};

pub const DEFAULT_GROUPS: [&str; 3] = ["groupA.txt", "groupB.txt", "groupC.txt"];
pub const RESULTS_FILE: &str = "analysis_results.txt";

fn default_groups() -> Vec<String> {
    DEFAULT_GROUPS.iter().map(|g| g.to_string()).collect()
}

/// Display name and plot-file suffix for the group at `index`.
///
/// Suffixes run `A`..`Z`, then `AA`, `AB`, ... so every position gets its own file.
pub fn group_label(index: usize) -> (String, String) {
    let mut letters = Vec::new();
    let mut rest = index;
    loop {
        letters.push((b'A' + (rest % 26) as u8) as char);
        if rest < 26 {
            break;
        }
        rest = rest / 26 - 1;
    }
    let suffix: String = letters.into_iter().rev().collect();
    (format!("Group {suffix}"), suffix)
}

/// Which groups were handled and which were skipped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub completed: Vec<String>,
    pub skipped: Vec<String>,
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| Error::Write {
        path: dir.to_path_buf(),
        source,
    })
}

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Settings for the normalization pass.
#[derive(Debug, Clone)]
pub struct NormalizeJob {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub groups: Vec<String>,
}

impl Default for NormalizeJob {
    fn default() -> Self {
        NormalizeJob {
            data_dir: PathBuf::from("Data"),
            output_dir: PathBuf::from("Data/normalized"),
            groups: default_groups(),
        }
    }
}

/// Reads `input`, min-max normalizes it and writes the result to `output`.
///
/// Returns the normalized dataset.
pub fn normalize_file(input: &Path, output: &Path) -> Result<Dataset> {
    let data = read_dataset(input)?;
    info!("  Read {} data points", data.len());

    if let Some(bounds) = Bounds::fit(&data) {
        debug!(?bounds, "fitted bounds for {}", input.display());
    }
    let normalized = normalize(&data);

    let write_error = |source| Error::Write {
        path: output.to_path_buf(),
        source,
    };
    let file = create_file(output)?;
    write_dataset(file, &normalized).map_err(write_error)?;
    Ok(normalized)
}

pub fn run_normalize(job: &NormalizeJob) -> Result<RunSummary> {
    create_dir(&job.output_dir)?;

    let mut summary = RunSummary::default();
    for group in &job.groups {
        let input = job.data_dir.join(group);
        let output = job.output_dir.join(group);
        info!("Processing {group}...");

        match normalize_file(&input, &output) {
            Ok(_) => {
                info!("  Normalized data written to {}", output.display());
                summary.completed.push(group.clone());
            }
            Err(err) => {
                warn!("Failed to normalize {group}: {err}");
                summary.skipped.push(group.clone());
            }
        }
    }
    info!("Data normalization complete!");
    Ok(summary)
}

/// Settings for the evaluation pass.
#[derive(Debug, Clone)]
pub struct EvaluateJob {
    pub input_dir: PathBuf,
    pub plot_dir: PathBuf,
    pub groups: Vec<String>,
    pub rule: Rule,
}

impl Default for EvaluateJob {
    fn default() -> Self {
        EvaluateJob {
            input_dir: PathBuf::from("Data/normalized"),
            plot_dir: PathBuf::from("plots/normalized/confusion"),
            groups: default_groups(),
            rule: Rule::Normalized,
        }
    }
}

impl EvaluateJob {
    pub fn results_path(&self) -> PathBuf {
        self.plot_dir.join(RESULTS_FILE)
    }

    pub fn matrix_path(&self, suffix: &str) -> PathBuf {
        self.plot_dir.join(format!("group{suffix}.dat"))
    }
}

/// Scores `rule` against the dataset stored at `path`.
pub fn evaluate_file(path: &Path, rule: Rule) -> Result<(Dataset, ConfusionMatrix)> {
    let data = read_dataset(path)?;
    let cm = evaluate(&data, rule);
    Ok((data, cm))
}

fn write_matrix_file(path: &Path, cm: &ConfusionMatrix) -> Result<()> {
    let file = create_file(path)?;
    write_matrix_data(file, cm).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Evaluates every group and reports to `sinks` plus the results file in the plot
/// directory.
pub fn run_evaluate(job: &EvaluateJob, mut sinks: Vec<Box<dyn Write>>) -> Result<RunSummary> {
    create_dir(&job.plot_dir)?;
    let results_path = job.results_path();
    sinks.push(Box::new(create_file(&results_path)?));

    let mut reporter = Reporter::new(sinks);
    let report_error = |source| Error::Write {
        path: results_path.clone(),
        source,
    };

    let title = format!("Confusion Matrix Analysis - {} Data Only", job.rule.space());
    reporter.banner(&title).map_err(report_error)?;

    let mut summary = RunSummary::default();
    for (index, group) in job.groups.iter().enumerate() {
        let (name, suffix) = group_label(index);
        let path = job.input_dir.join(group);

        match evaluate_file(&path, job.rule) {
            Ok((data, cm)) => {
                info!(
                    "{name}: {} points, accuracy {:.4}",
                    data.len(),
                    cm.accuracy()
                );
                reporter
                    .results(&name, job.rule, &data, &cm)
                    .map_err(report_error)?;

                let matrix_path = job.matrix_path(&suffix);
                if let Err(err) = write_matrix_file(&matrix_path, &cm) {
                    warn!("Failed to write matrix data: {err}");
                }
                summary.completed.push(group.clone());
            }
            Err(err) => {
                warn!("Failed to read {}: {err}", path.display());
                let source: &dyn std::error::Error = match &err {
                    Error::Read { source, .. } => source,
                    other => other,
                };
                reporter
                    .read_failure(&path.display().to_string(), source)
                    .map_err(report_error)?;
                summary.skipped.push(group.clone());
            }
        }
    }

    reporter
        .legend(
            &job.plot_dir.display().to_string(),
            &results_path.display().to_string(),
        )
        .map_err(report_error)?;
    reporter.flush().map_err(report_error)?;
    Ok(summary)
}

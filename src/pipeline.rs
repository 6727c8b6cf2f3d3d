//! The load → aggregate → classify → report → write pipeline.
//!
//! Stages run strictly in order and the first failure aborts the run, so
//! nothing is written unless every earlier stage succeeded.

use crate::analysis::{calculate_statistics, find_abnormal_readings, thresholds};
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::PipelineError;
use crate::loader::load_dataset;
use crate::models::{AbnormalityCounts, AnalysisReport, Stage, StatisticsSummary};
use crate::report::{generate_json_report, generate_text_report, save_report};
use chrono::Utc;
use std::path::PathBuf;
use tracing::{debug, info};

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of readings analyzed.
    pub total_readings: usize,
    pub statistics: StatisticsSummary,
    pub abnormal: AbnormalityCounts,
    /// The rendered report, exactly as written.
    pub rendered: String,
    /// Where the report was written.
    pub output_path: PathBuf,
}

/// Run every stage against the configured input and output.
pub fn run(config: &Config) -> Result<RunSummary, PipelineError> {
    let input = &config.input.path;
    let output = &config.output.path;

    debug!(stage = %Stage::Load, "Starting stage");
    let dataset = load_dataset(input)?;
    let total_readings = dataset.len();
    info!(
        "Loaded {} readings for {} patients",
        total_readings,
        dataset.patient_count()
    );

    debug!(stage = %Stage::Aggregate, "Starting stage");
    let statistics = calculate_statistics(&dataset)?;

    debug!(stage = %Stage::Classify, "Starting stage");
    let abnormal = find_abnormal_readings(&dataset);

    debug!(stage = %Stage::Report, "Starting stage");
    let rendered = match config.output.format {
        OutputFormat::Text => generate_text_report(&statistics, &abnormal, total_readings),
        OutputFormat::Json => {
            let report = AnalysisReport {
                source: input.display().to_string(),
                generated_at: Utc::now(),
                total_readings,
                statistics,
                abnormal,
                thresholds: thresholds(),
            };
            generate_json_report(&report)?
        }
    };

    debug!(stage = %Stage::Write, "Starting stage");
    save_report(&rendered, output)?;

    Ok(RunSummary {
        total_readings,
        statistics,
        abnormal,
        rendered,
        output_path: output.clone(),
    })
}

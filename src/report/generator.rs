//! Analysis report generation.
//!
//! The text report has a fixed layout. Averages are printed with `{:.1}`,
//! which rounds the exact binary value to one fractional digit, with exact
//! ties going to the even digit.

use crate::analysis::{HIGH_GLUCOSE_MG_DL, HIGH_HEART_RATE_BPM, HIGH_SYSTOLIC_BP_MMHG};
use crate::error::PipelineError;
use crate::models::{AbnormalityCounts, AnalysisReport, StatisticsSummary};

/// Title line of the text report.
pub const REPORT_TITLE: &str = "Health Sensor Data Analysis Report";

const REPORT_RULE: &str = "-----------------------------------";

/// Generate the plain-text report.
pub fn generate_text_report(
    stats: &StatisticsSummary,
    abnormal: &AbnormalityCounts,
    total_readings: usize,
) -> String {
    let mut output = String::new();

    output.push_str(&generate_header());
    output.push_str(&generate_dataset_section(total_readings));
    output.push('\n');
    output.push_str(&generate_averages_section(stats));
    output.push('\n');
    output.push_str(&generate_abnormal_section(abnormal));

    output
}

fn generate_header() -> String {
    format!("{}\n{}\n", REPORT_TITLE, REPORT_RULE)
}

fn generate_dataset_section(total_readings: usize) -> String {
    let mut section = String::new();

    section.push_str("Dataset Summary:\n");
    section.push_str(&format!("Total Readings Analyzed: {}\n", total_readings));

    section
}

fn generate_averages_section(stats: &StatisticsSummary) -> String {
    let mut section = String::new();

    section.push_str("Average Measurements:\n");
    section.push_str(&format!(
        " - Average Heart Rate: {:.1} bpm\n",
        stats.avg_heart_rate
    ));
    section.push_str(&format!(
        " - Average Systolic Blood Pressure: {:.1} mmHg\n",
        stats.avg_systolic_bp
    ));
    section.push_str(&format!(
        " - Average Glucose Level: {:.1} mg/dL\n",
        stats.avg_glucose
    ));

    section
}

fn generate_abnormal_section(abnormal: &AbnormalityCounts) -> String {
    let mut section = String::new();

    section.push_str("Abnormal Readings:\n");
    section.push_str(&format!(
        " - High Heart Rate (>{} bpm): {}\n",
        HIGH_HEART_RATE_BPM, abnormal.high_heart_rate
    ));
    section.push_str(&format!(
        " - High Systolic Blood Pressure (>{} mmHg): {}\n",
        HIGH_SYSTOLIC_BP_MMHG, abnormal.high_blood_pressure
    ));
    section.push_str(&format!(
        " - High Glucose Level (>{} mg/dL): {}\n",
        HIGH_GLUCOSE_MG_DL, abnormal.high_glucose
    ));

    section
}

/// Generate a JSON report.
pub fn generate_json_report(report: &AnalysisReport) -> Result<String, PipelineError> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

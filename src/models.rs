//! Data models for the sensor report.
//!
//! This module contains the core data structures that flow through the
//! pipeline: raw readings, the loaded dataset, and the derived statistics,
//! abnormality counts and report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One row of sensor data for a patient at a point in time.
///
/// Field order matches the column order of the input file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[allow(dead_code)] // Columns the report does not summarize are still loaded
pub struct Reading {
    /// Patient identifier.
    pub patient_id: String,
    /// Timestamp as written in the source file (not parsed).
    pub timestamp: String,
    /// Heart rate in beats per minute.
    pub heart_rate: i32,
    /// Systolic blood pressure in mmHg.
    pub blood_pressure_systolic: i32,
    /// Diastolic blood pressure in mmHg.
    pub blood_pressure_diastolic: i32,
    /// Body temperature.
    pub temperature: f32,
    /// Glucose level in mg/dL.
    pub glucose_level: i32,
    /// Identifier of the sensor that produced the reading.
    pub sensor_id: String,
}

/// The full ordered collection of readings from one input file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    readings: Vec<Reading>,
}

impl Dataset {
    /// Wrap readings in file order.
    pub fn new(readings: Vec<Reading>) -> Self {
        Self { readings }
    }

    /// Number of readings.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// All readings, in file order.
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Number of distinct patient identifiers.
    pub fn patient_count(&self) -> usize {
        self.readings()
            .iter()
            .map(|r| r.patient_id.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn heart_rates(&self) -> impl Iterator<Item = i32> + '_ {
        self.readings.iter().map(|r| r.heart_rate)
    }

    pub fn systolic_pressures(&self) -> impl Iterator<Item = i32> + '_ {
        self.readings.iter().map(|r| r.blood_pressure_systolic)
    }

    pub fn glucose_levels(&self) -> impl Iterator<Item = i32> + '_ {
        self.readings.iter().map(|r| r.glucose_level)
    }
}

impl From<Vec<Reading>> for Dataset {
    fn from(readings: Vec<Reading>) -> Self {
        Self::new(readings)
    }
}

/// Means computed over a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatisticsSummary {
    pub avg_heart_rate: f64,
    pub avg_systolic_bp: f64,
    pub avg_glucose: f64,
}

/// Counts of readings exceeding the fixed clinical thresholds.
///
/// A reading may count toward several buckets, or none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AbnormalityCounts {
    pub high_heart_rate: usize,
    pub high_blood_pressure: usize,
    pub high_glucose: usize,
}

/// Threshold values echoed into the structured report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    pub heart_rate_bpm: i32,
    pub systolic_bp_mmhg: i32,
    pub glucose_mg_dl: i32,
}

/// Stage of the pipeline, used to tag failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Aggregate,
    Classify,
    Report,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Load => write!(f, "load"),
            Stage::Aggregate => write!(f, "aggregate"),
            Stage::Classify => write!(f, "classify"),
            Stage::Report => write!(f, "report"),
            Stage::Write => write!(f, "write"),
        }
    }
}

/// The structured analysis report, rendered as text or JSON.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Path of the analyzed input file.
    pub source: String,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Number of readings analyzed.
    pub total_readings: usize,
    /// Column means.
    pub statistics: StatisticsSummary,
    /// Threshold exceedance counts.
    pub abnormal: AbnormalityCounts,
    /// Thresholds the counts were computed against.
    pub thresholds: Thresholds,
}

//! Threshold-based abnormality counts.

use crate::models::{AbnormalityCounts, Dataset, Thresholds};
use tracing::debug;

/// Heart rate above this many bpm counts as high.
pub const HIGH_HEART_RATE_BPM: i32 = 90;

/// Systolic pressure above this many mmHg counts as high.
pub const HIGH_SYSTOLIC_BP_MMHG: i32 = 130;

/// Glucose above this many mg/dL counts as high.
pub const HIGH_GLUCOSE_MG_DL: i32 = 110;

/// The fixed thresholds, as reported alongside the counts.
pub fn thresholds() -> Thresholds {
    Thresholds {
        heart_rate_bpm: HIGH_HEART_RATE_BPM,
        systolic_bp_mmhg: HIGH_SYSTOLIC_BP_MMHG,
        glucose_mg_dl: HIGH_GLUCOSE_MG_DL,
    }
}

/// Count readings strictly above each threshold, independently.
pub fn find_abnormal_readings(dataset: &Dataset) -> AbnormalityCounts {
    let counts = AbnormalityCounts {
        high_heart_rate: dataset
            .heart_rates()
            .filter(|&hr| hr > HIGH_HEART_RATE_BPM)
            .count(),
        high_blood_pressure: dataset
            .systolic_pressures()
            .filter(|&sys| sys > HIGH_SYSTOLIC_BP_MMHG)
            .count(),
        high_glucose: dataset
            .glucose_levels()
            .filter(|&glu| glu > HIGH_GLUCOSE_MG_DL)
            .count(),
    };

    debug!("Abnormal counts: {:?}", counts);
    counts
}

//! Column averages.
//!
//! An empty dataset is rejected with [`PipelineError::EmptyDataset`] rather
//! than producing NaN, and the rule applies to all three means at once.

use crate::error::PipelineError;
use crate::models::{Dataset, StatisticsSummary};
use tracing::debug;

/// Compute the mean heart rate, systolic blood pressure and glucose level.
pub fn calculate_statistics(dataset: &Dataset) -> Result<StatisticsSummary, PipelineError> {
    if dataset.is_empty() {
        return Err(PipelineError::EmptyDataset);
    }

    let count = dataset.len();
    let summary = StatisticsSummary {
        avg_heart_rate: mean(dataset.heart_rates(), count),
        avg_systolic_bp: mean(dataset.systolic_pressures(), count),
        avg_glucose: mean(dataset.glucose_levels(), count),
    };

    debug!(
        "Averages: heart rate {:.3}, systolic {:.3}, glucose {:.3}",
        summary.avg_heart_rate, summary.avg_systolic_bp, summary.avg_glucose
    );

    Ok(summary)
}

// Summed as i64 so large files cannot overflow the column type.
fn mean(values: impl Iterator<Item = i32>, count: usize) -> f64 {
    let total: i64 = values.map(i64::from).sum();
    total as f64 / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Reading;
    use approx::assert_abs_diff_eq;

    fn reading(hr: i32, sys: i32, glu: i32) -> Reading {
        Reading {
            patient_id: "P001".to_string(),
            timestamp: "2024-01-01 08:00".to_string(),
            heart_rate: hr,
            blood_pressure_systolic: sys,
            blood_pressure_diastolic: 80,
            temperature: 36.6,
            glucose_level: glu,
            sensor_id: "S01".to_string(),
        }
    }

    #[test]
    fn test_two_reading_scenario() {
        let dataset = Dataset::from(vec![reading(95, 140, 115), reading(80, 120, 100)]);

        let stats = calculate_statistics(&dataset).unwrap();

        assert_abs_diff_eq!(stats.avg_heart_rate, 87.5, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.avg_systolic_bp, 130.0, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.avg_glucose, 107.5, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let err = calculate_statistics(&Dataset::default()).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyDataset));
    }

    #[test]
    fn test_means_lie_within_column_range() {
        let datasets = vec![
            vec![reading(60, 100, 70)],
            vec![reading(55, 90, 65), reading(120, 180, 250), reading(72, 118, 99)],
            vec![reading(101, 131, 111); 7],
            (0..50)
                .map(|i| reading(50 + i * 3, 95 + i * 2, 60 + (i * 7) % 90))
                .collect(),
        ];

        for readings in datasets {
            let dataset = Dataset::from(readings);
            let stats = calculate_statistics(&dataset).unwrap();

            let check = |avg: f64, column: Vec<i32>| {
                let min = *column.iter().min().unwrap() as f64;
                let max = *column.iter().max().unwrap() as f64;
                assert!(avg >= min && avg <= max, "{} not in [{}, {}]", avg, min, max);
            };

            check(stats.avg_heart_rate, dataset.heart_rates().collect());
            check(stats.avg_systolic_bp, dataset.systolic_pressures().collect());
            check(stats.avg_glucose, dataset.glucose_levels().collect());
        }
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        let dataset = Dataset::from(vec![reading(i32::MAX, i32::MAX, i32::MAX); 4]);
        let stats = calculate_statistics(&dataset).unwrap();
        assert_abs_diff_eq!(stats.avg_heart_rate, i32::MAX as f64, epsilon = 1e-3);
    }
}

//! Sensor CSV loader.
//!
//! Parses a comma-separated export with one header line followed by rows in
//! a fixed column order:
//!
//! `patient_id, timestamp, heart_rate, blood_pressure_systolic,
//! blood_pressure_diastolic, temperature, glucose_level, sensor_id`
//!
//! Loading is all-or-nothing: the first bad row aborts the whole load.

use crate::error::PipelineError;
use crate::models::{Dataset, Reading};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Number of columns every row must have.
pub const COLUMN_COUNT: usize = 8;

/// Load a dataset from a CSV file on disk.
pub fn load_dataset(path: &Path) -> Result<Dataset, PipelineError> {
    info!("Loading sensor data from {}", path.display());

    let file = File::open(path).map_err(|source| PipelineError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    load_from_reader(file, path)
}

/// Load a dataset from any reader. `origin` is only used in error messages.
pub fn load_from_reader<R: Read>(reader: R, origin: &Path) -> Result<Dataset, PipelineError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut readings = Vec::new();

    for result in csv_reader.records() {
        let record = result.map_err(|e| from_csv_error(origin, e))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        // Whitespace-only lines trim down to a single empty field.
        if record.iter().all(str::is_empty) {
            continue;
        }

        if record.len() != COLUMN_COUNT {
            return Err(PipelineError::DataFormat {
                path: origin.to_path_buf(),
                line,
                message: format!(
                    "expected {} columns, found {}",
                    COLUMN_COUNT,
                    record.len()
                ),
            });
        }

        let reading: Reading =
            record
                .deserialize(None)
                .map_err(|e| PipelineError::DataFormat {
                    path: origin.to_path_buf(),
                    line,
                    message: e.to_string(),
                })?;

        readings.push(reading);
    }

    debug!("Parsed {} readings from {}", readings.len(), origin.display());
    Ok(Dataset::new(readings))
}

/// Map a reader-level csv error to the pipeline taxonomy.
fn from_csv_error(origin: &Path, err: csv::Error) -> PipelineError {
    let message = err.to_string();
    let line = err.position().map(|p| p.line()).unwrap_or_default();

    match err.into_kind() {
        csv::ErrorKind::Io(source) => PipelineError::Unreadable {
            path: origin.to_path_buf(),
            source,
        },
        _ => PipelineError::DataFormat {
            path: origin.to_path_buf(),
            line,
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "patient_id,timestamp,heart_rate,blood_pressure_systolic,blood_pressure_diastolic,temperature,glucose_level,sensor_id\n";

    fn load_str(content: &str) -> Result<Dataset, PipelineError> {
        load_from_reader(content.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn test_load_valid_rows() {
        let content = format!(
            "{}P001,2024-01-01 08:00,95,140,90,37.2,115,S01\nP002,2024-01-01 08:05,80,120,78,36.6,100,S02\n",
            HEADER
        );

        let dataset = load_str(&content).unwrap();

        assert_eq!(dataset.len(), 2);
        let first = &dataset.readings()[0];
        assert_eq!(first.patient_id, "P001");
        assert_eq!(first.timestamp, "2024-01-01 08:00");
        assert_eq!(first.heart_rate, 95);
        assert_eq!(first.blood_pressure_systolic, 140);
        assert_eq!(first.blood_pressure_diastolic, 90);
        assert!((first.temperature - 37.2).abs() < 1e-5);
        assert_eq!(first.glucose_level, 115);
        assert_eq!(first.sensor_id, "S01");
        assert_eq!(dataset.readings()[1].patient_id, "P002");
    }

    #[test]
    fn test_header_only_yields_empty_dataset() {
        let dataset = load_str(HEADER).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_whitespace_around_fields_is_trimmed() {
        let content = format!("{} P001 , 2024-01-01 , 72 , 118 , 76 , 36.8 , 99 , S01 \n", HEADER);
        let dataset = load_str(&content).unwrap();
        assert_eq!(dataset.readings()[0].patient_id, "P001");
        assert_eq!(dataset.readings()[0].heart_rate, 72);
    }

    #[test]
    fn test_whitespace_only_lines_are_skipped() {
        let content = format!(
            "{}P001,2024-01-01 08:00,95,140,90,37.2,115,S01\n   \nP002,2024-01-01 08:05,80,120,78,36.6,100,S02\n\t \n",
            HEADER
        );

        let dataset = load_str(&content).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.readings()[1].patient_id, "P002");
    }

    #[test]
    fn test_seven_columns_is_data_format_error() {
        let content = format!(
            "{}P001,2024-01-01 08:00,95,140,90,37.2,115,S01\nP002,2024-01-01 08:05,80,120,78,36.6,100\n",
            HEADER
        );

        match load_str(&content) {
            Err(PipelineError::DataFormat { line, message, .. }) => {
                assert_eq!(line, 3);
                assert!(message.contains("expected 8 columns, found 7"));
            }
            other => panic!("expected DataFormat error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_field_is_data_format_error() {
        let content = format!("{}P001,2024-01-01 08:00,fast,140,90,37.2,115,S01\n", HEADER);
        let err = load_str(&content).unwrap_err();
        assert!(matches!(err, PipelineError::DataFormat { line: 2, .. }));
    }

    #[test]
    fn test_float_in_integer_column_is_rejected() {
        let content = format!("{}P001,2024-01-01 08:00,95.5,140,90,37.2,115,S01\n", HEADER);
        assert!(matches!(
            load_str(&content),
            Err(PipelineError::DataFormat { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}P001,2024-01-01 08:00,70,125,80,36.5,105,S01", HEADER).unwrap();

        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.readings()[0].blood_pressure_systolic, 125);
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dataset(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, PipelineError::Unreadable { .. }));
    }
}

//! Read request files and write result files (JSON).
//!
//! Both use the camelCase contract defined by `domain::EstimationRequest` and
//! `domain::EstimationResult`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::domain::{EstimationRequest, EstimationResult};
use crate::error::{AppError, EXIT_INPUT};

/// Read an estimation request from a JSON file.
pub fn read_request_json(path: &Path) -> Result<EstimationRequest, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(EXIT_INPUT, format!("Failed to open request JSON '{}': {e}", path.display()))
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        AppError::new(EXIT_INPUT, format!("Invalid request JSON '{}': {e}", path.display()))
    })
}

/// Write an estimation result as pretty-printed JSON.
pub fn write_result_json(path: &Path, result: &EstimationResult) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(EXIT_INPUT, format!("Failed to create result JSON '{}': {e}", path.display()))
    })?;
    serde_json::to_writer_pretty(file, result)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to write result JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn request_json_uses_camel_case_and_optional_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        std::fs::write(
            &path,
            r#"{
                "ambientTempC": 20.0,
                "bodyTempC": 32.0,
                "sceneDateTime": "2024-03-01T12:00:00",
                "secondReading": { "bodyTempC": 30.0, "deltaHoursFromFirst": 1.0 }
            }"#,
        )
        .unwrap();

        let request = read_request_json(&path).unwrap();
        assert_eq!(request.ambient_temp_c, 20.0);
        assert_eq!(request.normal_body_temp_c, None);
        assert_eq!(request.k, None);
        assert_eq!(request.second_reading.unwrap().delta_hours_from_first, 1.0);
    }

    #[test]
    fn missing_request_file_is_an_input_error() {
        let err = read_request_json(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_INPUT);
    }

    #[test]
    fn result_json_writes_iso_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        let result = EstimationResult {
            k: 0.1947,
            time_since_death_hours: 1.5,
            estimated_time_of_death: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            steps: vec!["step".to_string()],
            warnings: vec![],
        };
        write_result_json(&path, &result).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains(r#""estimatedTimeOfDeath": "2024-03-01T10:30:00""#));
        assert!(text.contains(r#""timeSinceDeathHours": 1.5"#));
    }
}

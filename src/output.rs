use std::path::Path;

use csv::Writer;
use serde_json::{json, Value};

use crate::errors::{LeafDoctorError, Result};
use crate::report::DiagnosisReport;

/// Render a diagnosis report as JSON on stdout.
pub fn print_report(report: &DiagnosisReport, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    println!("{}", rendered);
    Ok(())
}

/// Render a JSON value (error or warning object) on stdout.
pub fn print_json_object(value: &Value) {
    println!("{}", value);
}

/// Map a pipeline error to the structured object the caller sees.
///
/// Missing input and missing tissue keep their bare `error` shape; an
/// unsupported format becomes the warning/fallback object; everything else
/// is an unexpected failure tagged with `"status": "error"`.
pub fn error_object(err: &LeafDoctorError) -> Value {
    match err {
        LeafDoctorError::ImageNotFound(path) => json!({
            "error": "Image file not found",
            "path": path.display().to_string(),
        }),
        LeafDoctorError::NoPlantTissue => json!({
            "error": err.to_string(),
        }),
        LeafDoctorError::UnsupportedFormat(detail) => json!({
            "status": "warning",
            "message": format!("Deep scan requires decoder support for this image format: {}", detail),
            "fallback": true,
        }),
        other => json!({
            "error": other.to_string(),
            "status": "error",
        }),
    }
}

/// One row of the batch summary CSV.
#[derive(Debug, Clone)]
pub struct BatchRow {
    pub filename: String,
    pub status: String,
    pub diagnosis: String,
    pub confidence: String,
    pub green: String,
    pub yellow: String,
    pub brown: String,
    pub white: String,
}

impl BatchRow {
    /// Summarize one successful report.
    pub fn from_report(filename: String, report: &DiagnosisReport) -> Self {
        Self {
            filename,
            status: report.status.to_string(),
            diagnosis: report.diagnosis.to_string(),
            confidence: report.confidence.clone(),
            green: report.metrics.green.clone(),
            yellow: report.metrics.yellow.clone(),
            brown: report.metrics.brown.clone(),
            white: report.metrics.white.clone(),
        }
    }

    /// Record a per-file failure without aborting the batch.
    pub fn from_error(filename: String, err: &LeafDoctorError) -> Self {
        Self {
            filename,
            status: "error".to_string(),
            diagnosis: err.to_string(),
            confidence: "-".to_string(),
            green: "-".to_string(),
            yellow: "-".to_string(),
            brown: "-".to_string(),
            white: "-".to_string(),
        }
    }
}

/// Write the batch summary CSV
pub fn write_batch_csv<P: AsRef<Path>>(rows: &[BatchRow], output_path: P) -> Result<()> {
    let mut writer = Writer::from_path(output_path.as_ref()).map_err(LeafDoctorError::CsvOutput)?;

    writer
        .write_record([
            "Filename",
            "Status",
            "Diagnosis",
            "Confidence",
            "Green",
            "Yellow",
            "Brown",
            "White",
        ])
        .map_err(LeafDoctorError::CsvOutput)?;

    for row in rows {
        writer
            .write_record([
                row.filename.as_str(),
                row.status.as_str(),
                row.diagnosis.as_str(),
                row.confidence.as_str(),
                row.green.as_str(),
                row.yellow.as_str(),
                row.brown.as_str(),
                row.white.as_str(),
            ])
            .map_err(LeafDoctorError::CsvOutput)?;
    }

    writer
        .flush()
        .map_err(|e| LeafDoctorError::CsvOutput(csv::Error::from(e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_image_object_shape() {
        let err = LeafDoctorError::ImageNotFound(PathBuf::from("/x/leaf.png"));
        let value = error_object(&err);
        assert_eq!(value["error"], "Image file not found");
        assert_eq!(value["path"], "/x/leaf.png");
        assert!(value.get("status").is_none());
    }

    #[test]
    fn test_no_tissue_object_shape() {
        let value = error_object(&LeafDoctorError::NoPlantTissue);
        assert_eq!(value["error"], "No plant tissue detected in image");
        assert!(value.get("status").is_none());
    }

    #[test]
    fn test_unsupported_format_is_fallback_warning() {
        let err = LeafDoctorError::UnsupportedFormat("FLIF".to_string());
        let value = error_object(&err);
        assert_eq!(value["status"], "warning");
        assert_eq!(value["fallback"], true);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_unexpected_failure_tagged_with_status() {
        let err = LeafDoctorError::Other("boom".to_string());
        let value = error_object(&err);
        assert_eq!(value["error"], "Unexpected error: boom");
        assert_eq!(value["status"], "error");
    }
}

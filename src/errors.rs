use thiserror::Error;
use std::io;
use std::path::PathBuf;

/// Custom error types for LeafDoctor
#[derive(Error, Debug)]
pub enum LeafDoctorError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Image file not found: {0}")]
    ImageNotFound(PathBuf),

    #[error("Image format not supported by the decoder: {0}")]
    UnsupportedFormat(String),

    #[error("No plant tissue detected in image")]
    NoPlantTissue,

    #[error("CSV output error: {0}")]
    CsvOutput(#[from] csv::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input path: {0}")]
    InvalidPath(PathBuf),

    #[error("Unexpected error: {0}")]
    Other(String),
}

/// Type alias for Result with our custom error type
pub type Result<T> = std::result::Result<T, LeafDoctorError>;

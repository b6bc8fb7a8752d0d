use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{LeafDoctorError, Result};

/// Configuration for LeafDoctor.
///
/// Only plumbing knobs live here. Analysis thresholds (bucket bounds,
/// scoring weights, the region-selection margin) are constants next to the
/// code that uses them; making them configurable would silently change
/// diagnostic behavior between runs.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Downscale cap: longer image side is fitted within this many pixels
    #[serde(default = "default_resize_target")]
    pub resize_target: u32,

    /// Process batch directories in parallel
    #[serde(default = "default_parallel")]
    pub use_parallel: bool,

    /// Pretty-print the JSON report
    #[serde(default)]
    pub pretty_output: bool,

    /// Where the batch summary CSV is written
    #[serde(default = "default_batch_output_path")]
    pub batch_output_path: String,
}

fn default_resize_target() -> u32 {
    1200
}

fn default_parallel() -> bool {
    true
}

fn default_batch_output_path() -> String {
    "diagnosis_summary.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resize_target: default_resize_target(),
            use_parallel: default_parallel(),
            pretty_output: false,
            batch_output_path: default_batch_output_path(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LeafDoctorError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            LeafDoctorError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.resize_target == 0 {
            return Err(LeafDoctorError::Config(
                "resize_target must be > 0".to_string(),
            ));
        }

        if self.batch_output_path.is_empty() {
            return Err(LeafDoctorError::Config(
                "batch_output_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.resize_target, 1200);
        assert!(config.use_parallel);
        assert!(!config.pretty_output);
        assert_eq!(config.batch_output_path, "diagnosis_summary.csv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("pretty_output = true").unwrap();
        assert!(config.pretty_output);
        assert_eq!(config.resize_target, 1200);
    }

    #[test]
    fn test_zero_resize_target_rejected() {
        let config = Config {
            resize_target: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}

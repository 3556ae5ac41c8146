//! Preparation settings file support.
//!
//! This module provides utilities for reading pipeline settings from TOML
//! configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DatasetError, DatasetResult};
use crate::preprocessing::PrepareConfig;
use crate::transformations::TimePolicy;

/// Pipeline settings from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrepareSettings {
    #[serde(default)]
    pub pipeline: PipelineSettings,
}

/// Pipeline behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSettings {
    #[serde(default = "default_validate")]
    pub validate: bool,
    #[serde(default = "default_time_policy")]
    pub time_policy: String,
}

fn default_validate() -> bool {
    true
}

fn default_time_policy() -> String {
    "strict".to_string()
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            validate: default_validate(),
            time_policy: default_time_policy(),
        }
    }
}

impl PrepareSettings {
    /// Load settings from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the settings file
    ///
    /// # Returns
    /// * `Ok(PrepareSettings)` if successful
    /// * `Err(DatasetError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> DatasetResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            DatasetError::ConfigurationError(format!("Failed to read settings file: {}", e))
        })?;

        let settings: PrepareSettings = toml::from_str(&content).map_err(|e| {
            DatasetError::ConfigurationError(format!("Failed to parse settings file: {}", e))
        })?;

        Ok(settings)
    }

    /// Load settings from the default location.
    ///
    /// Searches for `cii_settings.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. `rust_backend/` directory
    ///
    /// Settings are optional; when no file exists the defaults apply.
    pub fn from_default_location() -> DatasetResult<Self> {
        let search_paths = vec![
            PathBuf::from("cii_settings.toml"),
            PathBuf::from("config/cii_settings.toml"),
            PathBuf::from("rust_backend/cii_settings.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Convert the file settings into a pipeline configuration.
    pub fn to_prepare_config(&self) -> DatasetResult<PrepareConfig> {
        let time_policy = match self.pipeline.time_policy.to_lowercase().as_str() {
            "strict" | "" => TimePolicy::Strict,
            "nullable" => TimePolicy::Nullable,
            other => {
                return Err(DatasetError::ConfigurationError(format!(
                    "Unknown time_policy: {}. Use 'strict' or 'nullable'",
                    other
                )))
            }
        };

        Ok(PrepareConfig {
            validate: self.pipeline.validate,
            time_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_settings() {
        let toml = r#"
[pipeline]
validate = false
time_policy = "nullable"
"#;

        let settings: PrepareSettings = toml::from_str(toml).unwrap();
        assert!(!settings.pipeline.validate);
        assert_eq!(settings.pipeline.time_policy, "nullable");

        let config = settings.to_prepare_config().unwrap();
        assert!(!config.validate);
        assert_eq!(config.time_policy, TimePolicy::Nullable);
    }

    #[test]
    fn test_defaults_apply_when_fields_missing() {
        let settings: PrepareSettings = toml::from_str("").unwrap();
        assert!(settings.pipeline.validate);
        assert_eq!(settings.pipeline.time_policy, "strict");

        let config = settings.to_prepare_config().unwrap();
        assert!(config.validate);
        assert_eq!(config.time_policy, TimePolicy::Strict);
    }

    #[test]
    fn test_unknown_time_policy_rejected() {
        let toml = r#"
[pipeline]
time_policy = "lenient"
"#;

        let settings: PrepareSettings = toml::from_str(toml).unwrap();
        let result = settings.to_prepare_config();

        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(
            message.contains("lenient") && message.contains("nullable"),
            "Error should name the bad value and the valid ones: {}",
            message
        );
    }

    #[test]
    fn test_from_file_missing_path() {
        let result = PrepareSettings::from_file("/nonexistent/cii_settings.toml");

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read settings file"));
    }
}

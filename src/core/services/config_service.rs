use crate::AppError;
use crate::error::ConfigError;
use crate::storage::config::{Config, OutputFormat};
use crate::utils::validation::{validate_max_differences, validate_output_format};
use std::path::PathBuf;

/// Configuration service for reading and updating settings
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    /// Create new ConfigService instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn max_differences(&self) -> usize {
        self.config.max_differences()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.config.output_format()
    }

    /// Set a configuration value - only accept user-facing key names
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        match key {
            "max-differences" => {
                self.config.max_differences = Some(validate_max_differences(value)?);
            }
            "output-format" => {
                self.config.output_format = Some(validate_output_format(value)?);
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into());
            }
        }
        log::info!("configuration '{}' set to '{}'", key, value);
        Ok(())
    }

    /// Save configuration to file
    pub fn save_config(&self, path: Option<PathBuf>) -> Result<(), AppError> {
        self.config.save(path).map_err(|e| e.into())
    }
}

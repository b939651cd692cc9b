//! Input validation utilities
//!
//! Validates values coming from the command line and the settings file.

use crate::error::{ConfigError, UtilsError};
use crate::storage::config::OutputFormat;
use clap::ValueEnum;

/// Parse a difference cap. Zero is allowed and stops at the first mismatch.
pub fn validate_max_differences(value: &str) -> crate::Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|e| {
            ConfigError::InvalidValue {
                field: "max-differences".to_string(),
                value: value.to_string(),
                reason: format!("Expected a non-negative integer ({})", e),
            }
            .into()
        })
}

pub fn validate_output_format(value: &str) -> crate::Result<OutputFormat> {
    OutputFormat::from_str(value.trim(), true).map_err(|_| {
        ConfigError::InvalidValue {
            field: "output-format".to_string(),
            value: value.to_string(),
            reason: "Expected one of 'table', 'plain' or 'json'".to_string(),
        }
        .into()
    })
}

/// Parse a byte value given either in decimal or as `0x`-prefixed hex.
pub fn validate_byte(value: &str) -> crate::Result<u8> {
    let value = value.trim();
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => value.parse::<u8>(),
    };
    parsed.map_err(|e| {
        UtilsError::Validation {
            message: format!("'{}' is not a byte between 0 and 255 ({})", value, e),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_max_differences() {
        assert_eq!(validate_max_differences("20").ok(), Some(20));
        assert_eq!(validate_max_differences(" 0 ").ok(), Some(0));
        assert!(validate_max_differences("-1").is_err());
        assert!(validate_max_differences("many").is_err());
    }

    #[test]
    fn test_validate_output_format() {
        assert_eq!(validate_output_format("table").ok(), Some(OutputFormat::Table));
        assert_eq!(validate_output_format("Plain").ok(), Some(OutputFormat::Plain));
        assert_eq!(validate_output_format("JSON").ok(), Some(OutputFormat::Json));
        assert!(validate_output_format("xml").is_err());
    }

    #[test]
    fn test_validate_byte() {
        assert_eq!(validate_byte("255").ok(), Some(255));
        assert_eq!(validate_byte("0xAB").ok(), Some(0xAB));
        assert_eq!(validate_byte("0x0f").ok(), Some(0x0F));
        assert!(validate_byte("256").is_err());
        assert!(validate_byte("0xZZ").is_err());
    }
}

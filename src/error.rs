use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("FileError: {0}")]
    File(#[from] FileError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
    #[error("UtilsError: {0}")]
    Utils(#[from] UtilsError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Files differ: {reason}")]
    FilesDiffer { reason: String },
}

#[derive(Error, Debug)]
pub enum FileError {
    #[error("Unable to open file '{path}': {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("Unable to read file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Unable to write file '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("Size of '{left}' is {left_size} bytes while size of '{right}' is {right_size} bytes")]
    SizeMismatch {
        left: String,
        left_size: u64,
        right: String,
        right_size: u64,
    },
    #[error("Offset {offset} is out of bounds for '{path}' ({size} bytes)")]
    OffsetOutOfBounds { path: String, offset: u64, size: u64 },
    #[error("Unable to run '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration save failed: {message}")]
    ConfigSaveFailed { message: String },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown configuration key '{key}'")]
    UnknownKey { key: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "critical",
            ErrorSeverity::High => "error",
            ErrorSeverity::Medium => "warning",
            ErrorSeverity::Low => "note",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(CliError::FilesDiffer { .. }) => ErrorSeverity::Low,
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::File(file_error) => match file_error {
                FileError::SizeMismatch { .. } => ErrorSeverity::Low,
                FileError::Spawn { .. } => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Display(_) => ErrorSeverity::Low,
            AppError::Utils(_) => ErrorSeverity::Low,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Config(ConfigError::UnknownKey { .. }) => Some(
                "Supported keys are 'max-differences' and 'output-format'".to_string(),
            ),
            AppError::Config(ConfigError::InvalidValue { reason, .. }) => Some(reason.clone()),
            AppError::Storage(StorageError::ConfigParseError { .. }) => {
                Some("Fix or remove the configuration file and try again".to_string())
            }
            AppError::File(FileError::Open { .. }) => {
                Some("Check that the path exists and is readable".to_string())
            }
            AppError::File(FileError::Spawn { .. }) => {
                Some("The test executable must exist and be runnable".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_display() {
        let cli_err = CliError::InvalidArguments("invalid arguments".to_string());
        assert_eq!(
            format!("{}", cli_err),
            "Invalid arguments: invalid arguments"
        );
    }

    #[test]
    fn test_file_error_display() {
        let file_err = FileError::SizeMismatch {
            left: "a.bin".to_string(),
            left_size: 10,
            right: "b.bin".to_string(),
            right_size: 12,
        };
        assert_eq!(
            format!("{}", file_err),
            "Size of 'a.bin' is 10 bytes while size of 'b.bin' is 12 bytes"
        );

        let file_err = FileError::Open {
            path: "missing.bin".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            format!("{}", file_err),
            "Unable to open file 'missing.bin': not found"
        );
    }

    #[test]
    fn test_config_error_display() {
        let config_err = ConfigError::InvalidValue {
            field: "max-differences".to_string(),
            value: "abc".to_string(),
            reason: "reason".to_string(),
        };
        assert!(matches!(config_err, ConfigError::InvalidValue { .. }));
        if let ConfigError::InvalidValue {
            field,
            value,
            reason,
        } = config_err
        {
            assert_eq!(field, "max-differences");
            assert_eq!(value, "abc");
            assert_eq!(reason, "reason");
        }
    }

    #[test]
    fn test_app_error_display_wraps_inner() {
        let app_err = AppError::Cli(CliError::InvalidArguments("bad".to_string()));
        assert_eq!(format!("{}", app_err), "CliError: Invalid arguments: bad");

        let app_err = AppError::Utils(UtilsError::Validation {
            message: "Invalid input".to_string(),
        });
        assert_eq!(
            format!("{}", app_err),
            "UtilsError: Validation error: Invalid input"
        );
    }

    #[test]
    fn test_app_error_severity() {
        let app_err = AppError::Config(ConfigError::UnknownKey {
            key: "foo".to_string(),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::High);
        assert!(app_err.troubleshooting_hint().is_some());

        let app_err = AppError::Cli(CliError::FilesDiffer {
            reason: "differ".to_string(),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::Low);
        assert_eq!(app_err.troubleshooting_hint(), None);

        let app_err = AppError::File(FileError::Spawn {
            program: "missing".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::High);
        assert_eq!(app_err.severity().label(), "error");
    }
}

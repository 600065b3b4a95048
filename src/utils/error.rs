use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImeiError {
    #[error("No CSV file found in directory {}", .directory.display())]
    NoCsvFile { directory: PathBuf },

    #[error("Expected one CSV file in directory {}, but found: {count}", .directory.display())]
    AmbiguousInput { directory: PathBuf, count: usize },

    #[error("Error detecting CSV file in directory {}: {source}", .directory.display())]
    DirectoryRead {
        directory: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move {} to {}: {source}", .from.display(), .to.display())]
    Relocate {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Compliance service returned HTTP {status} for IMEI {imei}")]
    ApiStatus { status: u16, imei: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unexpected compliance response body: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    FileSystem,
    Compliance,
    Configuration,
    Processing,
}

impl ImeiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ImeiError::NoCsvFile { .. } | ImeiError::AmbiguousInput { .. } => ErrorCategory::Input,
            ImeiError::DirectoryRead { .. } | ImeiError::Relocate { .. } | ImeiError::IoError(_) => {
                ErrorCategory::FileSystem
            }
            ImeiError::ApiError(_)
            | ImeiError::ApiStatus { .. }
            | ImeiError::SerializationError(_) => ErrorCategory::Compliance,
            ImeiError::ConfigError { .. }
            | ImeiError::MissingConfigError { .. }
            | ImeiError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ImeiError::CsvError(_) | ImeiError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    /// True when the run stopped before any file was touched.
    pub fn is_no_actionable_file(&self) -> bool {
        matches!(
            self,
            ImeiError::NoCsvFile { .. }
                | ImeiError::AmbiguousInput { .. }
                | ImeiError::DirectoryRead { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ImeiError::NoCsvFile { .. } => "Place exactly one .csv file in the input directory",
            ImeiError::AmbiguousInput { .. } => {
                "Remove extra .csv files so that exactly one remains in the input directory"
            }
            ImeiError::DirectoryRead { .. } => {
                "Check that the input directory exists and is readable"
            }
            ImeiError::Relocate { .. } => {
                "Check permissions and free space on the output directory"
            }
            ImeiError::IoError(_) => "Check file permissions and available disk space",
            ImeiError::ApiError(_) | ImeiError::ApiStatus { .. } => {
                "Check the compliance endpoint URL and network connectivity"
            }
            ImeiError::SerializationError(_) => {
                "The compliance service answered with an unexpected body; check the endpoint URL"
            }
            ImeiError::CsvError(_) => "Check that the input file is valid UTF-8 text",
            ImeiError::ConfigError { .. }
            | ImeiError::MissingConfigError { .. }
            | ImeiError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags"
            }
            ImeiError::ProcessingError { .. } => "Re-run with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, ImeiError>;

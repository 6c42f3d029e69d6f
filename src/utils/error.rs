use std::time::Duration;
use thiserror::Error;

/// Failure of a whole extraction run.
///
/// Cloneable so that one failed attempt can be handed to every caller that was
/// waiting on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Source document not found: {location}")]
    SourceUnavailable { location: String },

    #[error("Source document unreadable ({location}): {reason}")]
    SourceUnreadable { location: String, reason: String },

    #[error("Timed out after {timeout:?} reading source document: {location}")]
    SourceTimeout { location: String, timeout: Duration },
}

#[derive(Error, Debug)]
pub enum CurriculumError {
    #[error("Extraction failed: {0}")]
    ExtractionFailed(#[from] ExtractionError),

    #[error("Day {day} not found")]
    DayNotFound { day: u32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Source,
    NotFound,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CurriculumError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ExtractionFailed(_) => ErrorCategory::Source,
            Self::DayNotFound { .. } => ErrorCategory::NotFound,
            Self::IoError(_) | Self::CsvError(_) | Self::SerializationError(_) => {
                ErrorCategory::Output
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DayNotFound { .. } => ErrorSeverity::Low,
            Self::ExtractionFailed(_) => ErrorSeverity::Medium,
            Self::IoError(_) | Self::CsvError(_) | Self::SerializationError(_) => {
                ErrorSeverity::High
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    /// A later call may succeed without any change to configuration.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ExtractionFailed(_))
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ExtractionFailed(ExtractionError::SourceUnavailable { .. }) => {
                "Check that the curriculum document exists at one of the configured locations"
                    .to_string()
            }
            Self::ExtractionFailed(ExtractionError::SourceUnreadable { .. }) => {
                "Make sure the document is UTF-8 text and readable by this process".to_string()
            }
            Self::ExtractionFailed(ExtractionError::SourceTimeout { .. }) => {
                "Retry later or raise the source timeout".to_string()
            }
            Self::DayNotFound { .. } => {
                "List the available days first; day numbers may have gaps".to_string()
            }
            Self::IoError(_) => "Check file permissions and available disk space".to_string(),
            Self::CsvError(_) | Self::SerializationError(_) => {
                "Check the output destination and selected format".to_string()
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => {
                "Review the command line flags and configuration file".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ExtractionFailed(_) => {
                format!("Curriculum is temporarily unavailable: {}", self)
            }
            Self::DayNotFound { day } => format!("Day {} does not exist in this curriculum", day),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CurriculumError>;

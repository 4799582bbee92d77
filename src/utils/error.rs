use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Pipeline task failed: {message}")]
    TaskError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::IoError(_) => ErrorCategory::Io,
            ConvertError::SerializationError(_)
            | ConvertError::InvalidInput { .. }
            | ConvertError::ProcessingError { .. } => ErrorCategory::Data,
            ConvertError::ConfigError { .. } | ConvertError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            ConvertError::TaskError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConvertError::IoError(_) | ConvertError::TaskError { .. } => ErrorSeverity::Critical,
            ConvertError::SerializationError(_)
            | ConvertError::InvalidInput { .. }
            | ConvertError::ProcessingError { .. }
            | ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::IoError(_) => {
                "Check that the input file is readable and the output directory is writable"
            }
            ConvertError::SerializationError(_) => {
                "Check the input file for content that is not valid UTF-8"
            }
            ConvertError::InvalidInput { .. } => {
                "Make sure the file starts with a header line and is not empty"
            }
            ConvertError::ProcessingError { .. } => {
                "Check that every data line has the same number of columns as the header"
            }
            ConvertError::ConfigError { .. } | ConvertError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted arguments"
            }
            ConvertError::TaskError { .. } => {
                "Re-run the conversion; report the error if it persists"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::IoError(e) => format!("File operation failed: {}", e),
            ConvertError::SerializationError(e) => format!("Could not encode JSON: {}", e),
            ConvertError::InvalidInput { message } => format!("Invalid CSV content: {}", message),
            ConvertError::ProcessingError { message } => {
                format!("Row processing failed: {}", message)
            }
            ConvertError::ConfigError { message } => format!("Invalid configuration: {}", message),
            ConvertError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            ConvertError::TaskError { message } => {
                format!("Internal pipeline failure: {}", message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

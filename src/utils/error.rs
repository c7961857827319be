use thiserror::Error;

#[derive(Error, Debug)]
pub enum CubeError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("The cube with id {id} is already in the store")]
    DuplicateIdError { id: String },

    #[error("The cube with id {id} is not in the store")]
    NotFoundError { id: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Query processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Configuration,
    System,
}

impl CubeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::DuplicateIdError { .. } => ErrorCategory::Conflict,
            Self::NotFoundError { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) | Self::ProcessingError { .. } => {
                ErrorCategory::System
            }
        }
    }

    /// Short message meant for a terminal user rather than a log file.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidationError { message } => format!("Invalid cube: {}", message),
            Self::DuplicateIdError { id } => format!("A cube named '{}' already exists", id),
            Self::NotFoundError { id } => format!("No cube named '{}'", id),
            Self::ConfigError { field, message } => {
                format!("Bad setting '{}': {}", field, message)
            }
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::SerializationError(e) => format!("Could not encode the result: {}", e),
            Self::ProcessingError { message } => format!("Query failed: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, CubeError>;

//! Error types and handling for `VietGuide`

use thiserror::Error;

/// Main error type for the `VietGuide` library
#[derive(Error, Debug)]
pub enum VietGuideError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Malformed generation constraints
    #[error("Invalid constraints: {message}")]
    InvalidConstraints { message: String },

    /// Export format not recognized
    #[error("Unknown export format: {format}")]
    UnknownExportFormat { format: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Serialization errors
    #[error("Serialization error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl VietGuideError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new invalid-constraints error
    pub fn invalid_constraints<S: Into<String>>(message: S) -> Self {
        Self::InvalidConstraints {
            message: message.into(),
        }
    }

    /// Create a new unknown-export-format error
    pub fn unknown_export_format<S: Into<String>>(format: S) -> Self {
        Self::UnknownExportFormat {
            format: format.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            VietGuideError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            VietGuideError::InvalidConstraints { message } => {
                format!("Invalid trip constraints: {message}")
            }
            VietGuideError::UnknownExportFormat { format } => {
                format!("'{format}' is not a supported export format. Use 'structured' or 'text'.")
            }
            VietGuideError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            VietGuideError::Json { .. } => "Could not serialize the itinerary.".to_string(),
            VietGuideError::General { message } => message.clone(),
        }
    }
}

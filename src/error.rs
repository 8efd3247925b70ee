//! Error handling for Pedra Viewer
//!
//! Errors are defined with thiserror and propagated as `AppResult`.
//! The stone details modal itself never fails; these cover the
//! surrounding application (terminal, files, configuration).

use thiserror::Error;

/// Application result type alias
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Main application error enum
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration is syntactically valid but semantically wrong
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Inventory serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Terminal/UI operation errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Application state errors
    #[error("State error: {message}")]
    State { message: String },

    /// Generic application errors
    #[error("Application error: {message}")]
    Application { message: String },
}

impl AppError {
    /// Create a new Config error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new State error
    pub fn state<S: Into<String>>(message: S) -> Self {
        Self::State {
            message: message.into(),
        }
    }

    /// Create a new Application error
    pub fn application<S: Into<String>>(message: S) -> Self {
        Self::Application {
            message: message.into(),
        }
    }

    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::Io(_) => false,
            AppError::ConfigParse(_) => false,
            AppError::Config { .. } => false,
            AppError::Serde(_) => true,
            AppError::Terminal(_) => false,
            AppError::State { .. } => true,
            AppError::Application { .. } => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Io(_) => ErrorSeverity::High,
            AppError::ConfigParse(_) => ErrorSeverity::High,
            AppError::Config { .. } => ErrorSeverity::High,
            AppError::Serde(_) => ErrorSeverity::Medium,
            AppError::Terminal(_) => ErrorSeverity::Critical,
            AppError::State { .. } => ErrorSeverity::Medium,
            AppError::Application { .. } => ErrorSeverity::Low,
        }
    }
}

/// Error severity levels for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Convert severity to string for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorSeverity::Low => "LOW",
            ErrorSeverity::Medium => "MEDIUM",
            ErrorSeverity::High => "HIGH",
            ErrorSeverity::Critical => "CRITICAL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_and_severity() {
        let err = AppError::config("modal.width_percent out of range");
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("width_percent"));

        let err = AppError::state("no stone selected");
        assert!(err.is_recoverable());
        assert_eq!(err.severity().as_str(), "MEDIUM");
    }

    #[test]
    fn test_from_serde_error() {
        let parse_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: AppError = parse_err.into();
        assert!(matches!(err, AppError::Serde(_)));
        assert!(err.is_recoverable());
    }
}

//! Unified error handling for flart core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for flart core operations.
#[derive(Debug, Error, Clone)]
pub enum FlartError {
    /// Errors from the domain layer (invalid names, unresolved options).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O, tools, aborted prompts).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Persisted configuration could not be used.
    #[error("Configuration error: {message}")]
    ConfigurationInvalid { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl FlartError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationInvalid {
            message: message.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::ConfigurationInvalid { message } => vec![
                format!("Configuration issue: {}", message),
                "Check flart_config.json or run: flart init".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in flart".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::ConfigurationInvalid { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Aborted,
    ExternalTool,
    Internal,
}

/// Convenient result type alias.
pub type FlartResult<T> = Result<T, FlartError>;

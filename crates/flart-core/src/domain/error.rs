// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry through reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Duplicate path in generation plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Generation plan for '{entity}' is empty")]
    EmptyPlan { entity: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required configuration missing: {field}")]
    MissingConfiguration { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("'{}' cannot be used: {}", name, reason),
                "Use letters, digits, spaces, '-' or '_', starting with a letter".into(),
                "Examples: UserProfile, user_profile, \"home dashboard\"".into(),
            ],
            Self::MissingConfiguration { field } => vec![
                format!("The '{}' option was not resolved before generation", field),
                "Add it to flart_config.json or pass it on the command line".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Two templates target the same file: {}", path),
                "This is a bug in flart, please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::MissingConfiguration { .. } => ErrorCategory::Configuration,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } | Self::EmptyPlan { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}

//! Error handling for the flart CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use flart_core::error::FlartError;

pub use flart_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

type BoxedSource = Box<dyn Error + Send + Sync>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input that clap could not catch.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    // ── Config errors ──────────────────────────────────────────────────────
    /// The configuration file or environment could not be used.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `flart-core`.
    #[error("{0}")]
    Core(#[from] FlartError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation outside the core services failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The user backed out of an interactive prompt.
    #[error("Operation cancelled")]
    Cancelled,

    /// Feature compiled out (e.g. interactive mode without `interactive`).
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    pub fn config(message: impl Into<String>, source: impl Into<BoxedSource>) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            message: message.into(),
            source,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check projectDir in flart_config.json (or FLART_PROJECTDIR)".into(),
                "Create a default config with: flart init".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
            ],

            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No changes were made".into(),
            ],

            Self::FeatureNotAvailable { feature } => vec![
                format!("The '{}' feature is not available in this build", feature),
                format!("Install with: cargo install flart-cli --features {}", feature),
                "Or run a subcommand directly, e.g. flart model <NAME>".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Aborted => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::ExternalTool => ErrorCategory::ExternalTool,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::UserError,
            Self::FeatureNotAvailable { .. } => ErrorCategory::Configuration,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | External tool |  5   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::ExternalTool => 5,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::ExternalTool => tracing::error!("External tool failed: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments, declined prompt).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// `flutter` or `dart` failed.
    ExternalTool,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert I/O results into [`CliError`] at call-sites
/// with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::io(f(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    use flart_core::{application::ApplicationError, domain::DomainError};

    fn core(err: impl Into<FlartError>) -> CliError {
        CliError::Core(err.into())
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn invalid_name_exits_with_user_error() {
        let err = core(DomainError::InvalidName {
            name: "9lives".into(),
            reason: "must start with a letter".into(),
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn declined_overwrite_exits_with_user_error() {
        let err = core(ApplicationError::UserAborted {
            existing: vec![PathBuf::from("/app/lib/models/user.dart")],
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_configuration_exits_with_config_code() {
        let err = core(DomainError::MissingConfiguration {
            field: "serialization",
        });
        assert_eq!(err.exit_code(), 4);
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn tool_failure_exits_with_five() {
        let err = core(ApplicationError::external_tool(
            "flutter pub add equatable",
            "exit status: 1",
        ));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn io_error_is_internal() {
        let err = CliError::io("writing config", io::Error::other("disk full"));
        assert_eq!(err.exit_code(), 1);
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn config_error_points_at_init() {
        let err = CliError::ConfigError {
            message: "project directory '/nope' does not exist".into(),
            source: None,
        };
        assert!(err.suggestions().iter().any(|s| s.contains("flart init")));
    }

    #[test]
    fn core_suggestions_pass_through() {
        let inner = FlartError::from(DomainError::InvalidName {
            name: "".into(),
            reason: "empty".into(),
        });
        let expected = inner.suggestions();
        assert_eq!(CliError::Core(inner).suggestions(), expected);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::Cancelled;
        let s = err.format_plain(false);
        assert!(s.contains("Error: Operation cancelled"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::io("writing flart_config.json", io::Error::other("read-only"));
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: read-only"));
        assert!(!s.contains("--verbose"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { message, .. }) if message == "reading config"));
    }
}

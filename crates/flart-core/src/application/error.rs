//! Application layer errors.
//!
//! These errors represent failures in orchestration, not generation logic.
//! Those are `DomainError` from `crate::domain`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// The generation step that failed once files were already on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStep {
    Write,
    Format,
    Barrel,
    Codegen,
}

impl GenerationStep {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Write => "write",
            Self::Format => "format",
            Self::Barrel => "update barrel",
            Self::Codegen => "run build_runner for",
        }
    }

    /// Tool steps keep the external-tool category of their cause.
    fn category(self) -> ErrorCategory {
        match self {
            Self::Format | Self::Codegen => ErrorCategory::ExternalTool,
            Self::Write | Self::Barrel => ErrorCategory::Internal,
        }
    }
}

impl fmt::Display for GenerationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Failed to {operation} {path}: {reason}")]
    Filesystem {
        operation: &'static str,
        path: PathBuf,
        reason: String,
    },

    /// A step failed after files of the same plan were written.
    #[error("Failed to {step} {failed}: {reason} ({} file(s) already written)", .written.len())]
    PartialWrite {
        step: GenerationStep,
        failed: PathBuf,
        written: Vec<PathBuf>,
        reason: String,
    },

    /// The user declined to overwrite existing files.
    #[error("Operation cancelled by user")]
    UserAborted { existing: Vec<PathBuf> },

    /// An external command exited unsuccessfully or could not be spawned.
    #[error("`{command}` failed: {reason}")]
    ExternalTool { command: String, reason: String },

    /// Shared adapter state was poisoned.
    #[error("Internal lock poisoned")]
    LockError,
}

impl ApplicationError {
    pub fn filesystem(
        operation: &'static str,
        path: impl Into<PathBuf>,
        reason: impl ToString,
    ) -> Self {
        Self::Filesystem {
            operation,
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn external_tool(command: impl Into<String>, reason: impl ToString) -> Self {
        Self::ExternalTool {
            command: command.into(),
            reason: reason.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check projectDir in flart_config.json".into(),
            ],
            Self::PartialWrite { step, written, .. } => {
                let mut out = vec!["These files were written before the failure:".into()];
                out.extend(written.iter().map(|p| format!("  {}", p.display())));
                out.push(match step {
                    GenerationStep::Write => "Remove them or re-run with --yes to overwrite".into(),
                    GenerationStep::Format => "Run `dart format` on them once dart works".into(),
                    GenerationStep::Barrel => "Add the missing export line by hand".into(),
                    GenerationStep::Codegen => "Run `flart build` once the error is fixed".into(),
                });
                out
            }
            Self::UserAborted { existing } => vec![
                format!("{} existing file(s) were left untouched", existing.len()),
                "Pass --yes to overwrite without asking".into(),
            ],
            Self::ExternalTool { command, .. } => vec![
                format!("Command failed: {}", command),
                "Make sure flutter and dart are installed and on PATH".into(),
                "Use --skip-deps, --skip-format or --skip-build to skip tool steps".into(),
            ],
            Self::LockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } | Self::LockError => ErrorCategory::Internal,
            Self::PartialWrite { step, .. } => step.category(),
            Self::UserAborted { .. } => ErrorCategory::Aborted,
            Self::ExternalTool { .. } => ErrorCategory::ExternalTool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_write_lists_written_files() {
        let err = ApplicationError::PartialWrite {
            step: GenerationStep::Write,
            failed: "lib/b.dart".into(),
            written: vec!["lib/a.dart".into()],
            reason: "disk full".into(),
        };
        assert!(err.to_string().contains("1 file(s) already written"));
        assert!(err.suggestions().iter().any(|s| s.contains("lib/a.dart")));
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn partial_tool_failure_keeps_tool_category() {
        let err = ApplicationError::PartialWrite {
            step: GenerationStep::Format,
            failed: "lib/a.dart".into(),
            written: vec!["lib/a.dart".into(), "test/a_test.dart".into()],
            reason: "exit status 65".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to format lib/a.dart: exit status 65 (2 file(s) already written)"
        );
        assert_eq!(err.category(), ErrorCategory::ExternalTool);
        assert!(err.suggestions().iter().any(|s| s.contains("test/a_test.dart")));
    }

    #[test]
    fn external_tool_category() {
        let err = ApplicationError::external_tool("dart format x.dart", "exit status 1");
        assert_eq!(err.category(), ErrorCategory::ExternalTool);
        assert_eq!(err.to_string(), "`dart format x.dart` failed: exit status 1");
    }
}

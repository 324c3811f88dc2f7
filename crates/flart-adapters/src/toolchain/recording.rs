//! Recording toolchain for testing.

use std::path::Path;
use std::sync::{Arc, Mutex};

use flart_core::{
    application::{ApplicationError, ports::Toolchain},
    domain::{CodegenMode, Dependency},
    error::FlartResult,
};

use super::flutter::{build_runner_args, pub_add_args};

/// Records the command line each call would run instead of running it.
///
/// Commands starting with a configured prefix fail with `ExternalTool`.
#[derive(Debug, Clone, Default)]
pub struct RecordingToolchain {
    calls: Arc<Mutex<Vec<String>>>,
    fail_prefix: Option<String>,
}

impl RecordingToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, prefix: impl Into<String>) -> Self {
        self.fail_prefix = Some(prefix.into());
        self
    }

    /// Every recorded command line, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, program: &str, args: &[String]) -> FlartResult<()> {
        let line = format!("{program} {}", args.join(" "));
        self.calls
            .lock()
            .map_err(|_| ApplicationError::LockError)?
            .push(line.clone());

        match &self.fail_prefix {
            Some(prefix) if line.starts_with(prefix.as_str()) => {
                Err(ApplicationError::external_tool(line, "exited with exit status: 1").into())
            }
            _ => Ok(()),
        }
    }
}

impl Toolchain for RecordingToolchain {
    fn add_dependency(&self, dependency: &Dependency) -> FlartResult<()> {
        self.record("flutter", &pub_add_args(dependency))
    }

    fn run_code_generation(&self, mode: CodegenMode) -> FlartResult<()> {
        self.record("dart", &build_runner_args(mode))
    }

    fn format_file(&self, path: &Path) -> FlartResult<()> {
        self.record("dart", &["format".to_string(), path.display().to_string()])
    }
}

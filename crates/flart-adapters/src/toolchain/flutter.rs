//! Toolchain adapter spawning the real `flutter` and `dart` executables.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use flart_core::{
    application::{ApplicationError, ports::Toolchain},
    domain::{CodegenMode, Dependency},
    error::FlartResult,
};

/// Runs Flutter/Dart commands as blocking child processes in the project
/// directory. Output streams are inherited so the user sees tool progress.
#[derive(Debug, Clone)]
pub struct FlutterToolchain {
    project_dir: PathBuf,
    flutter: String,
    dart: String,
}

impl FlutterToolchain {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            flutter: "flutter".into(),
            dart: "dart".into(),
        }
    }

    /// Use different executables (e.g. an fvm shim).
    pub fn with_executables(mut self, flutter: impl Into<String>, dart: impl Into<String>) -> Self {
        self.flutter = flutter.into();
        self.dart = dart.into();
        self
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    fn run(&self, program: &str, args: &[String], quiet: bool) -> FlartResult<()> {
        let command_line = std::iter::once(program.to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");
        debug!(command = %command_line, dir = %self.project_dir.display(), "spawning");

        let status = Command::new(program)
            .args(args)
            .current_dir(&self.project_dir)
            .stdin(Stdio::null())
            .stdout(if quiet { Stdio::null() } else { Stdio::inherit() })
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ApplicationError::external_tool(&command_line, e))?;

        if !status.success() {
            return Err(ApplicationError::external_tool(
                command_line,
                format!("exited with {status}"),
            )
            .into());
        }
        Ok(())
    }
}

/// Arguments for `flutter pub add`.
pub fn pub_add_args(dependency: &Dependency) -> Vec<String> {
    vec!["pub".into(), "add".into(), dependency.to_string()]
}

/// Arguments for `dart run build_runner`.
pub fn build_runner_args(mode: CodegenMode) -> Vec<String> {
    let mut args: Vec<String> = vec!["run".into(), "build_runner".into()];
    match mode {
        CodegenMode::Build => {
            args.push("build".into());
            args.push("--delete-conflicting-outputs".into());
        }
        CodegenMode::Watch => {
            args.push("watch".into());
            args.push("-d".into());
        }
    }
    args
}

impl Toolchain for FlutterToolchain {
    #[instrument(skip_all, fields(dependency = %dependency))]
    fn add_dependency(&self, dependency: &Dependency) -> FlartResult<()> {
        self.run(&self.flutter, &pub_add_args(dependency), false)
    }

    #[instrument(skip(self))]
    fn run_code_generation(&self, mode: CodegenMode) -> FlartResult<()> {
        self.run(&self.dart, &build_runner_args(mode), false)
    }

    fn format_file(&self, path: &Path) -> FlartResult<()> {
        let args = vec!["format".to_string(), path.display().to_string()];
        self.run(&self.dart, &args, true)
    }
}

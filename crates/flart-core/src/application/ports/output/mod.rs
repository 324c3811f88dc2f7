//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `flart-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{CodegenMode, Dependency};
use crate::error::FlartResult;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_file: bool,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_file: true,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_file: false,
        }
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `flart_adapters::filesystem::LocalFilesystem` (production)
/// - `flart_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are absolute: services resolve plan-relative paths against the
/// project root before calling in.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> FlartResult<()>;

    /// Create or truncate a file with `content`.
    fn write_file(&self, path: &Path, content: &str) -> FlartResult<()>;

    /// Append `content` to an existing file.
    fn append_file(&self, path: &Path, content: &str) -> FlartResult<()>;

    fn read_to_string(&self, path: &Path) -> FlartResult<String>;

    /// Immediate children of `path`, in no particular order.
    fn list_dir(&self, path: &Path) -> FlartResult<Vec<DirEntry>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the Flutter/Dart command-line tools.
///
/// Implemented by:
/// - `flart_adapters::toolchain::FlutterToolchain` (spawns processes)
/// - `flart_adapters::toolchain::RecordingToolchain` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Toolchain: Send + Sync {
    /// `flutter pub add [dev:]<package>`.
    fn add_dependency(&self, dependency: &Dependency) -> FlartResult<()>;

    /// `dart run build_runner build|watch`. Blocks until the tool exits.
    fn run_code_generation(&self, mode: CodegenMode) -> FlartResult<()>;

    /// `dart format <file>`.
    fn format_file(&self, path: &Path) -> FlartResult<()>;
}

/// Port for reading the project's package manifest (`pubspec.yaml`).
#[cfg_attr(test, mockall::automock)]
pub trait PackageManifest: Send + Sync {
    /// Declared package name, if any.
    fn package_name(&self) -> Option<String>;

    /// Whether the dependency is already declared in its section.
    fn declares(&self, dependency: &Dependency) -> FlartResult<bool>;
}

/// Port for the one overwrite confirmation a generation may ask for.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmationPrompt: Send + Sync {
    /// Ask once about every existing target. `true` approves the overwrite.
    fn confirm_overwrite(&self, existing: &[PathBuf]) -> FlartResult<bool>;
}

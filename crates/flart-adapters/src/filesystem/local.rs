//! Local filesystem adapter using std::fs.

use std::io::{self, Write};
use std::path::Path;

use flart_core::{
    application::{ApplicationError, ports::DirEntry, ports::Filesystem},
    error::{FlartError, FlartResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> FlartResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> FlartResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn append_file(&self, path: &Path, content: &str) -> FlartResult<()> {
        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "open file"))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "append to file"))
    }

    fn read_to_string(&self, path: &Path) -> FlartResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn list_dir(&self, path: &Path) -> FlartResult<Vec<DirEntry>> {
        let entries = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        let mut out = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory"))?;
            let file_type = entry
                .file_type()
                .map_err(|e| map_io_error(&entry.path(), e, "get metadata"))?;
            // Symlinks count as what they point at; dangling ones as files.
            let is_dir = if file_type.is_symlink() {
                std::fs::metadata(entry.path()).is_ok_and(|m| m.is_dir())
            } else {
                file_type.is_dir()
            };
            // Non UTF-8 names can never match a Dart export line.
            if let Some(name) = entry.file_name().to_str() {
                out.push(DirEntry {
                    name: name.to_string(),
                    is_file: !is_dir,
                });
            }
        }
        Ok(out)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> FlartError {
    ApplicationError::filesystem(operation, path, e).into()
}

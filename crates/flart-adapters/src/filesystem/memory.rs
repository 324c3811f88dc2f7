//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use flart_core::{
    application::{ApplicationError, ports::DirEntry, ports::Filesystem},
    error::FlartResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a test can keep a handle after boxing one
/// into a service.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            let _ = self.create_dir_all(parent);
        }
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path.to_path_buf(), content.to_string());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> FlartResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> FlartResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockError)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::filesystem(
                    "write file",
                    path,
                    "parent directory does not exist",
                )
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn append_file(&self, path: &Path, content: &str) -> FlartResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockError)?;

        match inner.files.get_mut(path) {
            Some(existing) => {
                existing.push_str(content);
                Ok(())
            }
            None => Err(ApplicationError::filesystem("open file", path, "file does not exist").into()),
        }
    }

    fn read_to_string(&self, path: &Path) -> FlartResult<String> {
        let inner = self.inner.read().map_err(|_| ApplicationError::LockError)?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| ApplicationError::filesystem("read file", path, "file does not exist").into())
    }

    fn list_dir(&self, path: &Path) -> FlartResult<Vec<DirEntry>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::LockError)?;
        if !inner.directories.contains(path) {
            return Err(
                ApplicationError::filesystem("read directory", path, "directory does not exist")
                    .into(),
            );
        }

        let name_of = |p: &PathBuf| p.file_name().and_then(|n| n.to_str()).map(str::to_string);
        let files = inner
            .files
            .keys()
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| name_of(p).map(DirEntry::file));
        let dirs = inner
            .directories
            .iter()
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| name_of(p).map(DirEntry::dir));

        Ok(files.chain(dirs).collect())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/app/lib/a.dart"), "").is_err());

        fs.create_dir_all(Path::new("/app/lib")).unwrap();
        fs.write_file(Path::new("/app/lib/a.dart"), "x").unwrap();
        assert_eq!(fs.read_file("/app/lib/a.dart").as_deref(), Some("x"));
    }

    #[test]
    fn list_dir_returns_direct_children_only() {
        let fs = MemoryFilesystem::new()
            .with_file("/app/lib/models/user.dart", "")
            .with_file("/app/lib/models/nested/deep.dart", "");

        let mut entries = fs.list_dir(Path::new("/app/lib/models")).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(
            entries,
            vec![DirEntry::dir("nested"), DirEntry::file("user.dart")]
        );
    }

    #[test]
    fn missing_directory_cannot_be_listed() {
        assert!(MemoryFilesystem::new().list_dir(Path::new("/none")).is_err());
    }
}

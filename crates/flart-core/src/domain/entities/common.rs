use super::DomainError;
use std::fmt;
use std::path::{Path, PathBuf};

/// A filesystem path guaranteed to be relative to the project root.
///
/// Invariant: Never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if path is absolute; only used with template constants.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(
            !path.is_absolute(),
            "RelativePath cannot be absolute: {:?}",
            path
        );
        Self(path)
    }

    /// Join a segment, maintaining relative invariant.
    pub fn join(&self, segment: impl AsRef<Path>) -> Result<Self, DomainError> {
        let segment = segment.as_ref();
        if segment.is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: segment.display().to_string(),
            });
        }
        Ok(Self(self.0.join(segment)))
    }

    /// Resolve against an absolute project root.
    pub fn under(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }

    /// Final component as UTF-8, if any.
    pub fn file_name(&self) -> Option<&str> {
        self.0.file_name().and_then(|n| n.to_str())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.to_str().unwrap_or("")
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_keeps_relative() {
        let dir = RelativePath::new("lib/models");
        let file = dir.join("user.dart").unwrap();
        assert_eq!(file.as_path(), Path::new("lib/models/user.dart"));
        assert_eq!(file.file_name(), Some("user.dart"));
    }

    #[test]
    fn absolute_paths_are_rejected() {
        assert!(RelativePath::new("lib").join("/abs").is_err());
    }

    #[test]
    #[should_panic(expected = "cannot be absolute")]
    fn absolute_constant_panics() {
        RelativePath::new("/etc/passwd");
    }

    #[test]
    fn under_resolves_against_root() {
        let path = RelativePath::new("lib/models/user.dart");
        assert_eq!(
            path.under(Path::new("/project")),
            PathBuf::from("/project/lib/models/user.dart")
        );
    }
}

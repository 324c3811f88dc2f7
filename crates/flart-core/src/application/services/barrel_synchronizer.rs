//! Barrel Synchronizer - keeps per-directory index files complete.
//!
//! Creation scans the directory once and writes a sorted index; afterwards the
//! index is only ever appended to, so hand-written lines survive.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::barrel,
    error::FlartResult,
};

/// What [`BarrelSynchronizer::ensure_exported`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarrelOutcome {
    /// The index did not exist and was written with these lines.
    Created { exports: Vec<String> },
    /// The export line was appended to an existing index.
    Appended,
    /// The index already contained the export line.
    AlreadyExported,
}

impl BarrelOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, Self::AlreadyExported)
    }
}

pub struct BarrelSynchronizer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> BarrelSynchronizer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Make sure `directory/index_file` exports `unit`. Idempotent.
    #[instrument(skip_all, fields(directory = %directory.display(), index = index_file, unit = unit))]
    pub fn ensure_exported(
        &self,
        directory: &Path,
        index_file: &str,
        unit: &str,
    ) -> FlartResult<BarrelOutcome> {
        let index_path = directory.join(index_file);
        let line = barrel::export_line(unit);

        if !self.filesystem.exists(&index_path) {
            let entries = self.filesystem.list_dir(directory)?;
            let exports = barrel::seed_exports(
                entries
                    .iter()
                    .filter(|e| e.is_file)
                    .map(|e| e.name.as_str()),
                index_file,
                unit,
            );
            self.filesystem
                .write_file(&index_path, &barrel::render_index(&exports))?;
            debug!(count = exports.len(), "barrel index created");
            return Ok(BarrelOutcome::Created { exports });
        }

        let content = self.filesystem.read_to_string(&index_path)?;
        if barrel::contains_export(&content, &line) {
            return Ok(BarrelOutcome::AlreadyExported);
        }

        self.filesystem
            .append_file(&index_path, &barrel::append_fragment(&content, &line))?;
        debug!("barrel export appended");
        Ok(BarrelOutcome::Appended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::testing::FakeFs;

    const DIR: &str = "/app/lib/models";
    const INDEX: &str = "/app/lib/models/models.dart";

    fn sync(fs: &FakeFs, unit: &str) -> BarrelOutcome {
        BarrelSynchronizer::new(fs)
            .ensure_exported(Path::new(DIR), "models.dart", unit)
            .unwrap()
    }

    #[test]
    fn creation_skips_derived_artifacts() {
        let fs = FakeFs::default()
            .with_file("/app/lib/models/a.dart", "")
            .with_file("/app/lib/models/b.g.dart", "")
            .with_file("/app/lib/models/c.dart", "");

        let outcome = sync(&fs, "c");
        assert_eq!(
            outcome,
            BarrelOutcome::Created {
                exports: vec!["export 'a.dart';".into(), "export 'c.dart';".into()]
            }
        );
        assert_eq!(fs.read(INDEX).unwrap(), "export 'a.dart';\nexport 'c.dart';\n");
    }

    #[test]
    fn second_call_is_a_no_op() {
        let fs = FakeFs::default().with_file("/app/lib/models/user.dart", "");

        assert!(matches!(sync(&fs, "user"), BarrelOutcome::Created { .. }));
        let first = fs.read(INDEX).unwrap();

        assert_eq!(sync(&fs, "user"), BarrelOutcome::AlreadyExported);
        assert_eq!(fs.read(INDEX).unwrap(), first);
    }

    #[test]
    fn append_preserves_existing_bytes() {
        let existing = "// custom header\nexport 'zeta.dart';\n";
        let fs = FakeFs::default().with_file(INDEX, existing);

        assert_eq!(sync(&fs, "alpha"), BarrelOutcome::Appended);
        let content = fs.read(INDEX).unwrap();
        assert!(content.starts_with(existing));
        assert!(content.ends_with("export 'alpha.dart';\n"));
    }

    #[test]
    fn append_adds_separator_when_missing() {
        let fs = FakeFs::default().with_file(INDEX, "export 'a.dart';");
        sync(&fs, "b");
        assert_eq!(fs.read(INDEX).unwrap(), "export 'a.dart';\nexport 'b.dart';\n");
    }

    #[test]
    fn empty_directory_yields_single_export() {
        let fs = FakeFs::default();
        let result = BarrelSynchronizer::new(&fs).ensure_exported(
            Path::new("/nowhere"),
            "nowhere.dart",
            "x",
        );
        assert!(result.is_ok());
        assert_eq!(fs.read("/nowhere/nowhere.dart").unwrap(), "export 'x.dart';\n");
    }

    #[test]
    fn unreadable_directory_is_reported() {
        use crate::application::{ApplicationError, ports::MockFilesystem};
        use crate::error::FlartError;

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_list_dir().returning(|path| {
            Err(ApplicationError::filesystem("list", path, "permission denied").into())
        });
        fs.expect_write_file().never();

        let err = BarrelSynchronizer::new(&fs)
            .ensure_exported(Path::new(DIR), "models.dart", "x")
            .unwrap_err();
        assert!(matches!(
            err,
            FlartError::Application(ApplicationError::Filesystem { .. })
        ));
    }
}

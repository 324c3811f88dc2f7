use std::collections::HashSet;

use crate::domain::{
    entities::common::RelativePath,
    error::DomainError,
    naming::EntityName,
    value_objects::{Dependency, EntityKind},
};

/// Everything one generation request will produce.
///
/// This is the output of template selection. It contains no I/O, only data:
/// the files to write (in order), the barrel indexes to update afterwards and
/// the packages the generated code imports.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub(crate) kind: EntityKind,
    pub(crate) name: EntityName,
    pub(crate) files: Vec<FileSpec>,
    pub(crate) barrels: Vec<BarrelTarget>,
    pub(crate) dependencies: Vec<Dependency>,
    pub(crate) needs_codegen: bool,
}

impl GenerationPlan {
    pub fn new(kind: EntityKind, name: EntityName) -> Self {
        Self {
            kind,
            name,
            files: Vec::new(),
            barrels: Vec::new(),
            dependencies: Vec::new(),
            needs_codegen: false,
        }
    }

    pub fn add_file(&mut self, path: RelativePath, content: String) {
        self.files.push(FileSpec { path, content });
    }

    pub fn add_barrel(&mut self, target: BarrelTarget) {
        self.barrels.push(target);
    }

    pub fn with_dependencies(mut self, dependencies: Vec<Dependency>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn with_codegen(mut self, needs_codegen: bool) -> Self {
        self.needs_codegen = needs_codegen;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyPlan {
                entity: self.name.raw().to_string(),
            });
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            let path_str = file.path.to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }

            if file.path.as_path().is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
        }

        Ok(())
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn name(&self) -> &EntityName {
        &self.name
    }

    pub fn files(&self) -> &[FileSpec] {
        &self.files
    }

    pub fn barrels(&self) -> &[BarrelTarget] {
        &self.barrels
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Whether `build_runner` must run before the generated code compiles.
    pub fn needs_codegen(&self) -> bool {
        self.needs_codegen
    }

    /// Look up a file by its relative path.
    pub fn file(&self, path: &str) -> Option<&FileSpec> {
        self.files.iter().find(|f| f.path.as_str() == path)
    }
}

/// One file to write: a path relative to the project root and its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub path: RelativePath,
    pub content: String,
}

/// A barrel index that must re-export `unit` once the files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarrelTarget {
    /// Directory holding both the unit and the index.
    pub directory: RelativePath,
    /// Index file name inside `directory`.
    pub index_file: String,
    /// File form of the unit to export (no extension).
    pub unit: String,
}

impl BarrelTarget {
    /// Target whose index file is named after its directory
    /// (`lib/models` -> `lib/models/models.dart`).
    pub fn named_after_directory(directory: RelativePath, unit: impl Into<String>) -> Self {
        let stem = directory.file_name().unwrap_or("index").to_string();
        Self {
            directory,
            index_file: format!("{stem}{}", crate::domain::barrel::DART_EXTENSION),
            unit: unit.into(),
        }
    }

    pub fn index_path(&self) -> Result<RelativePath, DomainError> {
        self.directory.join(&self.index_file)
    }
}

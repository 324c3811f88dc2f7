//! `pubspec.yaml` adapter.
//!
//! The manifest is re-read on every query so packages added by
//! `flutter pub add` earlier in the same run are seen.

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use tracing::{debug, warn};

use flart_core::{
    application::{ApplicationError, ports::PackageManifest},
    domain::Dependency,
    error::FlartResult,
};

pub const PUBSPEC_FILE: &str = "pubspec.yaml";

/// Reads `<project>/pubspec.yaml`.
#[derive(Debug, Clone)]
pub struct PubspecManifest {
    path: PathBuf,
}

impl PubspecManifest {
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            path: project_dir.as_ref().join(PUBSPEC_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> FlartResult<Config> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| ApplicationError::filesystem("read manifest", &self.path, e))?;
        parse(&content).map_err(|e| ApplicationError::filesystem("parse manifest", &self.path, e).into())
    }
}

fn parse(content: &str) -> Result<Config, config::ConfigError> {
    Config::builder()
        .add_source(File::from_str(content, FileFormat::Yaml))
        .build()
}

/// Whether `section` of a parsed manifest lists `package`.
fn section_declares(manifest: &Config, section: &str, package: &str) -> bool {
    manifest
        .get_table(section)
        .map(|table| table.contains_key(package))
        .unwrap_or(false)
}

impl PackageManifest for PubspecManifest {
    fn package_name(&self) -> Option<String> {
        match self.load() {
            Ok(manifest) => manifest
                .get_string("name")
                .ok()
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            Err(e) => {
                warn!(error = %e, "could not read package name");
                None
            }
        }
    }

    fn declares(&self, dependency: &Dependency) -> FlartResult<bool> {
        let manifest = self.load()?;
        let declared = section_declares(&manifest, dependency.kind.section(), dependency.name);
        debug!(%dependency, declared, "manifest lookup");
        Ok(declared)
    }
}

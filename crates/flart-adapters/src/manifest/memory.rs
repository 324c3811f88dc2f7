//! In-memory manifest for testing.

use std::sync::{Arc, RwLock};

use flart_core::{
    application::{ApplicationError, ports::PackageManifest},
    domain::Dependency,
    error::FlartResult,
};

/// Manifest with a fixed name and a mutable set of declared packages.
#[derive(Debug, Clone, Default)]
pub struct InMemoryManifest {
    name: Option<String>,
    declared: Arc<RwLock<Vec<Dependency>>>,
}

impl InMemoryManifest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            declared: Arc::default(),
        }
    }

    /// Manifest without a `name:` entry.
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn declaring(self, dependency: Dependency) -> Self {
        if let Ok(mut declared) = self.declared.write() {
            declared.push(dependency);
        }
        self
    }
}

impl PackageManifest for InMemoryManifest {
    fn package_name(&self) -> Option<String> {
        self.name.clone()
    }

    fn declares(&self, dependency: &Dependency) -> FlartResult<bool> {
        let declared = self
            .declared
            .read()
            .map_err(|_| ApplicationError::LockError)?;
        Ok(declared.contains(dependency))
    }
}

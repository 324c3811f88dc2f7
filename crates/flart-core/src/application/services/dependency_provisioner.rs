//! Dependency Provisioner - makes `pubspec.yaml` declare what the templates import.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{PackageManifest, Toolchain},
    domain::Dependency,
    error::FlartResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Added,
    AlreadyDeclared,
}

pub struct DependencyProvisioner<'a> {
    toolchain: &'a dyn Toolchain,
    manifest: &'a dyn PackageManifest,
}

impl<'a> DependencyProvisioner<'a> {
    pub fn new(toolchain: &'a dyn Toolchain, manifest: &'a dyn PackageManifest) -> Self {
        Self {
            toolchain,
            manifest,
        }
    }

    /// Add every dependency the manifest does not declare yet, in order.
    ///
    /// Stops at the first tool failure.
    #[instrument(skip_all, fields(count = dependencies.len()))]
    pub fn provision(
        &self,
        dependencies: &[Dependency],
    ) -> FlartResult<Vec<(Dependency, ProvisionOutcome)>> {
        let mut outcomes = Vec::with_capacity(dependencies.len());

        for dependency in dependencies {
            if self.manifest.declares(dependency)? {
                debug!(%dependency, section = %dependency.kind, "already declared");
                outcomes.push((dependency.clone(), ProvisionOutcome::AlreadyDeclared));
                continue;
            }

            info!(%dependency, "adding dependency");
            self.toolchain.add_dependency(dependency)?;
            outcomes.push((dependency.clone(), ProvisionOutcome::Added));
        }

        Ok(outcomes)
    }
}

//! Build Service - standalone `build_runner` invocations.

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{PackageManifest, Toolchain},
        services::dependency_provisioner::{DependencyProvisioner, ProvisionOutcome},
    },
    domain::{CodegenMode, Dependency, dependencies::CODEGEN_TOOLING},
    error::FlartResult,
};

pub struct BuildService {
    toolchain: Box<dyn Toolchain>,
    manifest: Box<dyn PackageManifest>,
}

impl BuildService {
    pub fn new(toolchain: Box<dyn Toolchain>, manifest: Box<dyn PackageManifest>) -> Self {
        Self {
            toolchain,
            manifest,
        }
    }

    /// Run the code generator, optionally adding its dev packages first.
    ///
    /// `Watch` blocks until the tool is interrupted.
    #[instrument(skip(self), fields(mode = %mode))]
    pub fn run(
        &self,
        mode: CodegenMode,
        provision: bool,
    ) -> FlartResult<Vec<(Dependency, ProvisionOutcome)>> {
        let outcomes = if provision {
            DependencyProvisioner::new(self.toolchain.as_ref(), self.manifest.as_ref())
                .provision(&CODEGEN_TOOLING)?
        } else {
            Vec::new()
        };

        info!("Running build_runner {}", mode);
        self.toolchain.run_code_generation(mode)?;
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::testing::{FakeManifest, FakeToolchain};

    #[test]
    fn build_without_provisioning_runs_only_the_generator() {
        let toolchain = FakeToolchain::default();
        let service = BuildService::new(Box::new(toolchain.clone()), Box::new(FakeManifest::default()));

        let outcomes = service.run(CodegenMode::Build, false).unwrap();
        assert!(outcomes.is_empty());
        assert_eq!(toolchain.calls(), vec!["dart run build_runner build"]);
    }

    #[test]
    fn watch_with_provisioning_adds_missing_tools_first() {
        let toolchain = FakeToolchain::default();
        let manifest = FakeManifest {
            declared: vec![Dependency::dev("build_runner")],
            ..Default::default()
        };
        let service = BuildService::new(Box::new(toolchain.clone()), Box::new(manifest));

        service.run(CodegenMode::Watch, true).unwrap();
        assert_eq!(
            toolchain.calls(),
            vec![
                "flutter pub add dev:freezed",
                "flutter pub add dev:json_serializable",
                "dart run build_runner watch",
            ]
        );
    }
}

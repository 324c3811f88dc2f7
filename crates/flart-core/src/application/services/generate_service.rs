//! Generate Service - main application orchestrator.
//!
//! This service coordinates one generation request:
//! 1. Validate the name and select the plan
//! 2. Check for conflicts and ask once
//! 3. Provision dependencies
//! 4. Write files, format them
//! 5. Update barrel indexes
//! 6. Run `build_runner` for generated-style plans
//!
//! Nothing is written before step 2 succeeds.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError, GenerationStep,
        ports::{ConfirmationPrompt, Filesystem, PackageManifest, Toolchain},
        services::{
            barrel_synchronizer::{BarrelOutcome, BarrelSynchronizer},
            conflict_gate::ConflictGate,
            dependency_provisioner::{DependencyProvisioner, ProvisionOutcome},
        },
    },
    domain::{
        CodegenMode, Dependency, DomainValidator as validator, EntityKind, GenerationConfig,
        GenerationPlan, TemplateSelector,
    },
    error::{FlartError, FlartResult},
};

/// Switches for the side effects around file generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Compute and report the plan without touching the project.
    pub dry_run: bool,
    /// Approve overwriting existing files without asking.
    pub assume_yes: bool,
    /// Run `flutter pub add` for missing packages.
    pub provision: bool,
    /// Run `dart format` on every written file.
    pub format: bool,
    /// Run `build_runner` when the plan needs it.
    pub codegen: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            assume_yes: false,
            provision: true,
            format: true,
            codegen: true,
        }
    }
}

impl GenerateOptions {
    /// Write files and barrels only; no external tools.
    pub fn files_only() -> Self {
        Self {
            provision: false,
            format: false,
            codegen: false,
            ..Self::default()
        }
    }
}

/// What a request did (or would do, for a dry run).
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub plan: GenerationPlan,
    pub dry_run: bool,
    pub written: Vec<PathBuf>,
    pub overwritten: Vec<PathBuf>,
    pub barrels: Vec<(PathBuf, BarrelOutcome)>,
    pub dependencies: Vec<(Dependency, ProvisionOutcome)>,
    pub codegen_ran: bool,
}

/// Main generation service.
pub struct GenerateService {
    project_root: PathBuf,
    filesystem: Box<dyn Filesystem>,
    toolchain: Box<dyn Toolchain>,
    manifest: Box<dyn PackageManifest>,
    prompt: Box<dyn ConfirmationPrompt>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// `project_root` must be absolute; every plan path is resolved against it.
    pub fn new(
        project_root: impl Into<PathBuf>,
        filesystem: Box<dyn Filesystem>,
        toolchain: Box<dyn Toolchain>,
        manifest: Box<dyn PackageManifest>,
        prompt: Box<dyn ConfirmationPrompt>,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            filesystem,
            toolchain,
            manifest,
            prompt,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn create_model(
        &self,
        name: &str,
        config: &GenerationConfig,
        options: GenerateOptions,
    ) -> FlartResult<GenerationReport> {
        self.generate(EntityKind::Model, name, config, options)
    }

    pub fn create_screen(
        &self,
        name: &str,
        config: &GenerationConfig,
        options: GenerateOptions,
    ) -> FlartResult<GenerationReport> {
        self.generate(EntityKind::Screen, name, config, options)
    }

    /// Validate a name and build its plan, without side effects.
    pub fn plan(
        &self,
        kind: EntityKind,
        name: &str,
        config: &GenerationConfig,
    ) -> FlartResult<GenerationPlan> {
        let name = validator::validate_name(name)?;
        let selector = TemplateSelector::for_package(self.manifest.package_name());
        let plan = selector.select(kind, &name, config)?;
        validator::validate_plan(&plan)?;
        Ok(plan)
    }

    #[instrument(skip_all, fields(kind = %kind, entity = name, dry_run = options.dry_run))]
    pub fn generate(
        &self,
        kind: EntityKind,
        name: &str,
        config: &GenerationConfig,
        options: GenerateOptions,
    ) -> FlartResult<GenerationReport> {
        let plan = self.plan(kind, name, config)?;
        info!(
            entity = %plan.name().file_form(),
            files = plan.files().len(),
            "Generating {}",
            kind
        );

        let report = ConflictGate::new(self.filesystem.as_ref()).check(&self.project_root, &plan);

        if options.dry_run {
            return Ok(GenerationReport {
                overwritten: report.existing().to_vec(),
                plan,
                dry_run: true,
                written: Vec::new(),
                barrels: Vec::new(),
                dependencies: Vec::new(),
                codegen_ran: false,
            });
        }

        let overwritten = ConflictGate::resolve(report, self.prompt.as_ref(), options.assume_yes)?;

        let dependencies = if options.provision {
            DependencyProvisioner::new(self.toolchain.as_ref(), self.manifest.as_ref())
                .provision(plan.dependencies())?
        } else {
            Vec::new()
        };

        let written = self.write_files(&plan)?;

        if options.format {
            for path in &written {
                self.toolchain
                    .format_file(path)
                    .map_err(|e| partial(GenerationStep::Format, path, &written, e))?;
            }
        }

        let barrels = self.sync_barrels(&plan, &written)?;

        let codegen_ran = plan.needs_codegen() && options.codegen;
        if codegen_ran {
            self.toolchain
                .run_code_generation(CodegenMode::Build)
                .map_err(|e| partial(GenerationStep::Codegen, &self.project_root, &written, e))?;
        }

        info!(written = written.len(), "Generation completed successfully");
        Ok(GenerationReport {
            plan,
            dry_run: false,
            written,
            overwritten,
            barrels,
            dependencies,
            codegen_ran,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write every file in plan order.
    ///
    /// A failure after the first write becomes `PartialWrite` listing what
    /// already landed on disk.
    fn write_files(&self, plan: &GenerationPlan) -> FlartResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(plan.files().len());

        for file in plan.files() {
            let path = file.path.under(&self.project_root);
            let result = match path.parent() {
                Some(parent) => self.filesystem.create_dir_all(parent),
                None => Ok(()),
            }
            .and_then(|()| self.filesystem.write_file(&path, &file.content));

            if let Err(e) = result {
                if written.is_empty() {
                    return Err(e);
                }
                return Err(partial(GenerationStep::Write, &path, &written, e));
            }

            written.push(path);
        }

        Ok(written)
    }

    fn sync_barrels(
        &self,
        plan: &GenerationPlan,
        written: &[PathBuf],
    ) -> FlartResult<Vec<(PathBuf, BarrelOutcome)>> {
        let synchronizer = BarrelSynchronizer::new(self.filesystem.as_ref());

        plan.barrels()
            .iter()
            .map(|target| {
                let directory = target.directory.under(&self.project_root);
                let index = directory.join(&target.index_file);
                let outcome = synchronizer
                    .ensure_exported(&directory, &target.index_file, &target.unit)
                    .map_err(|e| partial(GenerationStep::Barrel, &index, written, e))?;
                Ok::<_, FlartError>((index, outcome))
            })
            .collect()
    }
}

/// Wrap a failure that happened once files were on disk.
fn partial(step: GenerationStep, failed: &Path, written: &[PathBuf], cause: FlartError) -> FlartError {
    warn!(%step, failed = %failed.display(), written = written.len(), "Generation failed mid-plan");
    ApplicationError::PartialWrite {
        step,
        failed: failed.to_path_buf(),
        written: written.to_vec(),
        reason: cause.to_string(),
    }
    .into()
}

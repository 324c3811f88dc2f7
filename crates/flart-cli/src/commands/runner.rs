//! `flart build` / `flart watch`: run build_runner in the project.

use tracing::instrument;

use flart_adapters::{FlutterToolchain, PubspecManifest};
use flart_core::{application::BuildService, domain::CodegenMode};

use crate::{cli::RunnerArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(mode = %mode))]
pub fn execute(
    mode: CodegenMode,
    args: RunnerArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let root = config.resolve_project_dir()?;
    let service = BuildService::new(
        Box::new(FlutterToolchain::new(&root)),
        Box::new(PubspecManifest::new(&root)),
    );

    if mode == CodegenMode::Watch {
        output.info("Watching for changes, press Ctrl+C to stop")?;
    }

    let outcomes = service.run(mode, args.provision)?;
    for (dep, outcome) in &outcomes {
        output.dependency(dep, *outcome)?;
    }
    output.success(&format!("build_runner {mode} finished"))?;
    Ok(())
}

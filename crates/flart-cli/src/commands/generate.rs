//! Shared plumbing for `model` and `screen`.

use std::path::Path;

use tracing::{info, instrument};

use flart_adapters::{FlutterToolchain, LocalFilesystem, PubspecManifest};
use flart_core::{
    application::{GenerateOptions, GenerateService},
    domain::{EntityKind, GenerationConfig},
};

use crate::{
    cli::{GenerationFlags, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt::TerminalPrompt,
};

impl GenerationFlags {
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            dry_run: self.dry_run,
            assume_yes: self.yes,
            provision: !self.skip_deps,
            format: !self.skip_format,
            codegen: !self.skip_build,
        }
    }
}

/// Wire the production adapters around a project directory.
pub fn service(root: &Path, global: &GlobalArgs) -> GenerateService {
    GenerateService::new(
        root,
        Box::new(LocalFilesystem::new()),
        Box::new(FlutterToolchain::new(root)),
        Box::new(PubspecManifest::new(root)),
        Box::new(TerminalPrompt::new(global.no_color)),
    )
}

/// Generate one entity in the configured project and report the result.
#[instrument(skip_all, fields(kind = %kind, entity = name))]
pub fn run(
    kind: EntityKind,
    name: &str,
    generation: &GenerationConfig,
    flags: &GenerationFlags,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let root = config.resolve_project_dir()?;
    info!(root = %root.display(), ?generation, "Generating");

    let report = service(&root, global).generate(kind, name, generation, flags.options())?;
    output.report(&report, &root)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_run_every_tool() {
        assert_eq!(GenerationFlags::default().options(), GenerateOptions::default());
    }

    #[test]
    fn skip_flags_disable_tools() {
        let flags = GenerationFlags {
            yes: true,
            dry_run: false,
            skip_deps: true,
            skip_format: true,
            skip_build: true,
        };
        let options = flags.options();
        assert!(options.assume_yes);
        assert_eq!(
            GenerateOptions {
                assume_yes: false,
                ..options
            },
            GenerateOptions::files_only()
        );
    }
}

//! `flart init`: write a default `flart_config.json`.

use tracing::info;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: InitArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let config_path = AppConfig::config_path(global.config.as_ref());

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let json = AppConfig::default().to_json()?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(&config_path, json + "\n")
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    info!(path = %config_path.display(), "Config saved");
    output.success(&format!("Configuration created at {}", config_path.display()))?;
    Ok(())
}

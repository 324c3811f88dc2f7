//! `flart config`: inspect the effective configuration.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => output.raw(&config.to_json()?)?,
        ConfigCommands::Get { key } => output.raw(&config.get(&key)?)?,
        ConfigCommands::Path => {
            let path = AppConfig::config_path(global.config.as_ref());
            let shown = std::path::absolute(&path).unwrap_or(path);
            output.raw(&shown.display().to_string())?;
        }
    }
    Ok(())
}

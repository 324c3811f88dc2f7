//! Interactive menu shown when `flart` runs without a subcommand.

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NewScreen,
    NewModel,
    BuildRunner,
    WatchRunner,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::NewScreen,
        Action::NewModel,
        Action::BuildRunner,
        Action::WatchRunner,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::NewScreen => "New Screen",
            Self::NewModel => "New Model",
            Self::BuildRunner => "Build Runner",
            Self::WatchRunner => "Watch Runner",
        }
    }

    /// Whether the action asks for an entity name next.
    pub fn needs_name(self) -> bool {
        matches!(self, Self::NewScreen | Self::NewModel)
    }
}

#[cfg(feature = "interactive")]
pub fn execute(global: &GlobalArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    use std::io::IsTerminal as _;

    use dialoguer::{Input, Select, theme::ColorfulTheme};
    use flart_core::domain::{CodegenMode, EntityKind};

    use crate::{
        cli::{GenerationFlags, RunnerArgs},
        commands::{generate, runner},
        error::CliError,
    };

    if !std::io::stdin().is_terminal() {
        return Err(CliError::InvalidInput {
            message: "no subcommand given and stdin is not a terminal".into(),
            source: None,
        });
    }

    let theme = ColorfulTheme::default();
    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
    let choice = Select::with_theme(&theme)
        .with_prompt("What do you want to do?")
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(|e| CliError::io("Menu selection failed", e.into()))?
        .ok_or(CliError::Cancelled)?;
    let action = Action::ALL[choice];

    let name = if action.needs_name() {
        Input::<String>::with_theme(&theme)
            .with_prompt("Name")
            .interact_text()
            .map_err(|e| CliError::io("Reading the name failed", e.into()))?
    } else {
        String::new()
    };

    let flags = GenerationFlags::default();
    let provision = RunnerArgs { provision: false };
    match action {
        Action::NewScreen => generate::run(
            EntityKind::Screen,
            &name,
            &config.screen_generation(),
            &flags,
            global,
            config,
            output,
        ),
        Action::NewModel => generate::run(
            EntityKind::Model,
            &name,
            &config.model_generation(),
            &flags,
            global,
            config,
            output,
        ),
        Action::BuildRunner => runner::execute(CodegenMode::Build, provision, config, output),
        Action::WatchRunner => runner::execute(CodegenMode::Watch, provision, config, output),
    }
}

#[cfg(not(feature = "interactive"))]
pub fn execute(_global: &GlobalArgs, _config: &AppConfig, _output: &OutputManager) -> CliResult<()> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_order_and_labels() {
        let labels: Vec<_> = Action::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(
            labels,
            ["New Screen", "New Model", "Build Runner", "Watch Runner"]
        );
    }

    #[test]
    fn only_generators_ask_for_a_name() {
        assert!(Action::NewScreen.needs_name());
        assert!(Action::NewModel.needs_name());
        assert!(!Action::BuildRunner.needs_name());
        assert!(!Action::WatchRunner.needs_name());
    }
}

//! `flart screen`: generate a screen with its bloc or cubit.

use flart_core::domain::EntityKind;

use crate::{
    cli::{GlobalArgs, ScreenArgs},
    commands::generate,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ScreenArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let mut generation = config.screen_generation();
    if let Some(style) = args.style {
        generation = generation.with_serialization(style.into());
    }
    if let Some(state) = args.state {
        generation = generation.with_state_management(state.into());
    }

    generate::run(
        EntityKind::Screen,
        &args.name,
        &generation,
        &args.flags,
        global,
        config,
        output,
    )
}

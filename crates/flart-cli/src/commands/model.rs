//! `flart model`: generate a model, its test and the models barrel entry.

use flart_core::domain::EntityKind;

use crate::{
    cli::{GlobalArgs, ModelArgs},
    commands::generate,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ModelArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let mut generation = config.model_generation();
    if let Some(style) = args.style {
        generation = generation.with_serialization(style.into());
    }

    generate::run(
        EntityKind::Model,
        &args.name,
        &generation,
        &args.flags,
        global,
        config,
        output,
    )
}

//! # flart CLI
//!
//! Flutter scaffolding from the command line.
//!
//! ## Startup sequence
//!
//! 1. Load `.env` and parse CLI arguments (clap handles `--help` / `--version`).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Build the [`OutputManager`].
//! 4. Load configuration (file + env + defaults) for commands that need it.
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                        |
//! |------|--------------------------------|
//! |  0   | Success                        |
//! |  1   | Internal / system error        |
//! |  2   | User / input error, cancelled  |
//! |  3   | Resource not found             |
//! |  4   | Configuration error            |
//! |  5   | `flutter` / `dart` failed      |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use flart_core::domain::CodegenMode;

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here as "errors" with exit code 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global);
    let verbose = cli.global.verbose > 0;
    let colored = !cli.global.no_color;

    // ── 4-6. Dispatch + error handling ───────────────────────────────────
    match run(cli, &output) {
        Ok(()) => {
            info!("flart completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, colored),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, output: &OutputManager) -> CliResult<()> {
    let global = cli.global;
    let load = || AppConfig::load(global.config.as_ref());

    match cli.command {
        Some(Commands::Model(args)) => commands::model::execute(args, &global, &load()?, output),
        Some(Commands::Screen(args)) => commands::screen::execute(args, &global, &load()?, output),
        Some(Commands::Build(args)) => {
            commands::runner::execute(CodegenMode::Build, args, &load()?, output)
        }
        Some(Commands::Watch(args)) => {
            commands::runner::execute(CodegenMode::Watch, args, &load()?, output)
        }
        Some(Commands::Init(args)) => commands::init::execute(args, &global, output),
        Some(Commands::Config(cmd)) => commands::config::execute(cmd, &global, &load()?, output),
        Some(Commands::Completions(args)) => commands::completions::execute(args),
        None => commands::interactive::execute(&global, &load()?, output),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool, colored: bool) -> ExitCode {
    err.log();

    // Colour only when stderr is a TTY (same logic as logging.rs).
    let msg = if colored && std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

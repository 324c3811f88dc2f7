//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use flart_core::domain::{SerializationStyle, StateManagement};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "flart",
    bin_name = "flart",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Flutter scaffolding made instant",
    long_about = "flart generates Flutter models, screens with their bloc or cubit, \
                  tests and barrel files, and drives pub and build_runner for you.",
    after_help = "EXAMPLES:\n\
        \x20 flart model UserProfile\n\
        \x20 flart screen \"home dashboard\" --state cubit --style freezed\n\
        \x20 flart build\n\
        \x20 flart            # interactive menu",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; none opens the interactive menu.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a model class, its test and the models barrel entry.
    #[command(
        visible_alias = "make:model",
        about = "Generate a model",
        after_help = "EXAMPLES:\n\
            \x20 flart model UserProfile\n\
            \x20 flart make:model order_item --style freezed\n\
            \x20 flart model Cart --dry-run"
    )]
    Model(ModelArgs),

    /// Generate a screen with its state container and barrels.
    #[command(
        visible_alias = "make:screen",
        about = "Generate a screen",
        after_help = "EXAMPLES:\n\
            \x20 flart screen \"home dashboard\"\n\
            \x20 flart make:screen Settings --state cubit\n\
            \x20 flart screen Checkout --state bloc --style freezed --yes"
    )]
    Screen(ScreenArgs),

    /// Run build_runner once.
    #[command(
        visible_alias = "build:runner",
        about = "Run build_runner build",
        after_help = "EXAMPLES:\n\
            \x20 flart build\n\
            \x20 flart build:runner --provision"
    )]
    Build(RunnerArgs),

    /// Run build_runner in watch mode.
    #[command(
        visible_alias = "watch:runner",
        about = "Run build_runner watch",
        after_help = "EXAMPLES:\n\
            \x20 flart watch\n\
            \x20 flart watch:runner --provision"
    )]
    Watch(RunnerArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 flart init\n\
            \x20 flart init --force\n\
            \x20 flart --config ci/flart.json init"
    )]
    Init(InitArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 flart config show\n\
            \x20 flart config get screens.useCubit\n\
            \x20 flart config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 flart completions bash > ~/.local/share/bash-completion/completions/flart\n\
            \x20 flart completions zsh  > ~/.zfunc/_flart\n\
            \x20 flart completions fish > ~/.config/fish/completions/flart.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generation ────────────────────────────────────────────────────────────────

/// Switches shared by `model` and `screen`.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerationFlags {
    /// Overwrite existing files without asking.
    #[arg(short = 'y', long = "yes", help = "Overwrite existing files without asking")]
    pub yes: bool,

    /// Preview the files and barrels without writing anything.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,

    /// Do not run `flutter pub add`.
    #[arg(long = "skip-deps", help = "Do not add missing packages")]
    pub skip_deps: bool,

    /// Do not run `dart format` on written files.
    #[arg(long = "skip-format", help = "Do not format generated files")]
    pub skip_format: bool,

    /// Do not run build_runner after a freezed generation.
    #[arg(long = "skip-build", help = "Do not run build_runner afterwards")]
    pub skip_build: bool,
}

/// Arguments for `flart model`.
#[derive(Debug, Args)]
pub struct ModelArgs {
    /// Entity name in any casing, e.g. `UserProfile` or `user profile`.
    #[arg(value_name = "NAME", help = "Model name")]
    pub name: String,

    /// Serialization style; overrides `models.useFreezed`.
    #[arg(long = "style", value_enum, help = "Serialization style")]
    pub style: Option<Style>,

    #[command(flatten)]
    pub flags: GenerationFlags,
}

/// Arguments for `flart screen`.
#[derive(Debug, Args)]
pub struct ScreenArgs {
    /// Entity name in any casing, e.g. `HomeDashboard` or `home dashboard`.
    #[arg(value_name = "NAME", help = "Screen name")]
    pub name: String,

    /// State container; overrides `screens.useCubit`.
    #[arg(long = "state", value_enum, help = "State management")]
    pub state: Option<State>,

    /// State serialization style; overrides `screens.useFreezed`.
    #[arg(long = "style", value_enum, help = "Serialization style")]
    pub style: Option<Style>,

    #[command(flatten)]
    pub flags: GenerationFlags,
}

/// Arguments for `flart build` and `flart watch`.
#[derive(Debug, Args)]
pub struct RunnerArgs {
    /// Add freezed, build_runner and json_serializable first if missing.
    #[arg(long = "provision", help = "Add code generation packages if missing")]
    pub provision: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `flart init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `flart completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `flart config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as JSON.
    Show,
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `models.useFreezed`.
        key: String,
    },
    /// Print the path of the configuration file in use.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Serialization style accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Style {
    /// Hand-written Equatable classes.
    #[value(alias = "equatable")]
    Plain,
    /// Freezed classes completed by build_runner.
    Freezed,
}

impl From<Style> for SerializationStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Plain => Self::Plain,
            Style::Freezed => Self::Generated,
        }
    }
}

/// State management accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum State {
    Bloc,
    Cubit,
}

impl From<State> for StateManagement {
    fn from(state: State) -> Self {
        match state {
            State::Bloc => Self::Bloc,
            State::Cubit => Self::Cubit,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

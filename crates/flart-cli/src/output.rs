//! Output management and formatting.

use std::io;
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;

use flart_core::application::{BarrelOutcome, GenerationReport, ProvisionOutcome};
use flart_core::domain::Dependency;

use crate::cli::GlobalArgs;

/// Writes user-facing lines to stdout, honouring `--quiet` and `--no-color`.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || !console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Unconditional output for machine-readable results (`config get`).
    pub fn raw(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Reports ───────────────────────────────────────────────────────────

    /// Summarise a finished (or dry-run) generation.
    pub fn report(&self, report: &GenerationReport, root: &Path) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let plan = &report.plan;
        if report.dry_run {
            self.header(&format!(
                "Dry run: {} '{}' would write",
                plan.kind(),
                plan.name().type_form()
            ))?;
            for file in plan.files() {
                self.print(&format!("  {}", file.path.as_str()))?;
            }
            for barrel in plan.barrels() {
                self.print(&format!(
                    "  {}/{} += {}",
                    barrel.directory.as_str(),
                    barrel.index_file,
                    barrel.unit
                ))?;
            }
            for dep in plan.dependencies() {
                self.print(&format!("  requires {dep}"))?;
            }
            return Ok(());
        }

        for (dep, outcome) in &report.dependencies {
            self.dependency(dep, *outcome)?;
        }
        for path in &report.written {
            let label = if report.overwritten.contains(path) {
                "overwrote"
            } else {
                "created"
            };
            self.success(&format!("{label} {}", relative(path, root)))?;
        }
        for (index, outcome) in &report.barrels {
            match outcome {
                BarrelOutcome::Created { exports } => self.info(&format!(
                    "indexed {} ({} exports)",
                    relative(index, root),
                    exports.len()
                ))?,
                BarrelOutcome::Appended => {
                    self.info(&format!("updated {}", relative(index, root)))?
                }
                BarrelOutcome::AlreadyExported => {}
            }
        }
        if report.codegen_ran {
            self.info("build_runner finished")?;
        }

        self.success(&format!(
            "{} {} generated",
            capitalize(plan.kind().as_str()),
            plan.name().type_form()
        ))
    }

    pub fn dependency(&self, dep: &Dependency, outcome: ProvisionOutcome) -> io::Result<()> {
        match outcome {
            ProvisionOutcome::Added => self.success(&format!("added {dep}")),
            ProvisionOutcome::AlreadyDeclared => self.print(&format!("  {dep} already declared")),
        }
    }
}

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

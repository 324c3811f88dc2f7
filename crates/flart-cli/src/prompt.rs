//! Overwrite confirmation on the terminal.

use std::io::{self, BufRead};
use std::path::PathBuf;

use console::Term;
use owo_colors::OwoColorize;

use flart_core::{
    application::{ApplicationError, ports::ConfirmationPrompt},
    error::FlartResult,
};

/// Lists the files that would be overwritten on stderr and reads a `y/n`
/// answer from stdin.
pub struct TerminalPrompt {
    term: Term,
    no_color: bool,
}

impl TerminalPrompt {
    pub fn new(no_color: bool) -> Self {
        Self {
            term: Term::stderr(),
            no_color,
        }
    }

    fn ask(&self, existing: &[PathBuf]) -> io::Result<String> {
        let heading = "The following files already exist:";
        if self.no_color {
            self.term.write_line(heading)?;
        } else {
            self.term.write_line(&heading.yellow().bold().to_string())?;
        }
        for path in existing {
            self.term.write_line(&format!("  - {}", path.display()))?;
        }
        self.term.write_str("Do you want to overwrite them? (y/n): ")?;
        self.term.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(answer)
    }
}

impl ConfirmationPrompt for TerminalPrompt {
    fn confirm_overwrite(&self, existing: &[PathBuf]) -> FlartResult<bool> {
        let answer = self
            .ask(existing)
            .map_err(|e| ApplicationError::filesystem("read confirmation", "<stdin>", e))?;
        Ok(parse_confirmation(&answer))
    }
}

/// Only `y` and `yes` (any case, surrounding whitespace ignored) approve.
pub fn parse_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

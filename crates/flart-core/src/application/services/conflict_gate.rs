//! Conflict Gate - finds plan targets that already exist on disk.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{ConfirmationPrompt, Filesystem},
    },
    domain::GenerationPlan,
    error::FlartResult,
};

/// Result of checking a plan against the project tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictReport {
    Clear,
    Blocked { existing: Vec<PathBuf> },
}

impl ConflictReport {
    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Clear)
    }

    pub fn existing(&self) -> &[PathBuf] {
        match self {
            Self::Clear => &[],
            Self::Blocked { existing } => existing,
        }
    }
}

pub struct ConflictGate<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ConflictGate<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Every plan target that already exists, in plan order.
    pub fn check(&self, project_root: &Path, plan: &GenerationPlan) -> ConflictReport {
        let existing: Vec<PathBuf> = plan
            .files()
            .iter()
            .map(|f| f.path.under(project_root))
            .filter(|p| self.filesystem.exists(p))
            .collect();

        if existing.is_empty() {
            ConflictReport::Clear
        } else {
            ConflictReport::Blocked { existing }
        }
    }

    /// Turn a report into a go/no-go decision.
    ///
    /// Asks at most once. A declined (or pre-declined) overwrite is
    /// `UserAborted`; nothing has been written at that point.
    #[instrument(skip_all, fields(conflicts = report.existing().len()))]
    pub fn resolve(
        report: ConflictReport,
        prompt: &dyn ConfirmationPrompt,
        assume_yes: bool,
    ) -> FlartResult<Vec<PathBuf>> {
        let existing = match report {
            ConflictReport::Clear => return Ok(Vec::new()),
            ConflictReport::Blocked { existing } => existing,
        };

        if assume_yes || prompt.confirm_overwrite(&existing)? {
            info!(count = existing.len(), "overwriting existing files");
            return Ok(existing);
        }

        Err(ApplicationError::UserAborted { existing }.into())
    }
}

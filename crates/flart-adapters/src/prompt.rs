//! Non-interactive confirmation prompts.
//!
//! The interactive terminal prompt lives in the CLI crate; these cover
//! scripted runs and tests.

use std::path::PathBuf;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use flart_core::{application::ports::ConfirmationPrompt, error::FlartResult};

/// Always gives the same answer and counts how often it was asked.
#[derive(Debug, Clone)]
pub struct FixedResponse {
    answer: bool,
    asked: Arc<AtomicUsize>,
}

impl FixedResponse {
    pub fn accept() -> Self {
        Self::new(true)
    }

    pub fn decline() -> Self {
        Self::new(false)
    }

    fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Arc::default(),
        }
    }

    pub fn times_asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

impl ConfirmationPrompt for FixedResponse {
    fn confirm_overwrite(&self, _existing: &[PathBuf]) -> FlartResult<bool> {
        self.asked.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer)
    }
}

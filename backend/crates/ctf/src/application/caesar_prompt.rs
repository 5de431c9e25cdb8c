//! Caesar Prompt Use Case

use crate::application::config::CtfConfig;
use crate::domain::caesar::{self, CaesarPrompt};
use crate::domain::catalog::PuzzleKind;
use crate::error::{CtfError, CtfResult};
use std::sync::Arc;

/// Caesar Prompt Use Case
///
/// Recomputed on every request from the caller's wall-clock hour; nothing
/// is stored.
pub struct CaesarPromptUseCase {
    config: Arc<CtfConfig>,
}

impl CaesarPromptUseCase {
    pub fn new(config: Arc<CtfConfig>) -> Self {
        Self { config }
    }

    pub async fn execute(&self, puzzle_id: u32, hour: u32) -> CtfResult<CaesarPrompt> {
        let catalog = self.config.catalog.load().await?;
        let puzzle = catalog
            .get(puzzle_id)
            .ok_or(CtfError::UnknownPuzzle(puzzle_id))?;

        match &puzzle.kind {
            PuzzleKind::TimeShift { phrase, hint } => {
                Ok(caesar::prompt_for_hour(phrase, hint, hour))
            }
            _ => Err(CtfError::NotDynamic(puzzle_id)),
        }
    }
}

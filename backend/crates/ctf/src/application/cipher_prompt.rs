//! Cipher Prompt Use Case

use crate::application::config::CtfConfig;
use crate::domain::catalog::PuzzleKind;
use crate::domain::entities::CipherRecord;
use crate::domain::repository::CipherRepository;
use crate::domain::substitution::SubstitutionMapping;
use crate::error::{CtfError, CtfResult};
use chrono::Utc;
use std::sync::Arc;

/// Cipher Prompt Use Case
pub struct CipherPromptUseCase<C>
where
    C: CipherRepository,
{
    cipher_repo: Arc<C>,
    config: Arc<CtfConfig>,
}

impl<C> CipherPromptUseCase<C>
where
    C: CipherRepository,
{
    pub fn new(cipher_repo: Arc<C>, config: Arc<CtfConfig>) -> Self {
        Self {
            cipher_repo,
            config,
        }
    }

    /// Return the stored cipher for `puzzle_id`, generating it on first use.
    ///
    /// Two concurrent first requests may both generate and save; the last
    /// write wins. Mapping and ciphertext always come from the same
    /// generation, so whichever record survives is self-consistent.
    pub async fn get_or_create(&self, puzzle_id: u32) -> CtfResult<CipherRecord> {
        let catalog = self.config.catalog.load().await?;
        let puzzle = catalog
            .get(puzzle_id)
            .ok_or(CtfError::UnknownPuzzle(puzzle_id))?;

        let PuzzleKind::GeneratedCipher { phrase } = &puzzle.kind else {
            return Err(CtfError::NotDynamic(puzzle_id));
        };

        let mut ciphers = self.cipher_repo.load_ciphers().await?;
        if let Some(record) = ciphers.get(&puzzle_id) {
            return Ok(record.clone());
        }

        let mapping = SubstitutionMapping::generate(&mut rand::rng());
        let record = CipherRecord::new(mapping, phrase, Utc::now());
        ciphers.insert(puzzle_id, record.clone());
        self.cipher_repo.save_ciphers(&ciphers).await?;

        tracing::info!(puzzle_id, "Generated substitution cipher");

        Ok(record)
    }
}

//! Check Answer Use Case

use crate::application::config::CtfConfig;
use crate::domain::repository::CipherRepository;
use crate::domain::validator::{self, Validation};
use crate::error::CtfResult;
use std::sync::Arc;

/// Check Answer Use Case
///
/// Read-only: never touches player progress. Storage failures propagate
/// instead of reading as "incorrect".
pub struct CheckAnswerUseCase<C>
where
    C: CipherRepository,
{
    cipher_repo: Arc<C>,
    config: Arc<CtfConfig>,
}

impl<C> CheckAnswerUseCase<C>
where
    C: CipherRepository,
{
    pub fn new(cipher_repo: Arc<C>, config: Arc<CtfConfig>) -> Self {
        Self {
            cipher_repo,
            config,
        }
    }

    pub async fn execute(&self, puzzle_id: u32, answer: &str) -> CtfResult<Validation> {
        let catalog = self.config.catalog.load().await?;

        let cipher = match catalog.get(puzzle_id) {
            Some(puzzle) if validator::needs_cipher(puzzle) => {
                self.cipher_repo.load_ciphers().await?.remove(&puzzle_id)
            }
            _ => None,
        };

        let validation = validator::validate(&catalog, puzzle_id, answer, cipher.as_ref());

        tracing::debug!(
            puzzle_id,
            correct = validation.correct,
            "Checked answer"
        );

        Ok(validation)
    }
}

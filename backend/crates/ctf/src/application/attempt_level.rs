//! Attempt Level Use Case
//!
//! Check an answer and, only when it is correct, move the player to the
//! next level. Wrong answers leave the stored record untouched.

use crate::application::check_answer::CheckAnswerUseCase;
use crate::application::config::CtfConfig;
use crate::application::player_profile::PlayerProfileUseCase;
use crate::domain::repository::{CipherRepository, PlayerRepository};
use crate::error::CtfResult;
use kernel::id::PlayerId;
use std::sync::Arc;

/// Output DTO for a level attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptOutput {
    pub correct: bool,
    pub current_level: u32,
    pub total_levels: u32,
    pub completed: bool,
}

/// Attempt Level Use Case
pub struct AttemptLevelUseCase<P, C>
where
    P: PlayerRepository,
    C: CipherRepository,
{
    player_repo: Arc<P>,
    cipher_repo: Arc<C>,
    config: Arc<CtfConfig>,
}

impl<P, C> AttemptLevelUseCase<P, C>
where
    P: PlayerRepository,
    C: CipherRepository,
{
    pub fn new(player_repo: Arc<P>, cipher_repo: Arc<C>, config: Arc<CtfConfig>) -> Self {
        Self {
            player_repo,
            cipher_repo,
            config,
        }
    }

    pub async fn execute(
        &self,
        player_id: &PlayerId,
        puzzle_id: u32,
        answer: &str,
    ) -> CtfResult<AttemptOutput> {
        let validation = CheckAnswerUseCase::new(self.cipher_repo.clone(), self.config.clone())
            .execute(puzzle_id, answer)
            .await?;

        let profile = PlayerProfileUseCase::new(self.player_repo.clone(), self.config.clone());
        let current_level = if validation.correct {
            profile
                .advance(player_id, i64::from(puzzle_id) + 1)
                .await?
        } else {
            profile.get(player_id).await?.current_level
        };

        tracing::info!(
            player_id = %player_id,
            puzzle_id,
            correct = validation.correct,
            level = current_level,
            "Level attempt"
        );

        Ok(AttemptOutput {
            correct: validation.correct,
            current_level,
            total_levels: validation.total_levels,
            completed: current_level > validation.total_levels,
        })
    }
}

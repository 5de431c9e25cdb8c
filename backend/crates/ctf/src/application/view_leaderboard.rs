//! View Leaderboard Use Case

use crate::application::config::CtfConfig;
use crate::domain::leaderboard::{self, RankedPlayer};
use crate::domain::repository::PlayerRepository;
use crate::error::CtfResult;
use std::sync::Arc;

/// View Leaderboard Use Case
pub struct ViewLeaderboardUseCase<P>
where
    P: PlayerRepository,
{
    player_repo: Arc<P>,
    config: Arc<CtfConfig>,
}

impl<P> ViewLeaderboardUseCase<P>
where
    P: PlayerRepository,
{
    pub fn new(player_repo: Arc<P>, config: Arc<CtfConfig>) -> Self {
        Self {
            player_repo,
            config,
        }
    }

    pub async fn execute(&self) -> CtfResult<Vec<RankedPlayer>> {
        let catalog = self.config.catalog.load().await?;
        let players = self.player_repo.load_players().await?;
        Ok(leaderboard::rank(&players, catalog.total_levels()))
    }
}

//! Admin Players Use Case
//!
//! Full CRUD over player records. Authorization happens in the middleware
//! before any of this runs.

use crate::application::config::CtfConfig;
use crate::domain::entities::{PlayerBook, PlayerRecord};
use crate::domain::progress::{self, FIRST_LEVEL};
use crate::domain::repository::PlayerRepository;
use crate::error::{CtfError, CtfResult};
use chrono::Utc;
use kernel::id::PlayerId;
use std::sync::Arc;

/// Name given to players created by an admin without one
pub const DEFAULT_PLAYER_NAME: &str = "Jugador";

/// Input DTO for an admin upsert
#[derive(Debug, Clone)]
pub struct UpsertPlayerInput {
    pub player_id: PlayerId,
    pub name: Option<String>,
    pub current_level: Option<i64>,
}

/// Admin Players Use Case
pub struct AdminPlayersUseCase<P>
where
    P: PlayerRepository,
{
    player_repo: Arc<P>,
    config: Arc<CtfConfig>,
}

impl<P> AdminPlayersUseCase<P>
where
    P: PlayerRepository,
{
    pub fn new(player_repo: Arc<P>, config: Arc<CtfConfig>) -> Self {
        Self {
            player_repo,
            config,
        }
    }

    pub async fn list(&self) -> CtfResult<PlayerBook> {
        self.player_repo.load_players().await
    }

    /// Create or replace a record. Missing fields fall back to the stored
    /// values, then to `Jugador` and level 1. Levels are clamped like any
    /// other write.
    pub async fn upsert(&self, input: UpsertPlayerInput) -> CtfResult<PlayerRecord> {
        let catalog = self.config.catalog.load().await?;
        let mut players = self.player_repo.load_players().await?;
        let existing = players.get(&input.player_id);

        let name = input
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .or_else(|| {
                existing
                    .and_then(|r| r.display_name())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string());

        let candidate = input
            .current_level
            .or_else(|| existing.map(|r| i64::from(r.current_level)))
            .unwrap_or(i64::from(FIRST_LEVEL));
        let current_level = progress::clamp_level(candidate, catalog.total_levels());

        let record = PlayerRecord::new(name, current_level, Utc::now());
        players.insert(input.player_id.clone(), record.clone());
        self.player_repo.save_players(&players).await?;

        tracing::info!(
            player_id = %input.player_id,
            level = current_level,
            "Admin upserted player"
        );

        Ok(record)
    }

    pub async fn delete(&self, player_id: &PlayerId) -> CtfResult<()> {
        let mut players = self.player_repo.load_players().await?;
        if players.remove(player_id).is_none() {
            return Err(CtfError::PlayerNotFound(player_id.to_string()));
        }
        self.player_repo.save_players(&players).await?;

        tracing::info!(player_id = %player_id, "Admin deleted player");
        Ok(())
    }
}

//! Player Profile Use Case
//!
//! Read, name and advance the calling player's record.

use crate::application::config::CtfConfig;
use crate::domain::entities::PlayerRecord;
use crate::domain::progress;
use crate::domain::repository::PlayerRepository;
use crate::error::{CtfError, CtfResult};
use chrono::Utc;
use kernel::id::PlayerId;
use std::sync::Arc;

/// Output DTO for reading a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileOutput {
    pub player_id: PlayerId,
    pub name: Option<String>,
    pub current_level: u32,
    pub total_levels: u32,
}

/// Player Profile Use Case
pub struct PlayerProfileUseCase<P>
where
    P: PlayerRepository,
{
    player_repo: Arc<P>,
    config: Arc<CtfConfig>,
}

impl<P> PlayerProfileUseCase<P>
where
    P: PlayerRepository,
{
    pub fn new(player_repo: Arc<P>, config: Arc<CtfConfig>) -> Self {
        Self {
            player_repo,
            config,
        }
    }

    /// Unknown players read as level 1 with no name
    pub async fn get(&self, player_id: &PlayerId) -> CtfResult<ProfileOutput> {
        let catalog = self.config.catalog.load().await?;
        let players = self.player_repo.load_players().await?;
        let record = players.get(player_id);

        Ok(ProfileOutput {
            player_id: player_id.clone(),
            name: record.and_then(|r| r.display_name()).map(str::to_string),
            current_level: progress::current_level(record, catalog.total_levels()),
            total_levels: catalog.total_levels(),
        })
    }

    /// Set the display name, creating the record if needed.
    ///
    /// `level`, when given, goes through the progress clamp; otherwise the
    /// stored level (or 1) is kept.
    pub async fn set_name(
        &self,
        player_id: &PlayerId,
        name: &str,
        level: Option<i64>,
    ) -> CtfResult<PlayerRecord> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CtfError::InvalidField {
                field: "name",
                expected: "a non-empty string",
            });
        }

        let catalog = self.config.catalog.load().await?;
        let mut players = self.player_repo.load_players().await?;
        let stored = players.get(player_id).map(|r| r.current_level);

        let current_level = match level {
            Some(candidate) => progress::next_level(
                stored,
                candidate,
                catalog.total_levels(),
                self.config.advance_policy,
            ),
            None => progress::current_level(players.get(player_id), catalog.total_levels()),
        };

        let record = PlayerRecord::new(name, current_level, Utc::now());
        players.insert(player_id.clone(), record.clone());
        self.player_repo.save_players(&players).await?;

        tracing::info!(
            player_id = %player_id,
            name = %record.name,
            level = record.current_level,
            "Player name set"
        );

        Ok(record)
    }

    /// Move the progress cursor to `candidate`, clamped to `[1, N + 1]`.
    /// Creates an unnamed record when the player has none.
    pub async fn advance(&self, player_id: &PlayerId, candidate: i64) -> CtfResult<u32> {
        let catalog = self.config.catalog.load().await?;
        let mut players = self.player_repo.load_players().await?;
        let now = Utc::now();

        let stored = players.get(player_id).map(|r| r.current_level);
        let level = progress::next_level(
            stored,
            candidate,
            catalog.total_levels(),
            self.config.advance_policy,
        );

        players
            .entry(player_id.clone())
            .and_modify(|record| {
                record.current_level = level;
                record.touch(now);
            })
            .or_insert_with(|| PlayerRecord::new(String::new(), level, now));
        self.player_repo.save_players(&players).await?;

        tracing::info!(
            player_id = %player_id,
            candidate,
            level,
            "Player progress updated"
        );

        Ok(level)
    }
}

//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::PlayerId;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::PuzzleDefinition;
use crate::domain::entities::{PlayerBook, PlayerRecord};
use crate::domain::leaderboard::RankedPlayer;
use crate::domain::progress::LevelAccess;
use crate::domain::substitution::SubstitutionMapping;

/// Catalog entry without its answer
#[derive(Debug, Clone, Serialize)]
pub struct PublicPuzzle {
    pub id: u32,
    pub title: String,
    pub prompt: String,
    pub hint: Option<String>,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyphs: Option<String>,
}

impl From<&PuzzleDefinition> for PublicPuzzle {
    fn from(puzzle: &PuzzleDefinition) -> Self {
        Self {
            id: puzzle.id,
            title: puzzle.title.clone(),
            prompt: puzzle.prompt.clone(),
            hint: puzzle.hint.clone(),
            kind: puzzle.kind.to_string(),
            glyphs: puzzle.glyphs.clone(),
        }
    }
}

/// Response for GET /api/puzzle-catalog
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub puzzles: Vec<PublicPuzzle>,
    pub total_levels: u32,
}

/// Response for POST /api/check
#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub correct: bool,
}

/// Response for GET /api/puzzle/{id}
#[derive(Debug, Clone, Serialize)]
pub struct CaesarPromptResponse {
    pub prompt: String,
    pub hint: String,
    pub shift: u32,
}

/// Response for GET /api/puzzle/{id}/cipher
#[derive(Debug, Clone, Serialize)]
pub struct CipherResponse {
    pub mapping: SubstitutionMapping,
    pub answer: String,
}

/// Response for GET /api/player
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub player_id: PlayerId,
    pub name: Option<String>,
    pub current_level: u32,
    pub total_levels: u32,
}

/// Response for POST /api/player
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetNameResponse {
    pub success: bool,
    pub player_id: PlayerId,
    pub name: String,
    pub current_level: u32,
}

/// Response for PATCH /api/player
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceResponse {
    pub success: bool,
    pub current_level: u32,
}

/// Response for POST /api/player/attempt
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptResponse {
    pub correct: bool,
    pub current_level: u32,
    pub total_levels: u32,
    pub completed: bool,
}

/// Response for GET /api/player/level/{id}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelAccessResponse {
    pub access: LevelAccess,
    pub current_level: u32,
    pub total_levels: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub current_level: u32,
    pub last_updated: DateTime<Utc>,
}

impl From<RankedPlayer> for LeaderboardEntry {
    fn from(player: RankedPlayer) -> Self {
        Self {
            player_id: player.player_id,
            name: player.name,
            current_level: player.current_level,
            last_updated: player.last_updated,
        }
    }
}

/// Response for GET /api/players
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardResponse {
    pub players: Vec<LeaderboardEntry>,
}

/// Response for GET /api/admin/players
#[derive(Debug, Clone, Serialize)]
pub struct AdminPlayersResponse {
    pub players: PlayerBook,
}

/// Response for POST /api/admin/players
#[derive(Debug, Clone, Serialize)]
pub struct AdminUpsertResponse {
    pub success: bool,
    pub player: PlayerRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Query for DELETE /api/admin/players
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePlayerQuery {
    #[serde(default)]
    pub player_id: Option<String>,
}

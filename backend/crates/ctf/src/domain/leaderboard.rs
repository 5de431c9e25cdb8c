//! Leaderboard ranking

use chrono::{DateTime, Utc};
use kernel::id::PlayerId;

use crate::domain::entities::PlayerBook;
use crate::domain::progress;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPlayer {
    pub player_id: PlayerId,
    pub name: String,
    pub current_level: u32,
    pub last_updated: DateTime<Utc>,
}

/// Named players by level descending, then earliest update first.
/// Player id breaks exact ties so the order is stable across reads.
/// Levels are clamped into `[1, N + 1]` before ranking.
pub fn rank(players: &PlayerBook, total_levels: u32) -> Vec<RankedPlayer> {
    let mut ranked: Vec<RankedPlayer> = players
        .iter()
        .filter_map(|(id, record)| {
            record.display_name().map(|name| RankedPlayer {
                player_id: id.clone(),
                name: name.to_string(),
                current_level: progress::current_level(Some(record), total_levels),
                last_updated: record.last_updated,
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.current_level
            .cmp(&a.current_level)
            .then(a.last_updated.cmp(&b.last_updated))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    ranked
}

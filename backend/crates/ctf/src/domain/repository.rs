//! Repository Traits
//!
//! The storage port. Each map is read and written whole; there is no
//! partial update and no compare-and-swap, so concurrent writers race
//! under last-write-wins.

use crate::domain::entities::{CipherBook, PlayerBook};
use crate::error::CtfResult;

/// Player record repository trait
#[trait_variant::make(PlayerRepository: Send)]
pub trait LocalPlayerRepository {
    /// Load every player; a missing map reads as empty
    async fn load_players(&self) -> CtfResult<PlayerBook>;

    /// Replace the whole player map
    async fn save_players(&self, players: &PlayerBook) -> CtfResult<()>;
}

/// Cipher record repository trait
#[trait_variant::make(CipherRepository: Send)]
pub trait LocalCipherRepository {
    /// Load every generated cipher; a missing map reads as empty
    async fn load_ciphers(&self) -> CtfResult<CipherBook>;

    /// Replace the whole cipher map
    async fn save_ciphers(&self, ciphers: &CipherBook) -> CtfResult<()>;
}

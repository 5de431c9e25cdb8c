//! In-memory Repository Implementation
//!
//! Process-local maps. Used by tests and for throwaway local runs.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::{CipherBook, PlayerBook};
use crate::domain::repository::{CipherRepository, PlayerRepository};
use crate::error::CtfResult;

#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    players: Arc<RwLock<PlayerBook>>,
    ciphers: Arc<RwLock<CipherBook>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerRepository for MemoryRecordStore {
    async fn load_players(&self) -> CtfResult<PlayerBook> {
        Ok(self.players.read().await.clone())
    }

    async fn save_players(&self, players: &PlayerBook) -> CtfResult<()> {
        *self.players.write().await = players.clone();
        Ok(())
    }
}

impl CipherRepository for MemoryRecordStore {
    async fn load_ciphers(&self) -> CtfResult<CipherBook> {
        Ok(self.ciphers.read().await.clone())
    }

    async fn save_ciphers(&self, ciphers: &CipherBook) -> CtfResult<()> {
        *self.ciphers.write().await = ciphers.clone();
        Ok(())
    }
}

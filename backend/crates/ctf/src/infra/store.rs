//! Record store selection
//!
//! One storage port, three interchangeable backends picked at start-up.
//! Use cases only see the repository traits.

use std::path::PathBuf;

use crate::domain::entities::{CipherBook, PlayerBook};
use crate::domain::repository::{CipherRepository, PlayerRepository};
use crate::error::CtfResult;
use crate::infra::fs::FsRecordStore;
use crate::infra::memory::MemoryRecordStore;
use crate::infra::redis::RedisRecordStore;

#[derive(Clone)]
pub enum RecordStore {
    Fs(FsRecordStore),
    Redis(RedisRecordStore),
    Memory(MemoryRecordStore),
}

impl RecordStore {
    /// Redis when a URL is configured, JSON files in `data_dir` otherwise
    pub async fn connect(redis_url: Option<&str>, data_dir: PathBuf) -> CtfResult<Self> {
        match redis_url {
            Some(url) => {
                let store = RedisRecordStore::connect(url).await?;
                tracing::info!("Using Redis record store");
                Ok(Self::Redis(store))
            }
            None => {
                tracing::info!(dir = %data_dir.display(), "Using filesystem record store");
                Ok(Self::Fs(FsRecordStore::new(data_dir)))
            }
        }
    }

    pub fn memory() -> Self {
        Self::Memory(MemoryRecordStore::new())
    }

    pub fn backend(&self) -> &'static str {
        match self {
            Self::Fs(_) => "filesystem",
            Self::Redis(_) => "redis",
            Self::Memory(_) => "memory",
        }
    }
}

impl PlayerRepository for RecordStore {
    async fn load_players(&self) -> CtfResult<PlayerBook> {
        match self {
            Self::Fs(store) => store.load_players().await,
            Self::Redis(store) => store.load_players().await,
            Self::Memory(store) => store.load_players().await,
        }
    }

    async fn save_players(&self, players: &PlayerBook) -> CtfResult<()> {
        match self {
            Self::Fs(store) => store.save_players(players).await,
            Self::Redis(store) => store.save_players(players).await,
            Self::Memory(store) => store.save_players(players).await,
        }
    }
}

impl CipherRepository for RecordStore {
    async fn load_ciphers(&self) -> CtfResult<CipherBook> {
        match self {
            Self::Fs(store) => store.load_ciphers().await,
            Self::Redis(store) => store.load_ciphers().await,
            Self::Memory(store) => store.load_ciphers().await,
        }
    }

    async fn save_ciphers(&self, ciphers: &CipherBook) -> CtfResult<()> {
        match self {
            Self::Fs(store) => store.save_ciphers(ciphers).await,
            Self::Redis(store) => store.save_ciphers(ciphers).await,
            Self::Memory(store) => store.save_ciphers(ciphers).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PlayerRecord;
    use chrono::Utc;
    use kernel::id::PlayerId;

    #[tokio::test]
    async fn test_without_redis_url_uses_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::connect(None, dir.path().to_path_buf())
            .await
            .unwrap();
        assert_eq!(store.backend(), "filesystem");

        let mut players = PlayerBook::new();
        players.insert(
            PlayerId::parse("p").unwrap(),
            PlayerRecord::new("", 2, Utc::now()),
        );
        store.save_players(&players).await.unwrap();
        assert!(dir.path().join("players.json").exists());
        assert_eq!(store.load_players().await.unwrap(), players);
    }

    #[tokio::test]
    async fn test_memory_store_starts_empty() {
        let store = RecordStore::memory();
        assert_eq!(store.backend(), "memory");
        assert!(store.load_players().await.unwrap().is_empty());
        assert!(store.load_ciphers().await.unwrap().is_empty());
    }
}

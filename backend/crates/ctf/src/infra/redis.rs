//! Redis Repository Implementation
//!
//! Keys `players` and `ciphers`, each holding the whole map as one JSON
//! string. A missing key reads as an empty map.

use std::time::Duration;

use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::entities::{CipherBook, PlayerBook};
use crate::domain::repository::{CipherRepository, PlayerRepository};
use crate::error::{CtfError, CtfResult};

const PLAYERS_KEY: &str = "players";
const CIPHERS_KEY: &str = "ciphers";

/// Redis-backed repository
#[derive(Clone)]
pub struct RedisRecordStore {
    connection: ConnectionManager,
}

impl RedisRecordStore {
    pub async fn connect(redis_url: &str) -> CtfResult<Self> {
        let config = ConnectionManagerConfig::new()
            .set_number_of_retries(1)
            .set_connection_timeout(Duration::from_millis(500));

        let client = Client::open(redis_url)?;
        let connection = client.get_connection_manager_with_config(config).await?;

        Ok(Self { connection })
    }

    async fn read_map<T>(&self, key: &str) -> CtfResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let mut connection = self.connection.clone();
        let raw: Option<String> = connection.get(key).await?;
        match raw {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                tracing::error!(key, error = %e, "Malformed record in Redis");
                CtfError::from(e)
            }),
            None => Ok(T::default()),
        }
    }

    async fn write_map<T>(&self, key: &str, value: &T) -> CtfResult<()>
    where
        T: Serialize + Sync,
    {
        let json = serde_json::to_string(value)?;
        let mut connection = self.connection.clone();
        let _: () = connection.set(key, json).await?;
        Ok(())
    }
}

impl PlayerRepository for RedisRecordStore {
    async fn load_players(&self) -> CtfResult<PlayerBook> {
        self.read_map(PLAYERS_KEY).await
    }

    async fn save_players(&self, players: &PlayerBook) -> CtfResult<()> {
        self.write_map(PLAYERS_KEY, players).await
    }
}

impl CipherRepository for RedisRecordStore {
    async fn load_ciphers(&self) -> CtfResult<CipherBook> {
        self.read_map(CIPHERS_KEY).await
    }

    async fn save_ciphers(&self, ciphers: &CipherBook) -> CtfResult<()> {
        self.write_map(CIPHERS_KEY, ciphers).await
    }
}

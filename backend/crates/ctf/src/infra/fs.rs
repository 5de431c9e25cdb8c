//! Filesystem Repository Implementation
//!
//! `players.json` and `ciphers.json` inside a data directory. A missing file
//! reads as an empty map; writes land in a temp file that is then renamed
//! over the target, so a reader never sees a half-written file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::entities::{CipherBook, PlayerBook};
use crate::domain::repository::{CipherRepository, PlayerRepository};
use crate::error::{CtfError, CtfResult};

const PLAYERS_FILE: &str = "players.json";
const CIPHERS_FILE: &str = "ciphers.json";

/// JSON-file-backed repository
#[derive(Debug, Clone)]
pub struct FsRecordStore {
    dir: PathBuf,
}

impl FsRecordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read_map<T>(&self, file: &str) -> CtfResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.dir.join(file);
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(T::default()),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                tracing::error!(path = %path.display(), error = %e, "Malformed record file");
                CtfError::from(e)
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_map<T>(&self, file: &str, value: &T) -> CtfResult<()>
    where
        T: Serialize + Sync,
    {
        tokio::fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_vec_pretty(value)?;

        let path = self.dir.join(file);
        let tmp = self.dir.join(format!(
            ".{file}.{}.tmp",
            platform::crypto::random_base36(8)
        ));
        tokio::fs::write(&tmp, json).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        tracing::debug!(path = %path.display(), "Wrote record file");
        Ok(())
    }
}

impl PlayerRepository for FsRecordStore {
    async fn load_players(&self) -> CtfResult<PlayerBook> {
        self.read_map(PLAYERS_FILE).await
    }

    async fn save_players(&self, players: &PlayerBook) -> CtfResult<()> {
        self.write_map(PLAYERS_FILE, players).await
    }
}

impl CipherRepository for FsRecordStore {
    async fn load_ciphers(&self) -> CtfResult<CipherBook> {
        self.read_map(CIPHERS_FILE).await
    }

    async fn save_ciphers(&self, ciphers: &CipherBook) -> CtfResult<()> {
        self.write_map(CIPHERS_FILE, ciphers).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PlayerRecord;
    use chrono::Utc;
    use kernel::id::PlayerId;

    #[tokio::test]
    async fn test_missing_files_read_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsRecordStore::new(dir.path().join("not-yet"));
        assert!(store.load_players().await.unwrap().is_empty());
        assert!(store.load_ciphers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsRecordStore::new(dir.path().join("data"));

        let mut players = PlayerBook::new();
        players.insert(
            PlayerId::parse("player-1-abc").unwrap(),
            PlayerRecord::new("Ana", 3, Utc::now()),
        );
        store.save_players(&players).await.unwrap();

        assert_eq!(store.load_players().await.unwrap(), players);
        assert!(dir.path().join("data").join(PLAYERS_FILE).exists());

        // no temp files left behind
        let mut entries = tokio::fs::read_dir(store.dir()).await.unwrap();
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        assert_eq!(names, vec![PLAYERS_FILE.to_string()]);
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join(PLAYERS_FILE), "{ not json")
            .await
            .unwrap();
        let store = FsRecordStore::new(dir.path());
        let err = store.load_players().await.unwrap_err();
        assert!(matches!(err, CtfError::MalformedRecord(_)));
        assert_eq!(err.status_code(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_schema_violation_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(
            dir.path().join(PLAYERS_FILE),
            r#"{"player-1":{"name":"Ana","currentLevel":"3"}}"#,
        )
        .await
        .unwrap();
        let store = FsRecordStore::new(dir.path());
        assert!(store.load_players().await.is_err());
    }
}

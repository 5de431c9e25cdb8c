//! Puzzle catalog loading

use std::path::PathBuf;

use crate::domain::catalog::PuzzleCatalog;
use crate::error::{CtfError, CtfResult};

/// Where the catalog comes from. Read on every request, so an edited file
/// takes effect without a restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// Catalog compiled into the binary
    #[default]
    Bundled,
    /// JSON file on disk
    File(PathBuf),
}

impl CatalogSource {
    pub async fn load(&self) -> CtfResult<PuzzleCatalog> {
        match self {
            CatalogSource::Bundled => PuzzleCatalog::bundled(),
            CatalogSource::File(path) => {
                let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
                    CtfError::Catalog(format!("cannot read {}: {e}", path.display()))
                })?;
                PuzzleCatalog::from_json(&raw)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bundled_loads() {
        let catalog = CatalogSource::Bundled.load().await.unwrap();
        assert_eq!(catalog.total_levels(), 9);
    }

    #[tokio::test]
    async fn test_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puzzles.json");
        tokio::fs::write(
            &path,
            r#"[{"id":2,"title":"b","prompt":"?","answer":"dos"},{"id":1,"title":"a","prompt":"?","answer":"uno"}]"#,
        )
        .await
        .unwrap();

        let catalog = CatalogSource::File(path).load().await.unwrap();
        assert_eq!(catalog.total_levels(), 2);
        assert_eq!(catalog.get(1).unwrap().answer, "uno");
    }

    #[tokio::test]
    async fn test_missing_file_is_catalog_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogSource::File(dir.path().join("nope.json"))
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, CtfError::Catalog(_)));
    }
}

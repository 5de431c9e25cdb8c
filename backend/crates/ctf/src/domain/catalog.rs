//! Puzzle Catalog
//!
//! Static ordered list of level definitions. Each entry carries a
//! [`PuzzleKind`] resolved once at parse time, so the validator never has to
//! compare ids to decide which rule applies.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::{CtfError, CtfResult};

/// Catalog shipped inside the binary
pub const BUNDLED_CATALOG: &str = include_str!("../../assets/puzzles.json");

/// How a level decides whether an answer is correct
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PuzzleKind {
    /// Trimmed, case-folded equality with the catalog answer
    #[default]
    #[display("standard")]
    Standard,
    /// Caesar prompt keyed by the hour; the answer is always `phrase`
    #[display("time_shift")]
    TimeShift { phrase: String, hint: String },
    /// Any of several spellings of the same value (e.g. `pi` and `π`)
    #[display("symbolic_alias")]
    SymbolicAlias { aliases: Vec<String> },
    /// Game resolved in the browser; the server trusts the client's win
    #[display("client_adjudicated")]
    ClientAdjudicated,
    /// Substitution cipher generated once and stored; `phrase` is the plaintext
    #[display("generated_cipher")]
    GeneratedCipher { phrase: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    pub id: u32,
    pub title: String,
    pub prompt: String,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub kind: PuzzleKind,
    /// Text rendered by a symbol widget (pigpen font) instead of shown verbatim
    #[serde(default)]
    pub glyphs: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PuzzleCatalog {
    puzzles: Vec<PuzzleDefinition>,
}

impl PuzzleCatalog {
    /// Parse and validate a catalog.
    ///
    /// Ids must be exactly `1..=N` once sorted, since progression moves from
    /// `id` to `id + 1`.
    pub fn from_json(raw: &str) -> CtfResult<Self> {
        let puzzles: Vec<PuzzleDefinition> =
            serde_json::from_str(raw).map_err(|e| CtfError::Catalog(e.to_string()))?;
        Self::new(puzzles)
    }

    pub fn new(mut puzzles: Vec<PuzzleDefinition>) -> CtfResult<Self> {
        if puzzles.is_empty() {
            return Err(CtfError::Catalog("catalog has no puzzles".into()));
        }
        puzzles.sort_by_key(|p| p.id);
        for (index, puzzle) in puzzles.iter().enumerate() {
            let expected = index as u32 + 1;
            if puzzle.id != expected {
                return Err(CtfError::Catalog(format!(
                    "puzzle ids must be 1..={} without gaps or duplicates, found {} at position {}",
                    puzzles.len(),
                    puzzle.id,
                    expected
                )));
            }
        }
        Ok(Self { puzzles })
    }

    pub fn bundled() -> CtfResult<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn get(&self, id: u32) -> Option<&PuzzleDefinition> {
        // ids are 1-based and contiguous
        id.checked_sub(1)
            .and_then(|index| self.puzzles.get(index as usize))
    }

    /// Total level count `N`
    pub fn total_levels(&self) -> u32 {
        self.puzzles.len() as u32
    }

    /// Level value `N + 1` meaning "finished every puzzle"
    pub fn completed_level(&self) -> u32 {
        self.total_levels() + 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &PuzzleDefinition> {
        self.puzzles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(id: u32) -> PuzzleDefinition {
        PuzzleDefinition {
            id,
            title: format!("Nivel {id}"),
            prompt: "?".into(),
            hint: None,
            answer: "x".into(),
            kind: PuzzleKind::Standard,
            glyphs: None,
        }
    }

    #[test]
    fn test_bundled_catalog_is_valid() {
        let catalog = PuzzleCatalog::bundled().unwrap();
        assert_eq!(catalog.total_levels(), 9);
        assert_eq!(catalog.completed_level(), 10);
        assert!(matches!(
            catalog.get(3).unwrap().kind,
            PuzzleKind::TimeShift { .. }
        ));
        assert!(matches!(
            catalog.get(9).unwrap().kind,
            PuzzleKind::GeneratedCipher { .. }
        ));
    }

    #[test]
    fn test_sorted_on_load() {
        let catalog = PuzzleCatalog::new(vec![puzzle(2), puzzle(1), puzzle(3)]).unwrap();
        let ids: Vec<u32> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog.get(2).unwrap().id, 2);
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(4).is_none());
    }

    #[test]
    fn test_rejects_duplicates_and_gaps() {
        assert!(PuzzleCatalog::new(vec![puzzle(1), puzzle(1)]).is_err());
        assert!(PuzzleCatalog::new(vec![puzzle(1), puzzle(3)]).is_err());
        assert!(PuzzleCatalog::new(vec![]).is_err());
    }

    #[test]
    fn test_kind_defaults_to_standard() {
        let catalog =
            PuzzleCatalog::from_json(r#"[{"id":1,"title":"t","prompt":"p","answer":"a"}]"#)
                .unwrap();
        assert_eq!(catalog.get(1).unwrap().kind, PuzzleKind::Standard);
        assert_eq!(catalog.get(1).unwrap().kind.to_string(), "standard");
    }

    #[test]
    fn test_tagged_kind_parsing() {
        let raw = r#"[{"id":1,"title":"t","prompt":"p","kind":{"type":"symbolic_alias","aliases":["pi","π"]}}]"#;
        let catalog = PuzzleCatalog::from_json(raw).unwrap();
        assert_eq!(
            catalog.get(1).unwrap().kind,
            PuzzleKind::SymbolicAlias {
                aliases: vec!["pi".into(), "π".into()]
            }
        );
    }
}

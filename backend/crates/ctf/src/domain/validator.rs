//! Answer Validator
//!
//! Decides correctness from the puzzle kind alone. Storage lookups happen in
//! the caller; this module only sees the records it is handed.

use crate::domain::answer::answers_match;
use crate::domain::catalog::{PuzzleCatalog, PuzzleDefinition, PuzzleKind};
use crate::domain::entities::CipherRecord;

/// Result of checking one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    pub correct: bool,
    pub total_levels: u32,
}

/// Whether judging this puzzle requires its stored cipher record
pub fn needs_cipher(puzzle: &PuzzleDefinition) -> bool {
    matches!(puzzle.kind, PuzzleKind::GeneratedCipher { .. })
}

/// Judge a submission against a known puzzle
pub fn judge(puzzle: &PuzzleDefinition, submitted: &str, cipher: Option<&CipherRecord>) -> bool {
    match &puzzle.kind {
        PuzzleKind::Standard => answers_match(submitted, &puzzle.answer),
        // Fixed phrase; the shift shown at prompt time is irrelevant here
        PuzzleKind::TimeShift { phrase, .. } => answers_match(submitted, phrase),
        PuzzleKind::SymbolicAlias { aliases } => {
            (!puzzle.answer.is_empty() && answers_match(submitted, &puzzle.answer))
                || aliases.iter().any(|alias| answers_match(submitted, alias))
        }
        PuzzleKind::ClientAdjudicated => true,
        PuzzleKind::GeneratedCipher { .. } => {
            cipher.is_some_and(|record| answers_match(submitted, &record.plaintext()))
        }
    }
}

/// Validate `submitted` for puzzle `id`; unknown ids are never correct
pub fn validate(
    catalog: &PuzzleCatalog,
    id: u32,
    submitted: &str,
    cipher: Option<&CipherRecord>,
) -> Validation {
    let correct = catalog
        .get(id)
        .is_some_and(|puzzle| judge(puzzle, submitted, cipher));
    Validation {
        correct,
        total_levels: catalog.total_levels(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::substitution::SubstitutionMapping;
    use chrono::Utc;

    fn bundled() -> PuzzleCatalog {
        PuzzleCatalog::bundled().unwrap()
    }

    #[test]
    fn test_standard_answers_fold_case_and_trim() {
        let catalog = bundled();
        assert!(validate(&catalog, 1, "  RUBIK ", None).correct);
        assert!(!validate(&catalog, 1, "rubix", None).correct);
        assert!(validate(&catalog, 8, "5768", None).correct);
    }

    #[test]
    fn test_every_standard_level_accepts_its_catalog_answer() {
        let catalog = bundled();
        for puzzle in catalog.iter() {
            if puzzle.kind == PuzzleKind::Standard {
                assert!(
                    validate(&catalog, puzzle.id, &puzzle.answer.to_uppercase(), None).correct,
                    "level {}",
                    puzzle.id
                );
            }
        }
    }

    #[test]
    fn test_time_shift_uses_fixed_phrase() {
        let catalog = bundled();
        assert!(validate(&catalog, 3, "me gusta el fernet", None).correct);
        assert!(!validate(&catalog, 3, "NF HVTUB FM GFSOFU", None).correct);
    }

    #[test]
    fn test_symbolic_alias_accepts_any_spelling() {
        let catalog = bundled();
        for answer in ["pi", "π", "Número Pi", "numero pi"] {
            assert!(validate(&catalog, 4, answer, None).correct, "{answer}");
        }
        assert!(!validate(&catalog, 4, "3.14", None).correct);
    }

    #[test]
    fn test_client_adjudicated_always_passes() {
        let catalog = bundled();
        assert!(validate(&catalog, 7, "OK", None).correct);
        assert!(validate(&catalog, 7, "", None).correct);
    }

    #[test]
    fn test_generated_cipher_reads_record() {
        let catalog = bundled();
        let phrase = "Pack my box with five dozen liquor jugs";
        let record = CipherRecord::new(
            SubstitutionMapping::generate(&mut rand::rng()),
            phrase,
            Utc::now(),
        );
        assert!(needs_cipher(catalog.get(9).unwrap()));
        assert!(validate(&catalog, 9, "pack my box with five dozen liquor jugs", Some(&record)).correct);
        assert!(!validate(&catalog, 9, &record.answer, Some(&record)).correct);
        assert!(!validate(&catalog, 9, phrase, None).correct);
    }

    #[test]
    fn test_unknown_id_fails_closed() {
        let catalog = bundled();
        let v = validate(&catalog, 0, "rubik", None);
        assert!(!v.correct);
        assert_eq!(v.total_levels, 9);
        assert!(!validate(&catalog, 42, "rubik", None).correct);
    }
}

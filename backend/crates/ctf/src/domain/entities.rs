//! Domain Entities
//!
//! Persisted record shapes. Both maps are stored whole (get-all / set-all),
//! so these types double as the on-disk and on-Redis JSON schema.

use chrono::{DateTime, Utc};
use kernel::id::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::substitution::SubstitutionMapping;

/// All players keyed by id
pub type PlayerBook = BTreeMap<PlayerId, PlayerRecord>;

/// All generated ciphers keyed by puzzle id
pub type CipherBook = BTreeMap<u32, CipherRecord>;

/// PlayerRecord entity - name, progress cursor and last write time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    /// Empty until the player picks a name
    #[serde(default)]
    pub name: String,
    pub current_level: u32,
    pub last_updated: DateTime<Utc>,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, current_level: u32, now: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            current_level,
            last_updated: now,
        }
    }

    /// Display name, if one has been set
    pub fn display_name(&self) -> Option<&str> {
        let name = self.name.trim();
        (!name.is_empty()).then_some(name)
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_updated = now;
    }
}

/// CipherRecord entity - mapping and ciphertext generated together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CipherRecord {
    pub mapping: SubstitutionMapping,
    /// Expected ciphertext shown to the player
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

impl CipherRecord {
    pub fn new(mapping: SubstitutionMapping, phrase: &str, now: DateTime<Utc>) -> Self {
        let answer = mapping.encrypt(phrase);
        Self {
            mapping,
            answer,
            created_at: now,
        }
    }

    /// Plaintext recovered by running the stored ciphertext back through the mapping
    pub fn plaintext(&self) -> String {
        self.mapping.decrypt(&self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_player_record_json_shape() {
        let record = PlayerRecord::new("Ana", 4, at(0));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["currentLevel"], 4);
        assert_eq!(json["lastUpdated"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_player_record_missing_name_is_unset() {
        let record: PlayerRecord =
            serde_json::from_str(r#"{"currentLevel":2,"lastUpdated":"2024-05-01T10:00:00.000Z"}"#)
                .unwrap();
        assert_eq!(record.display_name(), None);
        assert_eq!(record.current_level, 2);
    }

    #[test]
    fn test_player_record_rejects_bad_level() {
        let raw = r#"{"name":"x","currentLevel":"three","lastUpdated":"2024-05-01T10:00:00Z"}"#;
        assert!(serde_json::from_str::<PlayerRecord>(raw).is_err());
        let raw = r#"{"name":"x","currentLevel":-1,"lastUpdated":"2024-05-01T10:00:00Z"}"#;
        assert!(serde_json::from_str::<PlayerRecord>(raw).is_err());
    }

    #[test]
    fn test_whitespace_name_is_unset() {
        let record = PlayerRecord::new("   ", 1, at(0));
        assert_eq!(record.display_name(), None);
    }

    #[test]
    fn test_player_book_keys_are_ids() {
        let mut book = PlayerBook::new();
        book.insert(
            PlayerId::parse("player-1-abc").unwrap(),
            PlayerRecord::new("Ana", 1, at(0)),
        );
        let json = serde_json::to_string(&book).unwrap();
        let back: PlayerBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }

    #[test]
    fn test_cipher_record_plaintext() {
        let mapping = SubstitutionMapping::generate(&mut rand::rng());
        let record = CipherRecord::new(mapping, "Pack my box", at(0));
        assert_eq!(record.plaintext(), "Pack my box");
        assert_ne!(record.answer.len(), 0);
    }

    #[test]
    fn test_cipher_book_uses_string_keys() {
        let mapping = SubstitutionMapping::generate(&mut rand::rng());
        let mut book = CipherBook::new();
        book.insert(9, CipherRecord::new(mapping, "abc", at(0)));
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.starts_with(r#"{"9":"#));
        let back: CipherBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }
}

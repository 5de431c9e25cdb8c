//! Substitution Cipher
//!
//! A case-preserving bijection over the 26 ASCII letters. Uppercase letters
//! map to uppercase, and each lowercase letter mirrors its uppercase entry,
//! giving 52 entries in total.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("mapping must have 52 entries, found {0}")]
    WrongSize(usize),
    #[error("mapping key `{0}` is not a single ASCII letter")]
    BadKey(String),
    #[error("mapping value for `{0}` is not a single letter of the same case")]
    BadValue(char),
    #[error("lowercase `{0}` does not mirror its uppercase entry")]
    NotMirrored(char),
    #[error("mapping is not a bijection")]
    NotBijective,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct SubstitutionMapping(BTreeMap<char, char>);

impl SubstitutionMapping {
    /// Uniformly random mapping (Fisher-Yates over the alphabet)
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut shuffled: Vec<char> = ('A'..='Z').collect();
        shuffled.shuffle(rng);

        let mut map = BTreeMap::new();
        for (plain, cipher) in ('A'..='Z').zip(shuffled) {
            map.insert(plain, cipher);
            map.insert(plain.to_ascii_lowercase(), cipher.to_ascii_lowercase());
        }
        Self(map)
    }

    /// Letters go through the mapping, everything else passes unchanged
    pub fn encrypt(&self, text: &str) -> String {
        text.chars()
            .map(|c| self.0.get(&c).copied().unwrap_or(c))
            .collect()
    }

    pub fn decrypt(&self, text: &str) -> String {
        let inverse: BTreeMap<char, char> = self.0.iter().map(|(&k, &v)| (v, k)).collect();
        text.chars()
            .map(|c| inverse.get(&c).copied().unwrap_or(c))
            .collect()
    }

    pub fn get(&self, letter: char) -> Option<char> {
        self.0.get(&letter).copied()
    }

    fn validate(map: BTreeMap<char, char>) -> Result<Self, MappingError> {
        if map.len() != 52 {
            return Err(MappingError::WrongSize(map.len()));
        }
        let mut seen = BTreeSet::new();
        for upper in 'A'..='Z' {
            let cipher = *map
                .get(&upper)
                .ok_or_else(|| MappingError::BadKey(upper.to_string()))?;
            if !cipher.is_ascii_uppercase() {
                return Err(MappingError::BadValue(upper));
            }
            let lower = upper.to_ascii_lowercase();
            if map.get(&lower) != Some(&cipher.to_ascii_lowercase()) {
                return Err(MappingError::NotMirrored(lower));
            }
            if !seen.insert(cipher) {
                return Err(MappingError::NotBijective);
            }
        }
        Ok(Self(map))
    }
}

impl TryFrom<BTreeMap<String, String>> for SubstitutionMapping {
    type Error = MappingError;

    fn try_from(raw: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let mut map = BTreeMap::new();
        for (key, value) in raw {
            let plain = single_letter(&key).ok_or_else(|| MappingError::BadKey(key.clone()))?;
            let cipher = single_letter(&value).ok_or(MappingError::BadValue(plain))?;
            map.insert(plain, cipher);
        }
        Self::validate(map)
    }
}

impl From<SubstitutionMapping> for BTreeMap<String, String> {
    fn from(mapping: SubstitutionMapping) -> Self {
        mapping
            .0
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

fn single_letter(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const PANGRAM: &str = "The quick brown fox jumps over the lazy dog";

    #[test]
    fn test_generated_mapping_is_valid() {
        let mapping = SubstitutionMapping::generate(&mut StdRng::seed_from_u64(7));
        let raw: BTreeMap<String, String> = mapping.clone().into();
        assert_eq!(raw.len(), 52);
        assert_eq!(SubstitutionMapping::try_from(raw).unwrap(), mapping);
    }

    #[test]
    fn test_case_preserved_and_mirrored() {
        let mapping = SubstitutionMapping::generate(&mut StdRng::seed_from_u64(1));
        for upper in 'A'..='Z' {
            let cipher = mapping.get(upper).unwrap();
            assert!(cipher.is_ascii_uppercase());
            assert_eq!(
                mapping.get(upper.to_ascii_lowercase()),
                Some(cipher.to_ascii_lowercase())
            );
        }
    }

    #[test]
    fn test_encrypt_keeps_non_letters() {
        let mapping = SubstitutionMapping::generate(&mut StdRng::seed_from_u64(3));
        let out = mapping.encrypt("a b, c!");
        let chars: Vec<char> = out.chars().collect();
        assert_eq!(chars[1], ' ');
        assert_eq!(chars[3], ',');
        assert_eq!(chars[6], '!');
        assert_eq!(mapping.decrypt(&mapping.encrypt(PANGRAM)), PANGRAM);
    }

    #[test]
    fn test_pangram_uses_every_cipher_letter() {
        let mapping = SubstitutionMapping::generate(&mut StdRng::seed_from_u64(11));
        let letters: BTreeSet<char> = mapping
            .encrypt(PANGRAM)
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        assert_eq!(letters.len(), 26);
    }

    #[test]
    fn test_rejects_malformed_maps() {
        let mapping = SubstitutionMapping::generate(&mut StdRng::seed_from_u64(5));
        let good: BTreeMap<String, String> = mapping.into();

        let mut short = good.clone();
        short.remove("Q");
        assert_eq!(
            SubstitutionMapping::try_from(short),
            Err(MappingError::WrongSize(51))
        );

        let mut unmirrored = good.clone();
        let upper_a = unmirrored["A"].clone();
        let other = if upper_a == "B" { "c" } else { "b" };
        unmirrored.insert("a".into(), other.into());
        assert!(SubstitutionMapping::try_from(unmirrored).is_err());

        let mut collision = good.clone();
        let b = collision["B"].clone();
        collision.insert("A".into(), b.clone());
        collision.insert("a".into(), b.to_lowercase());
        assert_eq!(
            SubstitutionMapping::try_from(collision),
            Err(MappingError::NotBijective)
        );

        let mut bad_key = good;
        let value = bad_key.remove("Z").unwrap();
        bad_key.insert("ZZ".into(), value);
        assert!(SubstitutionMapping::try_from(bad_key).is_err());
    }

    #[test]
    fn test_serde_round_trip_through_json() {
        let mapping = SubstitutionMapping::generate(&mut StdRng::seed_from_u64(9));
        let json = serde_json::to_string(&mapping).unwrap();
        let back: SubstitutionMapping = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mapping);
        assert!(serde_json::from_str::<SubstitutionMapping>(r#"{"A":"B"}"#).is_err());
    }
}

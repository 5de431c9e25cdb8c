//! Player identifier
//!
//! Opaque, server-issued token persisted in the browser as the `player-id`
//! cookie. Admin tooling may create arbitrary ids, so the only rule is that
//! the value is non-empty and cookie-safe.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerId(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerIdError {
    #[error("player id must not be empty")]
    Empty,
    #[error("player id contains characters not allowed in a cookie")]
    InvalidCharacter,
}

impl PlayerId {
    /// Validate an id coming from a cookie or an admin request
    pub fn parse(value: impl Into<String>) -> Result<Self, PlayerIdError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(PlayerIdError::Empty);
        }
        if !value.chars().all(is_cookie_safe) {
            return Err(PlayerIdError::InvalidCharacter);
        }
        Ok(Self(value))
    }

    /// Build the canonical `player-<millis>-<suffix>` form
    pub fn issue(millis: i64, suffix: &str) -> Self {
        Self(format!("player-{millis}-{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

// RFC 6265 cookie-octet, minus a few characters we never issue
fn is_cookie_safe(c: char) -> bool {
    c.is_ascii_graphic() && !matches!(c, '"' | ',' | ';' | '\\')
}

impl TryFrom<String> for PlayerId {
    type Error = PlayerIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlayerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

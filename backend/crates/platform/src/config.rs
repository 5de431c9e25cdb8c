//! Environment configuration helpers

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {key} is required")]
    Missing { key: String },
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Read a variable, treating empty values as unset
pub fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Read and parse a variable, falling back to `default` when unset
pub fn try_load<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    match var(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");
            ConfigError::Invalid {
                key: key.to_string(),
                reason: e.to_string(),
            }
        }),
        None => {
            info!("{key} not set, using default");
            Ok(default)
        }
    }
}

/// Read a variable that has no sensible default
pub fn require(key: &str) -> Result<String, ConfigError> {
    var(key).ok_or_else(|| ConfigError::Missing {
        key: key.to_string(),
    })
}

/// Parse `true/false/1/0/yes/no`
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

//! Application Configuration
//!
//! Configuration for the CTF application layer.

use std::time::Duration;

use crate::domain::progress::AdvancePolicy;
use crate::infra::catalog::CatalogSource;
use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Admin key used when none is configured (debug builds only)
pub const DEFAULT_ADMIN_KEY: &str = "change-me-in-production";

/// CTF application configuration
#[derive(Debug, Clone)]
pub struct CtfConfig {
    /// Cookie carrying the player id
    pub player_cookie_name: String,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Player cookie lifetime
    pub cookie_max_age: Duration,
    /// Bearer secret for the admin routes
    pub admin_key: String,
    /// How level advances are reconciled with stored progress
    pub advance_policy: AdvancePolicy,
    /// Where the puzzle catalog is read from
    pub catalog: CatalogSource,
}

impl Default for CtfConfig {
    fn default() -> Self {
        Self {
            player_cookie_name: "player-id".to_string(),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            cookie_max_age: Duration::from_secs(60 * 60 * 24 * 365),
            admin_key: DEFAULT_ADMIN_KEY.to_string(),
            advance_policy: AdvancePolicy::TrustClient,
            catalog: CatalogSource::Bundled,
        }
    }
}

impl CtfConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }

    pub fn with_admin_key(mut self, admin_key: impl Into<String>) -> Self {
        self.admin_key = admin_key.into();
        self
    }

    pub fn player_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.player_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.cookie_max_age.as_secs() as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_cookie_attributes() {
        let cookie = CtfConfig::default().player_cookie().build_set_cookie("p1");
        assert!(cookie.starts_with("player-id=p1"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Max-Age=31536000"));
    }

    #[test]
    fn test_development_cookie_is_not_secure() {
        let cookie = CtfConfig::development().player_cookie().build_set_cookie("p1");
        assert!(!cookie.contains("Secure"));
    }
}

//! Server Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{Context, Result};
use std::env;

/// GitHub's own cap on webhook payloads (25 MiB).
pub const DEFAULT_MAX_BODY_SIZE: usize = 25 * 1024 * 1024;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:4001")
    pub bind_address: String,

    /// Shared webhook secret. Empty disables signature verification.
    pub webhook_secret: String,

    /// Maximum accepted request body in bytes (default: 25MB)
    pub max_body_size: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:4001".into()),
            webhook_secret: env::var("WEBHOOK_SECRET").unwrap_or_default(),
            max_body_size: match env::var("MAX_BODY_SIZE") {
                Ok(v) => v
                    .parse()
                    .with_context(|| format!("MAX_BODY_SIZE must be a byte count, got {v:?}"))?,
                Err(_) => DEFAULT_MAX_BODY_SIZE,
            },
        })
    }

    /// Check if webhook signatures are verified.
    #[must_use]
    pub fn has_secret(&self) -> bool {
        !self.webhook_secret.is_empty()
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            bind_address: "127.0.0.1:0".into(),
            webhook_secret: "test-secret".into(),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_presence() {
        let mut config = Config::default_for_test();
        assert!(config.has_secret());
        config.webhook_secret.clear();
        assert!(!config.has_secret());
    }

    #[test]
    fn body_limit_from_env() {
        env::set_var("MAX_BODY_SIZE", "not-a-number");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("MAX_BODY_SIZE"));

        env::set_var("MAX_BODY_SIZE", "1024");
        assert_eq!(Config::from_env().unwrap().max_body_size, 1024);

        env::remove_var("MAX_BODY_SIZE");
        assert_eq!(
            Config::from_env().unwrap().max_body_size,
            DEFAULT_MAX_BODY_SIZE
        );
    }

    #[test]
    fn default_body_limit_matches_github() {
        assert_eq!(Config::default_for_test().max_body_size, 26_214_400);
    }
}

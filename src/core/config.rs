//! Game configuration with documented constants
//!
//! All tunable values are collected here with explanations of their
//! purpose. The binary can override them from a TOML file or CLI flags.

use crate::core::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default base URL of the remote creature catalog
pub const DEFAULT_CATALOG_URL: &str = "https://pokeapi.co/api/v2";

/// Configuration for the arena engine and its catalog client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Delay between placing a bet and the battle resolving (milliseconds)
    ///
    /// This is the length of the "battle" the frontend animates. The
    /// resolution scheduled when a bet lands fires after exactly this
    /// delay unless a new draw or a reset preempts it.
    pub resolve_delay_ms: u64,

    /// How many past battles the history keeps
    ///
    /// Once full, recording a battle evicts the oldest entry.
    pub history_capacity: usize,

    /// Base URL of the remote creature catalog
    pub catalog_base_url: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            resolve_delay_ms: 2000,
            history_capacity: 5,
            catalog_base_url: DEFAULT_CATALOG_URL.into(),
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file, filling missing fields
    /// with defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: GameConfig = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Battle delay as a [`Duration`]
    pub fn resolve_delay(&self) -> Duration {
        Duration::from_millis(self.resolve_delay_ms)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.history_capacity == 0 {
            return Err("history_capacity must be at least 1".into());
        }

        if self.catalog_base_url.is_empty() {
            return Err("catalog_base_url must not be empty".into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = GameConfig {
            history_capacity: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_catalog_url_rejected() {
        let config = GameConfig {
            catalog_base_url: String::new(),
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GameConfig = toml::from_str("resolve_delay_ms = 50").unwrap();
        assert_eq!(config.resolve_delay_ms, 50);
        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.catalog_base_url, DEFAULT_CATALOG_URL);
    }

    #[test]
    fn test_resolve_delay_conversion() {
        let config = GameConfig {
            resolve_delay_ms: 1500,
            ..GameConfig::default()
        };
        assert_eq!(config.resolve_delay(), Duration::from_millis(1500));
    }
}

//! Persisted user preferences.
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/gas-review/config.json`
//! - macOS: `~/Library/Application Support/gas-review/config.json`
//! - Windows: `%APPDATA%/gas-review/config.json`
//!
//! # Example
//!
//! ```ignore
//! use gas_review::state::AppConfig;
//!
//! let mut config = AppConfig::load();
//! config.primary_currency = PrimaryCurrency::Fiat;
//! config.save_to(&AppConfig::config_path()?)?;
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::PrimaryCurrency;
use crate::state::platform::AppPaths;

/// Chain id used when neither the config nor the command line names one.
pub const DEFAULT_CHAIN_ID: &str = "0x1";

fn default_chain_id() -> String {
    DEFAULT_CHAIN_ID.to_string()
}

// ============================================================================
// AppConfig
// ============================================================================

/// Preferences that survive between runs.
///
/// Values here are defaults for the review; command line flags and props
/// files override them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Preferred denomination for the dominant amount.
    #[serde(default)]
    pub primary_currency: PrimaryCurrency,
    /// Chain id assumed when none is given.
    #[serde(default = "default_chain_id")]
    pub chain_id: String,
    /// Render the summary without horizontal margins.
    #[serde(default)]
    pub no_margin: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            primary_currency: PrimaryCurrency::Native,
            chain_id: default_chain_id(),
            no_margin: false,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        AppPaths::new().config_file()
    }

    /// Loads the configuration from disk, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the file cannot be
    /// read, or its content is not valid JSON.
    pub fn try_load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn temp_config_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gas-review-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.primary_currency, PrimaryCurrency::Native);
        assert_eq!(config.chain_id, "0x1");
        assert!(!config.no_margin);
    }

    #[test]
    fn test_json_format() {
        let config = AppConfig {
            primary_currency: PrimaryCurrency::Fiat,
            ..AppConfig::default()
        };
        let json = serde_json::to_string_pretty(&config).unwrap();

        assert!(json.contains(r#""primary_currency": "Fiat""#));
        assert!(json.contains(r#""chain_id": "0x1""#));
        assert!(json.contains("no_margin"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"primary_currency":"ETH"}"#).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[rstest]
    #[case::native(PrimaryCurrency::Native)]
    #[case::fiat(PrimaryCurrency::Fiat)]
    fn test_save_and_load(#[case] primary_currency: PrimaryCurrency) {
        let path = temp_config_path(&format!("config-{primary_currency}.json"));
        let config = AppConfig {
            primary_currency,
            chain_id: "0x89".to_string(),
            no_margin: true,
        };

        config.save_to(&path).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();

        assert_eq!(loaded, config);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let path = temp_config_path("does-not-exist.json");
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_load_from_invalid_json_fails() {
        let path = temp_config_path("invalid.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
        let _ = fs::remove_file(path);
    }
}

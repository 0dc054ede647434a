//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BASKET_STORAGE_PATH` - Storage file path (default: .basket/storage.json)
//! - `BASKET_STORAGE_KEY` - Key the cart is stored under (default: cartItems)
//! - `BASKET_CURRENCY_SUFFIX` - Appended to displayed prices (default: 원)
//! - `BASKET_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::store::DEFAULT_STORAGE_KEY;

const DEFAULT_STORAGE_PATH: &str = ".basket/storage.json";
const DEFAULT_CURRENCY_SUFFIX: &str = "원";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'pretty' or 'json', got '{other}'")),
        }
    }
}

/// Cart application configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// File backing the key-value store
    pub storage_path: PathBuf,
    /// Key the cart is stored under
    pub storage_key: String,
    /// Suffix appended to formatted prices
    pub currency_suffix: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency_suffix: DEFAULT_CURRENCY_SUFFIX.to_string(),
            log_format: LogFormat::default(),
            sentry_dsn: None,
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let storage_path = non_empty(lookup("BASKET_STORAGE_PATH"))
            .map_or(defaults.storage_path, PathBuf::from);
        let storage_key =
            non_empty(lookup("BASKET_STORAGE_KEY")).unwrap_or(defaults.storage_key);
        let currency_suffix = lookup("BASKET_CURRENCY_SUFFIX").unwrap_or(defaults.currency_suffix);
        let log_format = match non_empty(lookup("BASKET_LOG_FORMAT")) {
            Some(value) => value.parse::<LogFormat>().map_err(|e| {
                ConfigError::InvalidEnvVar("BASKET_LOG_FORMAT".to_string(), e)
            })?,
            None => defaults.log_format,
        };
        let sentry_dsn = non_empty(lookup("SENTRY_DSN"));

        Ok(Self {
            storage_path,
            storage_key,
            currency_suffix,
            log_format,
            sentry_dsn,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Treat unset and blank variables alike.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CartConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.storage_path, PathBuf::from(".basket/storage.json"));
        assert_eq!(config.storage_key, "cartItems");
        assert_eq!(config.currency_suffix, "원");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = CartConfig::from_lookup(lookup(&[
            ("BASKET_STORAGE_PATH", "/tmp/cart.json"),
            ("BASKET_STORAGE_KEY", "guestCart"),
            ("BASKET_CURRENCY_SUFFIX", ""),
            ("BASKET_LOG_FORMAT", "JSON"),
            ("SENTRY_DSN", "https://key@sentry.example/1"),
        ]))
        .unwrap();
        assert_eq!(config.storage_path, PathBuf::from("/tmp/cart.json"));
        assert_eq!(config.storage_key, "guestCart");
        assert_eq!(config.currency_suffix, "");
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.sentry_dsn.is_some());
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = CartConfig::from_lookup(lookup(&[
            ("BASKET_STORAGE_KEY", "  "),
            ("SENTRY_DSN", ""),
        ]))
        .unwrap();
        assert_eq!(config.storage_key, "cartItems");
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_invalid_log_format() {
        let result = CartConfig::from_lookup(lookup(&[("BASKET_LOG_FORMAT", "xml")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(name, _)) if name == "BASKET_LOG_FORMAT"));
    }
}

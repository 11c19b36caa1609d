//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `PIXALARA_DATA_FILE` - Path of the durable storage file (default: `pixalara-storage.json`)
//! - `PIXALARA_CART_KEY` - Storage key holding the serialized cart (default: `pixalara_cart`)
//! - `PIXALARA_TOAST_MS` - How long notifications stay visible (default: 3000)
//! - `PIXALARA_SLIDER_INTERVAL_MS` - Slider auto-advance interval (default: 5000)
//! - `PIXALARA_CATALOG_FILE` - JSON catalog replacing the builtin products

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATA_FILE: &str = "pixalara-storage.json";
/// Storage key the cart has always been saved under.
pub const DEFAULT_CART_KEY: &str = "pixalara_cart";
const DEFAULT_TOAST_MS: u64 = 3000;
const DEFAULT_SLIDER_INTERVAL_MS: u64 = 5000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// File backing the durable key-value store
    pub data_file: PathBuf,
    /// Storage key for the cart
    pub cart_key: String,
    /// Notification auto-dismiss duration
    pub toast_duration: Duration,
    /// Slider auto-advance interval
    pub slider_interval: Duration,
    /// Optional catalog file; the builtin catalog is used when absent
    pub catalog_file: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            cart_key: DEFAULT_CART_KEY.to_string(),
            toast_duration: Duration::from_millis(DEFAULT_TOAST_MS),
            slider_interval: Duration::from_millis(DEFAULT_SLIDER_INTERVAL_MS),
            catalog_file: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_file = lookup("PIXALARA_DATA_FILE").map_or(defaults.data_file, PathBuf::from);
        let cart_key = match lookup("PIXALARA_CART_KEY") {
            Some(key) if key.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "PIXALARA_CART_KEY".to_string(),
                    "cannot be empty".to_string(),
                ));
            }
            Some(key) => key,
            None => defaults.cart_key,
        };
        let toast_duration = get_millis(&lookup, "PIXALARA_TOAST_MS", DEFAULT_TOAST_MS)?;
        let slider_interval = get_millis(
            &lookup,
            "PIXALARA_SLIDER_INTERVAL_MS",
            DEFAULT_SLIDER_INTERVAL_MS,
        )?;
        if slider_interval.is_zero() {
            return Err(ConfigError::InvalidEnvVar(
                "PIXALARA_SLIDER_INTERVAL_MS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }
        let catalog_file = lookup("PIXALARA_CATALOG_FILE").map(PathBuf::from);

        Ok(Self {
            data_file,
            cart_key,
            toast_duration,
            slider_interval,
            catalog_file,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Read a millisecond duration, falling back to `default` when unset.
fn get_millis<F>(lookup: &F, key: &str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let millis = match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?,
        None => default,
    };
    Ok(Duration::from_millis(millis))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.cart_key, "pixalara_cart");
        assert_eq!(config.toast_duration, Duration::from_millis(3000));
        assert_eq!(config.slider_interval, Duration::from_millis(5000));
        assert!(config.catalog_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("PIXALARA_DATA_FILE", "/tmp/cart.json"),
            ("PIXALARA_CART_KEY", "other_cart"),
            ("PIXALARA_TOAST_MS", "1500"),
            ("PIXALARA_SLIDER_INTERVAL_MS", " 250 "),
            ("PIXALARA_CATALOG_FILE", "catalog.json"),
        ]))
        .unwrap();

        assert_eq!(config.data_file, PathBuf::from("/tmp/cart.json"));
        assert_eq!(config.cart_key, "other_cart");
        assert_eq!(config.toast_duration, Duration::from_millis(1500));
        assert_eq!(config.slider_interval, Duration::from_millis(250));
        assert_eq!(config.catalog_file, Some(PathBuf::from("catalog.json")));
    }

    #[test]
    fn test_invalid_millis() {
        let err = StorefrontConfig::from_lookup(lookup_from(&[("PIXALARA_TOAST_MS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "PIXALARA_TOAST_MS"));
    }

    #[test]
    fn test_zero_slider_interval_rejected() {
        let result =
            StorefrontConfig::from_lookup(lookup_from(&[("PIXALARA_SLIDER_INTERVAL_MS", "0")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_cart_key_rejected() {
        let result = StorefrontConfig::from_lookup(lookup_from(&[("PIXALARA_CART_KEY", "  ")]));
        assert!(result.is_err());
    }
}

//! Dashboard configuration loaded from environment variables.
//!
//! The store itself reads no configuration; these settings only shape the
//! view models and the CLI.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MARKETPLACE_PLACEHOLDER_IMAGE` - Image given to products created from the drawer
//!   (default: the seed catalog's placeholder image)
//! - `MARKETPLACE_RECENT_ORDERS` - Orders shown on the dashboard (default: 5)
//! - `MARKETPLACE_LOG_JSON` - When set, logs are emitted as JSON

use thiserror::Error;

use crate::store::seed::PLACEHOLDER_IMAGE;

const DEFAULT_RECENT_ORDERS: usize = 5;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Image URI attached to newly created products
    pub placeholder_image: String,
    /// Number of orders listed on the dashboard
    pub recent_orders_limit: usize,
    /// Emit structured JSON logs instead of text
    pub log_json: bool,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            placeholder_image: PLACEHOLDER_IMAGE.to_owned(),
            recent_orders_limit: DEFAULT_RECENT_ORDERS,
            log_json: false,
        }
    }
}

impl AdminConfig {
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

        Self::from_lookup(get_optional_env)
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let placeholder_image = lookup("MARKETPLACE_PLACEHOLDER_IMAGE")
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned());

        let recent_orders_limit = match lookup("MARKETPLACE_RECENT_ORDERS") {
            Some(raw) => parse_positive(&raw, "MARKETPLACE_RECENT_ORDERS")?,
            None => DEFAULT_RECENT_ORDERS,
        };

        let log_json = lookup("MARKETPLACE_LOG_JSON").is_some();

        Ok(Self {
            placeholder_image,
            recent_orders_limit,
            log_json,
        })
    }
}

fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

fn parse_positive(raw: &str, var_name: &str) -> Result<usize, ConfigError> {
    let value = raw
        .trim()
        .parse::<usize>()
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_owned(), e.to_string()))?;

    if value == 0 {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_owned(),
            "must be greater than zero".to_owned(),
        ));
    }

    Ok(value)
}

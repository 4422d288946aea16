//! Checkout configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CHECKOUT_API_BASE_URL` - Order-service origin (scheme + host). Defaults
//!   to the production deployment when unset.

use thiserror::Error;
use url::Url;

/// Production order-service origin, used when the environment supplies no
/// base address.
pub const DEFAULT_API_BASE_URL: &str = "https://tamarind-backend-production.up.railway.app";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Checkout application configuration.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Order-service base address prefixed to all relative API paths.
    pub api_base_url: Url,
}

impl CheckoutConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CHECKOUT_API_BASE_URL` is set but does not
    /// parse as a URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_base_url(std::env::var("CHECKOUT_API_BASE_URL").ok().as_deref())
    }

    /// Build a configuration from an optional raw base-address value.
    ///
    /// `None` resolves to [`DEFAULT_API_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the value does not parse as a URL.
    pub fn from_base_url(raw: Option<&str>) -> Result<Self, ConfigError> {
        let raw = raw.unwrap_or(DEFAULT_API_BASE_URL);
        let api_base_url = Url::parse(raw).map_err(|e| {
            ConfigError::InvalidEnvVar("CHECKOUT_API_BASE_URL".to_string(), e.to_string())
        })?;

        Ok(Self { api_base_url })
    }
}

//! Store endpoint configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHELF_API_URL` - Base URL of the product collection resource
//!   (default: `http://localhost:8080/products`)

use thiserror::Error;
use url::Url;

/// Default product collection endpoint.
const DEFAULT_API_URL: &str = "http://localhost:8080/products";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store client configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the product collection resource.
    pub base_url: Url,
}

impl StoreConfig {
    /// Create a configuration pointing at an explicit collection URL.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Load configuration from the environment, falling back to the
    /// default local endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if `SHELF_API_URL` is set
    /// but is not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("SHELF_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let base_url = Url::parse(&raw)
            .map_err(|e| ConfigError::InvalidEnvVar("SHELF_API_URL".to_string(), e.to_string()))?;
        Ok(Self { base_url })
    }
}

impl Default for StoreConfig {
    // The compiled-in default is a valid URL.
    #[allow(clippy::unwrap_used)]
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_URL).unwrap(),
        }
    }
}

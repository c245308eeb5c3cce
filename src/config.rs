//! Environment-driven configuration
//!
//! The backend base URL is resolved once, at [`Config::new`], from the
//! process environment (optionally via a `.env` file) and is immutable
//! afterwards. The config is injected into the client constructor rather
//! than read ad hoc, so tests can substitute any address.

use crate::constants::DEFAULT_REST_TIMEOUT;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Main configuration for the bookmark client
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

/// Configuration for the REST API
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct RestApiConfig {
    /// Base URL of the bookmarks backend
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the process environment
    ///
    /// Reads `BACKEND_URL` and `BACKEND_TIMEOUT`, loading a `.env` file
    /// first if one is present. A missing `BACKEND_URL` is reported but not
    /// fatal here; operations fail with `ConfigurationMissing` when the URL
    /// is empty.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("loaded .env file"),
            Err(e) => debug!("no .env file loaded: {e}"),
        }

        let base_url = get_env_or_default("BACKEND_URL", String::new());
        if base_url.trim().is_empty() {
            error!("BACKEND_URL not found in environment variables or .env file");
        }

        Config {
            rest_api: RestApiConfig {
                base_url,
                timeout: get_env_or_default("BACKEND_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
        }
    }

    /// Creates a configuration pointing at the given base URL
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the bookmarks backend
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                timeout: DEFAULT_REST_TIMEOUT,
            },
        }
    }

    /// Returns true if a non-empty backend base URL is configured
    pub fn is_configured(&self) -> bool {
        !self.rest_api.base_url.trim().is_empty()
    }
}

use std::env;
use std::time::Duration;

use super::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Location of the recipe backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    /// `None` means requests may wait forever.
    pub timeout: Option<Duration>,
}

impl BackendConfig {
    /// Environment variables:
    /// - RECIPE_API_BASE_URL: backend base URL (default: "http://localhost:5000")
    /// - RECIPE_API_TIMEOUT_SECS: per-request timeout in seconds (default: none)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("RECIPE_API_BASE_URL").ok(),
            env::var("RECIPE_API_TIMEOUT_SECS").ok(),
        )
    }

    pub fn from_values(
        base_url: Option<String>,
        timeout_secs: Option<String>,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match timeout_secs {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(_) => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => None,
        };

        Ok(Self { base_url, timeout })
    }
}

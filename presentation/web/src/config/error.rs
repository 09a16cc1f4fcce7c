/// Invalid configuration found at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.invalid_port: {0}")]
    InvalidPort(String),
    #[error("config.invalid_base_url: {0}")]
    InvalidBaseUrl(String),
    #[error("config.invalid_timeout: {0}")]
    InvalidTimeout(String),
    #[error("config.invalid_lookup_ordering: {0}")]
    InvalidLookupOrdering(String),
}

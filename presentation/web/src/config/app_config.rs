use super::backend_config::BackendConfig;
use super::controller_config::ControllerConfig;
use super::error::ConfigError;
use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub backend: BackendConfig,
    pub controller: ControllerConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            backend: BackendConfig::from_env()?,
            controller: ControllerConfig::from_env()?,
        })
    }
}

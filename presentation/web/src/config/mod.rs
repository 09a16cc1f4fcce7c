pub mod app_config;
pub mod backend_config;
pub mod controller_config;
pub mod cors_config;
pub mod error;
pub mod server_config;

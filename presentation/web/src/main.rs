use dotenvy::dotenv;

mod api;
mod config;
mod page;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Recipe Picker entry point
///
/// Loads configuration, wires the backend adapters into the selection
/// controller, starts loading the option lists and serves the page and the
/// JSON API.
/// - config/: Application configuration (server, CORS, backend, lookup ordering)
/// - setup/: Dependency injection and server setup
/// - api/: OpenAPI routes and DTOs
/// - page/: Server-rendered page and its form handlers
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.backend, config.controller)?;

    // 5. Load the option lists in the background; the page shows a loading state meanwhile
    let controller = container.controller.clone();
    tokio::spawn(async move {
        controller.load_options().await;
    });

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}

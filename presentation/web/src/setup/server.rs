use std::sync::Arc;

use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, get, listener::TcpListener,
    middleware::Tracing, post,
};
use poem_openapi::OpenApiService;

use business::application::controller::SelectionController;

use crate::page::routes as page;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Page routes at the root, the JSON API under `/api`.
    pub fn routes(container: DependencyContainer, server_url: String) -> impl Endpoint {
        let controller: Arc<SelectionController> = container.controller;
        let api_service = OpenApiService::new(
            (container.health_api, container.controller_api),
            "Recipe Picker API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("{}/api", server_url));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .at("/", get(page::index))
            .at("/select", post(page::select))
            .at("/randomize", post(page::randomize))
            .at("/like", post(page::like))
            .at("/dislike", post(page::dislike))
            .at("/comments", post(page::add_comment))
            .at("/comments/load", post(page::load_comments))
            .at("/reload", post(page::reload))
            .nest("/api", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .data(controller)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::routes(container, format!("http://{}", addr))
            .with(config.cors)
            .with(Tracing);

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

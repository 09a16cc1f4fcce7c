use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::application::controller::SelectionController;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Whether the option lists have been loaded from the backend
    pub ingredients_loaded: bool,
}

pub struct HealthApi {
    controller: Arc<SelectionController>,
}

impl HealthApi {
    pub fn new(controller: Arc<SelectionController>) -> Self {
        Self { controller }
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Reports `healthy` once the option lists are loaded and `degraded`
    /// while they are missing (backend unreachable or still loading).
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let ingredients_loaded = self.controller.snapshot().await.options.is_complete();

        Json(HealthCheckResponse {
            status: if ingredients_loaded { "healthy" } else { "degraded" }.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ingredients_loaded,
        })
    }
}

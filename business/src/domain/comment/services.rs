use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::CommentPage;

/// Service port for the backend's per-recipe comment endpoints.
#[async_trait]
pub trait CommentService: Send + Sync {
    async fn list(
        &self,
        recipe_id: &str,
        page: u32,
        per_page: u32,
    ) -> Result<CommentPage, GatewayError>;

    /// Stores a comment and returns its new id.
    async fn add(&self, recipe_id: &str, text: &str) -> Result<i64, GatewayError>;
}

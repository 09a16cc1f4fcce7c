use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{Recipe, RecipeQuery};

/// Service port for the backend's recipe matching endpoint.
#[async_trait]
pub trait RecipeFinderService: Send + Sync {
    async fn find_recipes(&self, query: &RecipeQuery) -> Result<Vec<Recipe>, GatewayError>;
}

/// Service port for recording votes. Both calls return the server's new count.
#[async_trait]
pub trait RecipeVoteService: Send + Sync {
    async fn like(&self, recipe_id: &str) -> Result<u32, GatewayError>;
    async fn dislike(&self, recipe_id: &str) -> Result<u32, GatewayError>;
}

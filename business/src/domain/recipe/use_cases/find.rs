use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{Recipe, RecipeQuery};

#[derive(Debug, Clone)]
pub struct FindRecipeParams {
    pub query: RecipeQuery,
}

#[async_trait]
pub trait FindRecipeUseCase: Send + Sync {
    /// Returns the first matching recipe, or `None` when nothing matches.
    async fn execute(&self, params: FindRecipeParams) -> Result<Option<Recipe>, RecipeError>;
}

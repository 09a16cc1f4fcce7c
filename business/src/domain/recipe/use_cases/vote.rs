use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::VoteKind;

#[derive(Debug, Clone)]
pub struct VoteRecipeParams {
    pub recipe_id: String,
    pub kind: VoteKind,
}

#[async_trait]
pub trait VoteRecipeUseCase: Send + Sync {
    async fn execute(&self, params: VoteRecipeParams) -> Result<u32, RecipeError>;
}

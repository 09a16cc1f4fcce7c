use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::VoteKind;
use crate::domain::recipe::services::RecipeVoteService;
use crate::domain::recipe::use_cases::vote::{VoteRecipeParams, VoteRecipeUseCase};

pub struct VoteRecipeUseCaseImpl {
    pub voter: Arc<dyn RecipeVoteService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl VoteRecipeUseCase for VoteRecipeUseCaseImpl {
    async fn execute(&self, params: VoteRecipeParams) -> Result<u32, RecipeError> {
        self.logger.info(&format!(
            "Submitting {} for recipe {}",
            params.kind, params.recipe_id
        ));

        let result = match params.kind {
            VoteKind::Like => self.voter.like(&params.recipe_id).await,
            VoteKind::Dislike => self.voter.dislike(&params.recipe_id).await,
        };

        result.map_err(RecipeError::VoteFailed)
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::model::CommentPage;
use crate::domain::comment::services::CommentService;
use crate::domain::comment::use_cases::list::{ListCommentsParams, ListCommentsUseCase};
use crate::domain::logger::Logger;

pub struct ListCommentsUseCaseImpl {
    pub comments: Arc<dyn CommentService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListCommentsUseCase for ListCommentsUseCaseImpl {
    async fn execute(&self, params: ListCommentsParams) -> Result<CommentPage, CommentError> {
        self.logger.info(&format!(
            "Fetching comments for recipe {} (page {})",
            params.recipe_id, params.page
        ));

        let page = self
            .comments
            .list(&params.recipe_id, params.page.max(1), params.per_page)
            .await?;

        Ok(page)
    }
}

use async_trait::async_trait;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::model::CommentPage;

#[derive(Debug, Clone)]
pub struct ListCommentsParams {
    pub recipe_id: String,
    pub page: u32,
    pub per_page: u32,
}

#[async_trait]
pub trait ListCommentsUseCase: Send + Sync {
    async fn execute(&self, params: ListCommentsParams) -> Result<CommentPage, CommentError>;
}

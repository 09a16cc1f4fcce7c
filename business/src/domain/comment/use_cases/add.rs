use async_trait::async_trait;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::model::Comment;

#[derive(Debug, Clone)]
pub struct AddCommentParams {
    pub recipe_id: String,
    pub text: String,
}

#[async_trait]
pub trait AddCommentUseCase: Send + Sync {
    async fn execute(&self, params: AddCommentParams) -> Result<Comment, CommentError>;
}

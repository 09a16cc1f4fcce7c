use crate::domain::errors::GatewayError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommentError {
    #[error("comment.text_empty")]
    TextEmpty,
    #[error("comment.no_recipe")]
    NoRecipe,
    #[error("comment.request_failed")]
    RequestFailed(#[from] GatewayError),
}

use crate::domain::errors::GatewayError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.lookup_failed")]
    LookupFailed(#[source] GatewayError),
    #[error("recipe.vote_failed")]
    VoteFailed(#[source] GatewayError),
    #[error("recipe.not_loaded")]
    NotLoaded,
}

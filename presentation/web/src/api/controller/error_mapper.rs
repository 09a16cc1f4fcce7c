use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::comment::errors::CommentError;
use business::domain::selection::errors::SelectionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CommentError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CommentError::TextEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "comment.text_empty",
            ),
            CommentError::NoRecipe => (StatusCode::CONFLICT, "StateError", "comment.no_recipe"),
            CommentError::RequestFailed(_) => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "comment.request_failed",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

impl IntoErrorResponse for SelectionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            SelectionError::InvalidField(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(
                    "ValidationError",
                    "selection.invalid_field",
                )),
            ),
        }
    }
}

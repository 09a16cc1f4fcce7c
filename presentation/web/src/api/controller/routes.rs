use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::application::controller::SelectionController;
use business::domain::selection::model::SelectionField;

use crate::api::controller::dto::{AddCommentRequest, SelectRequest, StateResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct ControllerApi {
    controller: Arc<SelectionController>,
}

impl ControllerApi {
    pub fn new(controller: Arc<SelectionController>) -> Self {
        Self { controller }
    }
}

/// Selection and recipe API
///
/// Drives the same controller the page uses. Every endpoint answers with the
/// full state after the action completed.
#[OpenApi]
impl ControllerApi {
    /// Current state
    #[oai(path = "/state", method = "get", tag = "ApiTags::Selection")]
    async fn get_state(&self) -> Json<StateResponse> {
        Json(self.controller.snapshot().await.into())
    }

    /// Reload the option lists
    ///
    /// Fetches vegetables, proteins and flavors again. A failure is reported
    /// in `request.error`.
    #[oai(path = "/ingredients/reload", method = "post", tag = "ApiTags::Selection")]
    async fn reload_ingredients(&self) -> Json<StateResponse> {
        Json(self.controller.load_options().await.into())
    }

    /// Set one selection field
    ///
    /// `field` is `vegetable`, `protein` or `flavor`. Once all three are set a
    /// recipe lookup runs before the response is returned.
    #[oai(path = "/selection/:field", method = "put", tag = "ApiTags::Selection")]
    async fn select(&self, field: Path<String>, body: Json<SelectRequest>) -> SelectResponse {
        let field = match field.0.parse::<SelectionField>() {
            Ok(field) => field,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return SelectResponse::BadRequest(json);
            }
        };

        let state = self.controller.select(field, body.0.value).await;
        SelectResponse::Ok(Json(state.into()))
    }

    /// Pick a random selection
    ///
    /// Picks one entry from each option list and looks up a recipe for it.
    #[oai(path = "/randomize", method = "post", tag = "ApiTags::Selection")]
    async fn randomize(&self) -> Json<StateResponse> {
        Json(self.controller.randomize().await.into())
    }

    /// Like the displayed recipe
    ///
    /// Does nothing when no recipe is displayed. Backend failures are not
    /// reported.
    #[oai(path = "/recipe/like", method = "post", tag = "ApiTags::Recipe")]
    async fn like(&self) -> Json<StateResponse> {
        Json(self.controller.like().await.into())
    }

    /// Dislike the displayed recipe
    #[oai(path = "/recipe/dislike", method = "post", tag = "ApiTags::Recipe")]
    async fn dislike(&self) -> Json<StateResponse> {
        Json(self.controller.dislike().await.into())
    }

    /// Load comments for the displayed recipe
    ///
    /// `page` starts at 1 and defaults to the first page.
    #[oai(path = "/recipe/comments", method = "get", tag = "ApiTags::Comments")]
    async fn load_comments(&self, page: Query<Option<u32>>) -> Json<StateResponse> {
        let page = page.0.unwrap_or(1);
        Json(self.controller.load_comments(page).await.into())
    }

    /// Comment on the displayed recipe
    #[oai(path = "/recipe/comments", method = "post", tag = "ApiTags::Comments")]
    async fn add_comment(&self, body: Json<AddCommentRequest>) -> AddCommentResponse {
        match self.controller.add_comment(&body.0.text).await {
            Ok(state) => AddCommentResponse::Created(Json(state.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddCommentResponse::BadRequest(json),
                    409 => AddCommentResponse::Conflict(json),
                    _ => AddCommentResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SelectResponse {
    #[oai(status = 200)]
    Ok(Json<StateResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCommentResponse {
    #[oai(status = 201)]
    Created(Json<StateResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

use std::sync::Arc;

use poem::http::StatusCode;
use poem::web::{Data, Form, Html, Redirect};
use poem::{Error, handler};
use serde::Deserialize;

use business::application::controller::SelectionController;
use business::domain::selection::model::SelectionField;

use super::view;

#[derive(Debug, Deserialize)]
pub struct SelectForm {
    pub field: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentPageForm {
    #[serde(default = "first_page")]
    pub page: u32,
}

fn first_page() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub text: String,
}

fn back_to_page() -> Redirect {
    Redirect::see_other("/")
}

#[handler]
pub async fn index(controller: Data<&Arc<SelectionController>>) -> Html<String> {
    Html(view::render(&controller.snapshot().await))
}

#[handler]
pub async fn select(
    controller: Data<&Arc<SelectionController>>,
    Form(form): Form<SelectForm>,
) -> poem::Result<Redirect> {
    let field = form
        .field
        .parse::<SelectionField>()
        .map_err(|err| Error::from_string(err.to_string(), StatusCode::BAD_REQUEST))?;

    controller.select(field, form.value).await;
    Ok(back_to_page())
}

#[handler]
pub async fn randomize(controller: Data<&Arc<SelectionController>>) -> Redirect {
    controller.randomize().await;
    back_to_page()
}

#[handler]
pub async fn like(controller: Data<&Arc<SelectionController>>) -> Redirect {
    controller.like().await;
    back_to_page()
}

#[handler]
pub async fn dislike(controller: Data<&Arc<SelectionController>>) -> Redirect {
    controller.dislike().await;
    back_to_page()
}

#[handler]
pub async fn load_comments(
    controller: Data<&Arc<SelectionController>>,
    Form(form): Form<CommentPageForm>,
) -> Redirect {
    controller.load_comments(form.page).await;
    back_to_page()
}

/// The page has no inline form errors; a rejected comment is only logged.
#[handler]
pub async fn add_comment(
    controller: Data<&Arc<SelectionController>>,
    Form(form): Form<CommentForm>,
) -> Redirect {
    if let Err(err) = controller.add_comment(&form.text).await {
        tracing::warn!("Comment rejected: {}", err);
    }
    back_to_page()
}

#[handler]
pub async fn reload(controller: Data<&Arc<SelectionController>>) -> Redirect {
    controller.load_options().await;
    back_to_page()
}

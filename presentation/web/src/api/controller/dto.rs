use poem_openapi::Object;

use business::domain::catalog::model::OptionSet;
use business::domain::comment::model::{Comment, CommentPaging};
use business::domain::controller::state::{ControllerState, RequestState};
use business::domain::recipe::model::Recipe;
use business::domain::selection::model::Selection;

#[derive(Debug, Clone, Object)]
pub struct OptionResponse {
    /// Id sent to the lookup endpoint when this option is selected
    pub id: i64,
    /// Display name
    pub name: String,
}

fn options_of(set: &OptionSet) -> Vec<OptionResponse> {
    set.names()
        .map(|name| OptionResponse {
            id: set.resolve_id(name),
            name: name.to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, Object)]
pub struct OptionsResponse {
    pub vegetables: Vec<OptionResponse>,
    pub proteins: Vec<OptionResponse>,
    pub flavors: Vec<OptionResponse>,
}

#[derive(Debug, Clone, Object)]
pub struct SelectionResponse {
    #[oai(skip_serializing_if_is_none)]
    pub vegetable: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub protein: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub flavor: Option<String>,
}

impl From<Selection> for SelectionResponse {
    fn from(s: Selection) -> Self {
        Self {
            vegetable: s.vegetable,
            protein: s.protein,
            flavor: s.flavor,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipeResponse {
    pub recipe_id: String,
    pub recipe_name: String,
    /// Free-text preparation notes
    pub recipe_context: String,
    pub likes: u32,
    pub dislikes: u32,
}

impl From<Recipe> for RecipeResponse {
    fn from(r: Recipe) -> Self {
        Self {
            recipe_id: r.id,
            recipe_name: r.name,
            recipe_context: r.context,
            likes: r.likes,
            dislikes: r.dislikes,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CommentResponse {
    pub comment_id: i64,
    pub comment_text: String,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            comment_id: c.id,
            comment_text: c.text,
        }
    }
}

/// Position of the loaded comments in the backend's pagination
#[derive(Debug, Clone, Object)]
pub struct CommentPagingResponse {
    pub total: u32,
    pub pages: u32,
    pub current_page: u32,
}

impl From<CommentPaging> for CommentPagingResponse {
    fn from(p: CommentPaging) -> Self {
        Self {
            total: p.total,
            pages: p.pages,
            current_page: p.current_page,
        }
    }
}

/// In-flight operations and the last user-visible error
#[derive(Debug, Clone, Object)]
pub struct RequestStateResponse {
    pub loading_ingredients: bool,
    pub loading_recipe: bool,
    pub submitting_like: bool,
    pub submitting_dislike: bool,
    pub loading_comments: bool,
    pub submitting_comment: bool,
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

impl From<RequestState> for RequestStateResponse {
    fn from(r: RequestState) -> Self {
        Self {
            loading_ingredients: r.loading_ingredients,
            loading_recipe: r.loading_recipe,
            submitting_like: r.submitting_like,
            submitting_dislike: r.submitting_dislike,
            loading_comments: r.loading_comments,
            submitting_comment: r.submitting_comment,
            error: r.error,
        }
    }
}

/// Everything the page shows
#[derive(Debug, Clone, Object)]
pub struct StateResponse {
    pub options: OptionsResponse,
    pub selection: SelectionResponse,
    #[oai(skip_serializing_if_is_none)]
    pub recipe: Option<RecipeResponse>,
    pub comments: Vec<CommentResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub comment_paging: Option<CommentPagingResponse>,
    pub request: RequestStateResponse,
    /// "latest-issued" or "last-completed"
    pub lookup_ordering: String,
    pub lookups_in_flight: u32,
}

impl From<ControllerState> for StateResponse {
    fn from(s: ControllerState) -> Self {
        Self {
            options: OptionsResponse {
                vegetables: options_of(&s.options.vegetables),
                proteins: options_of(&s.options.proteins),
                flavors: options_of(&s.options.flavors),
            },
            selection: s.selection.into(),
            recipe: s.recipe.map(Into::into),
            comments: s.comments.into_iter().map(Into::into).collect(),
            comment_paging: s.comment_paging.map(Into::into),
            request: s.request.into(),
            lookup_ordering: s.ordering.to_string(),
            lookups_in_flight: s.lookups_in_flight,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SelectRequest {
    /// Value to store; any string is accepted, an empty one clears the field
    pub value: String,
}

#[derive(Debug, Clone, Object)]
pub struct AddCommentRequest {
    pub text: String,
}

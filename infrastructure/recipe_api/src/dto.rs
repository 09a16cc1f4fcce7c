use serde::{Deserialize, Serialize};

use business::domain::catalog::model::IngredientOption;
use business::domain::comment::model::{Comment, CommentPage};
use business::domain::recipe::model::Recipe;

#[derive(Debug, Deserialize)]
pub struct ItemsPage<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct VegetableItem {
    #[serde(default)]
    pub veg_id: Option<i64>,
    pub veg_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ProteinItem {
    #[serde(default)]
    pub protein_id: Option<i64>,
    pub protein_name: String,
}

#[derive(Debug, Deserialize)]
pub struct FlavorItem {
    #[serde(default)]
    pub flavor_id: Option<i64>,
    pub flavor_type: String,
}

impl From<VegetableItem> for IngredientOption {
    fn from(item: VegetableItem) -> Self {
        IngredientOption {
            id: item.veg_id,
            name: item.veg_name,
        }
    }
}

impl From<ProteinItem> for IngredientOption {
    fn from(item: ProteinItem) -> Self {
        IngredientOption {
            id: item.protein_id,
            name: item.protein_name,
        }
    }
}

impl From<FlavorItem> for IngredientOption {
    fn from(item: FlavorItem) -> Self {
        IngredientOption {
            id: item.flavor_id,
            name: item.flavor_type,
        }
    }
}

/// Recipe ids are short strings, but some backends send them as numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RecipeId {
    Text(String),
    Number(i64),
}

impl From<RecipeId> for String {
    fn from(id: RecipeId) -> Self {
        match id {
            RecipeId::Text(text) => text,
            RecipeId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecipesPage {
    #[serde(default)]
    pub recipes: Vec<RecipeItem>,
}

#[derive(Debug, Deserialize)]
pub struct RecipeItem {
    pub recipe_id: RecipeId,
    pub recipe_name: String,
    #[serde(default)]
    pub recipe_context: Option<String>,
    #[serde(default)]
    pub likes: Option<u32>,
    #[serde(default)]
    pub dislikes: Option<u32>,
}

impl From<RecipeItem> for Recipe {
    fn from(item: RecipeItem) -> Self {
        Recipe {
            id: item.recipe_id.into(),
            name: item.recipe_name,
            context: item.recipe_context.unwrap_or_default(),
            likes: item.likes.unwrap_or(0),
            dislikes: item.dislikes.unwrap_or(0),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LikesResponse {
    pub likes: u32,
}

#[derive(Debug, Deserialize)]
pub struct DislikesResponse {
    pub dislikes: u32,
}

#[derive(Debug, Deserialize)]
pub struct CommentItem {
    pub comment_id: i64,
    pub comment_text: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentsPage {
    #[serde(default)]
    pub comments: Vec<CommentItem>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub current_page: u32,
}

impl From<CommentsPage> for CommentPage {
    fn from(page: CommentsPage) -> Self {
        CommentPage {
            comments: page
                .comments
                .into_iter()
                .map(|c| Comment {
                    id: c.comment_id,
                    text: c.comment_text,
                })
                .collect(),
            total: page.total,
            pages: page.pages,
            current_page: page.current_page,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NewCommentRequest<'a> {
    pub comment_text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct NewCommentResponse {
    pub comment_id: i64,
}

//! User-facing messages shown by the page.

use crate::domain::catalog::errors::CatalogError;

pub const NO_MATCHING_RECIPE: &str = "no matching recipe found";
pub const RECIPE_LOOKUP_FAILED: &str = "failed to fetch recipe, please try again later";
pub const INGREDIENTS_UNAVAILABLE: &str = "failed to load ingredients, please try again later";

/// Message for a failed ingredient load. Network and HTTP failures carry
/// their detail; anything else gets the generic text.
pub fn ingredients_failed(err: &CatalogError) -> String {
    match err {
        CatalogError::Http(detail) => format!("failed to load ingredients: {}", detail),
        CatalogError::Unknown => INGREDIENTS_UNAVAILABLE.to_string(),
    }
}

use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::recipe::model::{Recipe, RecipeQuery};
use business::domain::recipe::services::RecipeFinderService;

use crate::client::RecipeApiClient;
use crate::dto::RecipesPage;

pub struct RecipeFinderHttp {
    client: RecipeApiClient,
}

impl RecipeFinderHttp {
    pub fn new(client: RecipeApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecipeFinderService for RecipeFinderHttp {
    async fn find_recipes(&self, query: &RecipeQuery) -> Result<Vec<Recipe>, GatewayError> {
        let request = self
            .client
            .client
            .get(self.client.endpoint("find_recipes"))
            .query(&[
                ("veg_id", query.veg_id),
                ("protein_id", query.protein_id),
                ("flavor_id", query.flavor_id),
            ]);

        // The backend answers 404 when no recipe matches.
        match self.client.send_json::<RecipesPage>(request).await {
            Ok(page) => Ok(page.recipes.into_iter().map(Into::into).collect()),
            Err(GatewayError::NotFound) => Ok(vec![]),
            Err(err) => Err(err),
        }
    }
}

use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::recipe::services::RecipeVoteService;

use crate::client::RecipeApiClient;
use crate::dto::{DislikesResponse, LikesResponse};

/// Posts votes to `/like_recipe/{id}` and `/dislike_recipe/{id}`.
pub struct RecipeVoterHttp {
    client: RecipeApiClient,
}

impl RecipeVoterHttp {
    pub fn new(client: RecipeApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecipeVoteService for RecipeVoterHttp {
    async fn like(&self, recipe_id: &str) -> Result<u32, GatewayError> {
        let request = self
            .client
            .client
            .post(self.client.resource("like_recipe", recipe_id));
        let body: LikesResponse = self.client.send_json(request).await?;
        Ok(body.likes)
    }

    async fn dislike(&self, recipe_id: &str) -> Result<u32, GatewayError> {
        let request = self
            .client
            .client
            .post(self.client.resource("dislike_recipe", recipe_id));
        let body: DislikesResponse = self.client.send_json(request).await?;
        Ok(body.dislikes)
    }
}

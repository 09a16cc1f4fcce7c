use async_trait::async_trait;

use business::domain::comment::model::CommentPage;
use business::domain::comment::services::CommentService;
use business::domain::errors::GatewayError;

use crate::client::RecipeApiClient;
use crate::dto::{CommentsPage, NewCommentRequest, NewCommentResponse};

/// Reads and writes recipe comments via `/get_comments` and `/add_comment`.
pub struct CommentServiceHttp {
    client: RecipeApiClient,
}

impl CommentServiceHttp {
    pub fn new(client: RecipeApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CommentService for CommentServiceHttp {
    async fn list(
        &self,
        recipe_id: &str,
        page: u32,
        per_page: u32,
    ) -> Result<CommentPage, GatewayError> {
        let request = self
            .client
            .client
            .get(self.client.resource("get_comments", recipe_id))
            .query(&[("page", page), ("per_page", per_page)]);

        let body: CommentsPage = self.client.send_json(request).await?;
        Ok(body.into())
    }

    async fn add(&self, recipe_id: &str, text: &str) -> Result<i64, GatewayError> {
        let request = self
            .client
            .client
            .post(self.client.resource("add_comment", recipe_id))
            .json(&NewCommentRequest { comment_text: text });

        let body: NewCommentResponse = self.client.send_json(request).await?;
        Ok(body.comment_id)
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::model::{Comment, normalize_comment_text};
use crate::domain::comment::services::CommentService;
use crate::domain::comment::use_cases::add::{AddCommentParams, AddCommentUseCase};
use crate::domain::logger::Logger;

pub struct AddCommentUseCaseImpl {
    pub comments: Arc<dyn CommentService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCommentUseCase for AddCommentUseCaseImpl {
    async fn execute(&self, params: AddCommentParams) -> Result<Comment, CommentError> {
        let text = normalize_comment_text(&params.text)?;

        self.logger
            .info(&format!("Adding comment to recipe {}", params.recipe_id));

        let id = self.comments.add(&params.recipe_id, &text).await?;

        Ok(Comment { id, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comment::model::CommentPage;
    use crate::domain::errors::GatewayError;
    use mockall::mock;

    mock! {
        pub Comments {}

        #[async_trait]
        impl CommentService for Comments {
            async fn list(&self, recipe_id: &str, page: u32, per_page: u32) -> Result<CommentPage, GatewayError>;
            async fn add(&self, recipe_id: &str, text: &str) -> Result<i64, GatewayError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_store_trimmed_comment() {
        let mut comments = MockComments::new();
        comments
            .expect_add()
            .withf(|id, text| id == "R1" && text == "Needs more garlic")
            .times(1)
            .returning(|_, _| Ok(15));

        let use_case = AddCommentUseCaseImpl {
            comments: Arc::new(comments),
            logger: mock_logger(),
        };

        let comment = use_case
            .execute(AddCommentParams {
                recipe_id: "R1".to_string(),
                text: "  Needs more garlic ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(
            comment,
            Comment {
                id: 15,
                text: "Needs more garlic".to_string()
            }
        );
    }

    #[tokio::test]
    async fn should_reject_blank_comment_without_calling_backend() {
        let mut comments = MockComments::new();
        comments.expect_add().never();

        let use_case = AddCommentUseCaseImpl {
            comments: Arc::new(comments),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCommentParams {
                recipe_id: "R1".to_string(),
                text: "   ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CommentError::TextEmpty)));
    }
}

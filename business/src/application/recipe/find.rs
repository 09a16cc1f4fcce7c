use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::services::RecipeFinderService;
use crate::domain::recipe::use_cases::find::{FindRecipeParams, FindRecipeUseCase};

pub struct FindRecipeUseCaseImpl {
    pub finder: Arc<dyn RecipeFinderService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindRecipeUseCase for FindRecipeUseCaseImpl {
    async fn execute(&self, params: FindRecipeParams) -> Result<Option<Recipe>, RecipeError> {
        let query = params.query;
        self.logger.info(&format!(
            "Finding recipe for veg_id={} protein_id={} flavor_id={}",
            query.veg_id, query.protein_id, query.flavor_id
        ));

        let recipes = self.finder.find_recipes(&query).await.map_err(|e| {
            self.logger.error(&format!("Recipe lookup failed: {}", e));
            RecipeError::LookupFailed(e)
        })?;

        self.logger
            .debug(&format!("Lookup returned {} recipes", recipes.len()));

        Ok(recipes.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::domain::recipe::model::RecipeQuery;
    use mockall::mock;

    mock! {
        pub Finder {}

        #[async_trait]
        impl RecipeFinderService for Finder {
            async fn find_recipes(&self, query: &RecipeQuery) -> Result<Vec<Recipe>, GatewayError>;
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

    fn recipe(id: &str, name: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            context: "Slice and braise.".to_string(),
            likes: 0,
            dislikes: 0,
        }
    }

    fn query() -> RecipeQuery {
        RecipeQuery {
            veg_id: 3,
            protein_id: 1,
            flavor_id: 2,
        }
    }

    #[tokio::test]
    async fn should_return_first_recipe() {
        let mut finder = MockFinder::new();
        finder
            .expect_find_recipes()
            .withf(|q| *q == query())
            .times(1)
            .returning(|_| {
                Ok(vec![
                    recipe("R1", "Braised eggplant"),
                    recipe("R2", "Eggplant stew"),
                ])
            });

        let use_case = FindRecipeUseCaseImpl {
            finder: Arc::new(finder),
            logger: mock_logger(),
        };

        let found = use_case
            .execute(FindRecipeParams { query: query() })
            .await
            .unwrap();

        assert_eq!(found, Some(recipe("R1", "Braised eggplant")));
    }

    #[tokio::test]
    async fn should_return_none_for_empty_list() {
        let mut finder = MockFinder::new();
        finder.expect_find_recipes().returning(|_| Ok(vec![]));

        let use_case = FindRecipeUseCaseImpl {
            finder: Arc::new(finder),
            logger: mock_logger(),
        };

        let found = use_case
            .execute(FindRecipeParams { query: query() })
            .await
            .unwrap();

        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn should_wrap_gateway_failure() {
        let mut finder = MockFinder::new();
        finder
            .expect_find_recipes()
            .returning(|_| Err(GatewayError::status(500)));

        let use_case = FindRecipeUseCaseImpl {
            finder: Arc::new(finder),
            logger: mock_logger(),
        };

        let result = use_case.execute(FindRecipeParams { query: query() }).await;

        assert_eq!(
            result.unwrap_err(),
            RecipeError::LookupFailed(GatewayError::Status(500))
        );
    }
}

use std::sync::Arc;

use logger::TracingLogger;
use recipe_api::catalog::IngredientCatalogHttp;
use recipe_api::client::RecipeApiClient;
use recipe_api::comments::CommentServiceHttp;
use recipe_api::recipe_finder::RecipeFinderHttp;
use recipe_api::recipe_voter::RecipeVoterHttp;

use business::application::catalog::load::LoadOptionsUseCaseImpl;
use business::application::comment::add::AddCommentUseCaseImpl;
use business::application::comment::list::ListCommentsUseCaseImpl;
use business::application::controller::{ControllerDeps, SelectionController};
use business::application::recipe::find::FindRecipeUseCaseImpl;
use business::application::recipe::vote::VoteRecipeUseCaseImpl;

use crate::api::controller::routes::ControllerApi;
use crate::api::health::routes::HealthApi;
use crate::config::backend_config::BackendConfig;
use crate::config::controller_config::ControllerConfig;
use crate::config::error::ConfigError;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub controller_api: ControllerApi,
    pub controller: Arc<SelectionController>,
}

impl DependencyContainer {
    pub fn new(backend: &BackendConfig, settings: ControllerConfig) -> anyhow::Result<Self> {
        let client = RecipeApiClient::new(&backend.base_url, backend.timeout)
            .map_err(|err| ConfigError::InvalidBaseUrl(format!("{}: {}", backend.base_url, err)))?;

        // Infrastructure adapters
        let catalog = Arc::new(IngredientCatalogHttp::new(client.clone()));
        let finder = Arc::new(RecipeFinderHttp::new(client.clone()));
        let voter = Arc::new(RecipeVoterHttp::new(client.clone()));
        let comments = Arc::new(CommentServiceHttp::new(client));

        // Use cases
        let load_options = Arc::new(LoadOptionsUseCaseImpl {
            catalog,
            logger: Arc::new(TracingLogger::new("catalog")),
        });
        let find_recipe = Arc::new(FindRecipeUseCaseImpl {
            finder,
            logger: Arc::new(TracingLogger::new("recipe")),
        });
        let vote_recipe = Arc::new(VoteRecipeUseCaseImpl {
            voter,
            logger: Arc::new(TracingLogger::new("feedback")),
        });
        let comment_logger = Arc::new(TracingLogger::new("comment"));
        let list_comments = Arc::new(ListCommentsUseCaseImpl {
            comments: comments.clone(),
            logger: comment_logger.clone(),
        });
        let add_comment = Arc::new(AddCommentUseCaseImpl {
            comments,
            logger: comment_logger,
        });

        let controller = Arc::new(SelectionController::new(
            ControllerDeps {
                load_options,
                find_recipe,
                vote_recipe,
                list_comments,
                add_comment,
                logger: Arc::new(TracingLogger::new("controller")),
            },
            settings.ordering,
        ));

        Ok(Self::from_controller(controller))
    }

    pub fn from_controller(controller: Arc<SelectionController>) -> Self {
        Self {
            health_api: HealthApi::new(controller.clone()),
            controller_api: ControllerApi::new(controller.clone()),
            controller,
        }
    }
}

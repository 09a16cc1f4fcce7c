use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::OptionSets;
use crate::domain::catalog::services::IngredientCatalogService;
use crate::domain::catalog::use_cases::load::{LoadOptionsParams, LoadOptionsUseCase};
use crate::domain::logger::Logger;

pub struct LoadOptionsUseCaseImpl {
    pub catalog: Arc<dyn IngredientCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadOptionsUseCase for LoadOptionsUseCaseImpl {
    async fn execute(&self, params: LoadOptionsParams) -> Result<OptionSets, CatalogError> {
        self.logger.info("Loading ingredient options");

        let result = tokio::try_join!(
            self.catalog.vegetables(params.vegetable_limit),
            self.catalog.proteins(),
            self.catalog.flavors(),
        );

        match result {
            Ok((vegetables, proteins, flavors)) => {
                self.logger.info(&format!(
                    "Loaded {} vegetables, {} proteins, {} flavors",
                    vegetables.len(),
                    proteins.len(),
                    flavors.len()
                ));
                Ok(OptionSets {
                    vegetables,
                    proteins,
                    flavors,
                })
            }
            Err(err) => {
                self.logger
                    .error(&format!("Failed to load ingredient options: {}", err));
                Err(err.into())
            }
        }
    }
}

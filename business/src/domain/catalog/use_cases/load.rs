use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::OptionSets;

#[derive(Debug, Clone)]
pub struct LoadOptionsParams {
    pub vegetable_limit: u32,
}

impl Default for LoadOptionsParams {
    fn default() -> Self {
        Self {
            vegetable_limit: 100,
        }
    }
}

#[async_trait]
pub trait LoadOptionsUseCase: Send + Sync {
    async fn execute(&self, params: LoadOptionsParams) -> Result<OptionSets, CatalogError>;
}

use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::OptionSet;

/// Service port for fetching the selectable ingredient and flavor lists.
#[async_trait]
pub trait IngredientCatalogService: Send + Sync {
    async fn vegetables(&self, limit: u32) -> Result<OptionSet, GatewayError>;
    async fn proteins(&self) -> Result<OptionSet, GatewayError>;
    async fn flavors(&self) -> Result<OptionSet, GatewayError>;
}

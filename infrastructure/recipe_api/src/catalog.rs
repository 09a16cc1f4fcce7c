use async_trait::async_trait;
use serde::de::DeserializeOwned;

use business::domain::catalog::model::{IngredientOption, OptionSet};
use business::domain::catalog::services::IngredientCatalogService;
use business::domain::errors::GatewayError;

use crate::client::RecipeApiClient;
use crate::dto::{FlavorItem, ItemsPage, ProteinItem, VegetableItem};

/// Reads the option lists from `/vegetables`, `/proteins` and `/flavors`.
pub struct IngredientCatalogHttp {
    client: RecipeApiClient,
}

impl IngredientCatalogHttp {
    pub fn new(client: RecipeApiClient) -> Self {
        Self { client }
    }

    async fn fetch<T>(&self, path: &str, query: &[(&str, String)]) -> Result<OptionSet, GatewayError>
    where
        T: DeserializeOwned + Into<IngredientOption>,
    {
        let request = self.client.client.get(self.client.endpoint(path)).query(query);
        let page: ItemsPage<T> = self.client.send_json(request).await?;

        Ok(OptionSet::new(page.items.into_iter().map(Into::into).collect()))
    }
}

#[async_trait]
impl IngredientCatalogService for IngredientCatalogHttp {
    async fn vegetables(&self, limit: u32) -> Result<OptionSet, GatewayError> {
        self.fetch::<VegetableItem>("vegetables", &[("limit", limit.to_string())])
            .await
    }

    async fn proteins(&self) -> Result<OptionSet, GatewayError> {
        self.fetch::<ProteinItem>("proteins", &[]).await
    }

    async fn flavors(&self) -> Result<OptionSet, GatewayError> {
        self.fetch::<FlavorItem>("flavors", &[]).await
    }
}

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use business::domain::errors::GatewayError;

/// Shared HTTP client for the recipe backend.
#[derive(Debug, Clone)]
pub struct RecipeApiClient {
    pub client: Client,
    pub base_url: String,
}

impl RecipeApiClient {
    /// Builds a client for `base_url`. No timeout is applied unless one is given.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, url::ParseError> {
        let parsed = Url::parse(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_default();

        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the absolute URL for `path` under the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Returns the URL of `action/{id}`, with the id escaped as one path segment.
    pub fn resource(&self, action: &str, id: &str) -> String {
        let id = url::form_urlencoded::byte_serialize(id.as_bytes())
            .collect::<String>()
            .replace('+', "%20");
        self.endpoint(&format!("{}/{}", action, id))
    }

    /// Sends the request and decodes a JSON body.
    ///
    /// 404 maps to [`GatewayError::NotFound`], any other non-success status to
    /// [`GatewayError::Status`].
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, GatewayError> {
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(GatewayError::not_found());
        }
        if !status.is_success() {
            return Err(GatewayError::status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| GatewayError::decode(e.to_string()))
    }
}

use crate::domain::errors::GatewayError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// Network or HTTP level failure; carries the transport detail.
    #[error("catalog.http: {0}")]
    Http(String),
    #[error("catalog.unknown")]
    Unknown,
}

impl From<GatewayError> for CatalogError {
    fn from(err: GatewayError) -> Self {
        if err.is_http() {
            CatalogError::Http(err.to_string())
        } else {
            CatalogError::Unknown
        }
    }
}

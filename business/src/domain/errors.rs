/// Errors raised by adapters that talk to the recipe backend.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced a response (connect, DNS, reset, timeout).
    #[error("gateway.transport: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("gateway.status: {0}")]
    Status(u16),
    #[error("gateway.not_found")]
    NotFound,
    /// The response body did not have the expected shape.
    #[error("gateway.decode: {0}")]
    Decode(String),
}

impl GatewayError {
    pub fn transport(detail: impl Into<String>) -> Self {
        GatewayError::Transport(detail.into())
    }
    pub fn status(code: u16) -> Self {
        GatewayError::Status(code)
    }
    pub fn not_found() -> Self {
        GatewayError::NotFound
    }
    pub fn decode(detail: impl Into<String>) -> Self {
        GatewayError::Decode(detail.into())
    }

    /// True when the failure happened at the network/HTTP level.
    pub fn is_http(&self) -> bool {
        !matches!(self, GatewayError::Decode(_))
    }
}

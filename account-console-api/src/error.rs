use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl GatewayError {
    /// Short, stable name of the failure class, for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::TransportError(_) => "transport",
            GatewayError::NotFound(_) => "not_found",
            GatewayError::ValidationError(_) => "validation",
        }
    }

    /// The message carried by the error, without the class prefix.
    pub fn detail(&self) -> &str {
        match self {
            GatewayError::TransportError(msg)
            | GatewayError::NotFound(msg)
            | GatewayError::ValidationError(msg) => msg,
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

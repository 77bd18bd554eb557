use thiserror::Error;

/// Failure reported by one of the external version services.
///
/// The operations crate wraps these with the lookup that produced them, so
/// the message here only describes what the service itself said.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

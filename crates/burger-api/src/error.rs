use serde_json::Value;
use thiserror::Error;

/// Error types for API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client error
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The response body did not have the shape the caller decoded it into
    #[error("Unexpected response body: {0}")]
    UnexpectedBody(String),

    /// A response contract was not met
    #[error(transparent)]
    Contract(#[from] ContractViolation),
}

/// A response that does not match the contract it was verified against.
///
/// Each variant keeps enough of the response to diagnose the failure
/// without re-running the request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContractViolation {
    #[error("Expected status {expected} but got {actual}; body: {body}")]
    StatusMismatch { expected: u16, actual: u16, body: Value },

    #[error("Missing field `{field}`; body: {body}")]
    MissingField { field: String, body: Value },

    #[error("Field `{field}` should be absent; body: {body}")]
    UnexpectedField { field: String, body: Value },

    #[error("Field `{field}` is {actual}, expected {expected}")]
    FieldMismatch { field: String, expected: Value, actual: Value },

    #[error("Field `{field}` is {actual}, expected a value of type {expected}")]
    TypeMismatch { field: String, expected: &'static str, actual: Value },
}

pub type ApiResult<T> = Result<T, ApiError>;

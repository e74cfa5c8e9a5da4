use burger_api::{ApiError, ContractViolation};
use thiserror::Error;

/// Error types for the test utilities
#[derive(Debug, Error)]
pub enum TestError {
    /// API client error
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A response contract was not met
    #[error("Contract violation: {0}")]
    Contract(#[from] ContractViolation),

    /// Timeout error
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Test setup failed
    #[error("Test setup failed: {0}")]
    Setup(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

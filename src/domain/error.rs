use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A state-machine rule rejected the requested operation
    /// (e.g. paying an already-settled boleto)
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

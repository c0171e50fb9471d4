use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] webinvite_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] webinvite_core::error::CoreError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),

    #[error("Editing session was closed")]
    Cancelled,
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

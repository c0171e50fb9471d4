use salvo::http::StatusCode;
use thiserror::Error;
use webinvite_db::error::DbError;
use webinvite_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    DatabaseError(#[from] DbError),

    #[error(transparent)]
    CoreError(#[from] webinvite_core::error::CoreError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// HTTP status reported for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::ServiceError(ServiceError::ValidationError(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_)
            | Self::ServiceError(
                ServiceError::NotFound(_)
                | ServiceError::DatabaseError(DbError::NotFound { .. }),
            )
            | Self::DatabaseError(DbError::NotFound { .. }) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use uuid::Uuid;
    use webinvite_db::db::Table;

    use super::*;

    #[test]
    fn test_status_codes() {
        let validation: AppError = ServiceError::ValidationError("name".into()).into();
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);

        let missing: AppError = ServiceError::from(DbError::NotFound {
            table: Table::Guests,
            id: Uuid::nil(),
        })
        .into();
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let down: AppError = DbError::Unavailable("down".into()).into();
        assert_eq!(down.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

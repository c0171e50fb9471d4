use thiserror::Error;

use crate::db::Table;

/// Database layer errors
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),

    #[error("Pool error: {0}")]
    PoolError(#[from] diesel_async::pooled_connection::bb8::RunError),

    #[error("Row serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Local storage error: {0}")]
    StorageError(#[from] std::io::Error),

    #[error("Row not found: table={table}, id={id}")]
    NotFound { table: Table, id: uuid::Uuid },

    #[error("Invalid row for {table}: {reason}")]
    InvalidRow { table: Table, reason: String },

    #[error("Filter on `{column}` is not supported for table {table}")]
    UnsupportedFilter { table: Table, column: &'static str },

    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    CoreError(#[from] webinvite_core::error::CoreError),
}

pub type DbResult<T> = std::result::Result<T, DbError>;

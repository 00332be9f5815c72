//! Storage-specific error type wrapping sqlx errors.

use geostore_domain::error::GeoStoreError;

/// Errors originating from the `PostgreSQL` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No connection could be obtained from the pool.
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// A statement failed once a connection was held.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => Self::Unavailable(err),
            other => Self::Database(other),
        }
    }
}

impl From<StorageError> for GeoStoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Unavailable(_) => Self::Unavailable(Box::new(err)),
            StorageError::Database(_) | StorageError::Migration(_) => Self::Storage(Box::new(err)),
        }
    }
}

//! Storage-specific error type wrapping sqlx errors.

use surveyhub_domain::error::SurveyError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query, connection or commit failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for SurveyError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

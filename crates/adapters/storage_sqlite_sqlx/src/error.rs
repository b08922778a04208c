//! Storage-specific error type wrapping sqlx errors.

use devman_domain::error::{ConflictError, DevManError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for DevManError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Translate a write failure into the domain taxonomy.
///
/// Unique-index violations become the matching [`ConflictError`] so a race
/// that slips past the handler pre-check still surfaces as a conflict, not
/// as an opaque storage fault. SQLite names the violated columns in the
/// message, e.g. `UNIQUE constraint failed: devices.serial`.
pub(crate) fn write_error(err: sqlx::Error) -> DevManError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            let message = db.message();
            if message.contains("clients.email") {
                return ConflictError::DuplicateEmail.into();
            }
            if message.contains("devices.serial") {
                return ConflictError::DuplicateSerialNumber.into();
            }
            if message.contains("devices.imei") {
                return ConflictError::DuplicateImei.into();
            }
        }
    }
    StorageError::Database(err).into()
}

//! Error types shared by the session and the persistence layer. Validation
//! failures carry the exact sentence the UI shows in its alert popup, while
//! storage failures name the operation that broke so the log file stays useful.

use thiserror::Error;

/// Rejected compute request. Weight is always checked before height, so at most
/// one variant is reported per attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Weight must be a valid positive number")]
    InvalidWeight,
    #[error("Height must be valid positive number")]
    InvalidHeight,
}

/// Failure while talking to the embedded SQLite database.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create data directory: {0}")]
    DataDir(#[from] std::io::Error),
    #[error("failed to open SQLite database: {0}")]
    Open(#[source] rusqlite::Error),
    #[error("failed to create bmis table: {0}")]
    Schema(#[source] rusqlite::Error),
    #[error("failed to insert measurement: {0}")]
    Insert(#[source] rusqlite::Error),
    #[error("failed to load measurements: {0}")]
    Query(#[source] rusqlite::Error),
}

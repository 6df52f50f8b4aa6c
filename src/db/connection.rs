use std::fs;
use std::path::Path;

use rusqlite::Connection;
use tracing::debug;

use crate::error::StorageError;

/// Open (or create) the SQLite file at `path`, creating its parent directory on
/// demand so stores opened outside `AppPaths` work too. The schema is not
/// touched here; callers run `ensure_schema` next.
pub(crate) fn open_file(path: &Path) -> Result<Connection, StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    debug!(path = %path.display(), "opening measurement database");
    Connection::open(path).map_err(StorageError::Open)
}

/// Private in-memory database, used by tests and throwaway sessions.
pub(crate) fn open_memory() -> Result<Connection, StorageError> {
    Connection::open_in_memory().map_err(StorageError::Open)
}

/// Create the `bmis` table if it does not exist yet. Running it again against
/// an initialized database is a no-op.
pub(crate) fn ensure_schema(conn: &Connection) -> Result<(), StorageError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS bmis (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            bmi REAL,
            weight REAL,
            height REAL,
            bmiDate REAL
        )",
        [],
    )
    .map_err(StorageError::Schema)?;

    Ok(())
}

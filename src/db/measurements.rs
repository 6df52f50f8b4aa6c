use std::path::Path;

use rusqlite::{params, Connection};
use tracing::info;

use crate::error::StorageError;
use crate::models::Measurement;

use super::connection::{ensure_schema, open_file, open_memory};

/// Append-only log of BMI measurements backed by a single SQLite connection.
/// The store is constructed explicitly and handed to the session that owns it.
pub struct MeasurementStore {
    conn: Connection,
}

impl MeasurementStore {
    /// Open the database file at `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = open_file(path.as_ref())?;
        Ok(Self { conn })
    }

    /// Store that lives only as long as the process.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            conn: open_memory()?,
        })
    }

    /// Idempotently create the `bmis` table.
    pub fn ensure_schema(&self) -> Result<(), StorageError> {
        ensure_schema(&self.conn)
    }

    /// Insert one measurement stamped with SQLite's `date('now')`. The new row
    /// id is returned for logging only; callers re-query to display history.
    pub fn append(&self, bmi: f64, weight: f64, height: f64) -> Result<i64, StorageError> {
        self.conn
            .execute(
                "INSERT INTO bmis (bmi, weight, height, bmiDate) VALUES (?1, ?2, ?3, date('now'))",
                params![bmi, weight, height],
            )
            .map_err(StorageError::Insert)?;

        let id = self.conn.last_insert_rowid();
        info!(id, bmi, weight, height, "stored measurement");
        Ok(id)
    }

    /// Every measurement, newest first. An empty table yields an empty vector.
    pub fn list_all(&self) -> Result<Vec<Measurement>, StorageError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, bmi, weight, height, date(bmiDate) AS bmiDate
                 FROM bmis
                 ORDER BY id DESC",
            )
            .map_err(StorageError::Query)?;

        let measurements = stmt
            .query_map([], |row| {
                Ok(Measurement {
                    id: row.get(0)?,
                    bmi: row.get(1)?,
                    weight: row.get(2)?,
                    height: row.get(3)?,
                    recorded_on: row.get(4)?,
                })
            })
            .map_err(StorageError::Query)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(StorageError::Query)?;

        Ok(measurements)
    }
}

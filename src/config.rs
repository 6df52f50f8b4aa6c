use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".bmi-tracker";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "bmi.sqlite";
/// Subdirectory that receives the rolling log files.
const LOG_DIR_NAME: &str = "logs";

/// On-disk locations the application reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
}

impl AppPaths {
    /// Resolve the default layout inside the user's home directory.
    pub fn resolve() -> Result<Self> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        Ok(Self::rooted_at(base_dirs.home_dir().join(DATA_DIR_NAME)))
    }

    /// Lay out the database and log directory beneath an explicit data dir.
    pub fn rooted_at(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            db_path: data_dir.join(DB_FILE_NAME),
            log_dir: data_dir.join(LOG_DIR_NAME),
            data_dir,
        }
    }

    /// Create the log directory (and with it the data directory) if missing.
    /// The database file's own parent is created by `MeasurementStore::open`.
    pub fn create_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.log_dir).context("failed to create log directory")
    }
}

//! Binary entry point that glues the SQLite-backed measurement log to the TUI.
use anyhow::Context;
use bmi_tracker::config::AppPaths;
use bmi_tracker::logging::init_tracing;
use bmi_tracker::{run_app, App, BmiSession, MeasurementStore};
use tracing::info;

/// Bring up logging and persistence, then drive the Ratatui event loop until
/// the user exits. Any failure before the loop starts is fatal.
fn main() -> anyhow::Result<()> {
    let paths = AppPaths::resolve()?;
    paths.create_dirs()?;
    let _log_guard = init_tracing(&paths.log_dir)?;
    info!(db = %paths.db_path.display(), "starting bmi-tracker");

    let store = MeasurementStore::open(&paths.db_path)?;
    let session = BmiSession::start(store).context("failed to initialize measurement store")?;

    let mut app = App::new(session);
    run_app(&mut app)
}

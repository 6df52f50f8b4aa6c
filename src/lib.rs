//! Core library surface for the BMI Tracker TUI application.
//!
//! The binary only wires these pieces together: resolve paths, start logging,
//! open the measurement store, hand it to a session and run the event loop.
pub mod bmi;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod session;
pub mod ui;

/// The explicitly constructed persistence handle.
pub use db::MeasurementStore;

pub use error::{StorageError, ValidationError};
pub use models::{BmiReading, Category, Measurement};
pub use session::{BmiSession, ComputeOutcome, SessionState};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};

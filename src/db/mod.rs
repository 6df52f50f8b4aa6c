//! Persistence module: connection bootstrap plus the measurement log.

mod connection;
mod measurements;

pub use measurements::MeasurementStore;

//! Ratatui front-end: a single screen with the measurement form, the result
//! area, the history list and a blocking alert popup.

mod app;
mod forms;
mod helpers;
mod history;
mod terminal;

pub use app::App;
pub use terminal::run_app;

//! Interactive Julia-set explorer for the terminal.
//!
//! - [`engine`]: escape-time iteration, viewport mapping and the color gradient
//! - [`app`]: viewport state machine driven by input events
//! - [`ui`]: ratatui/crossterm rendering and the blocking event loop

pub mod app;
pub mod cli;
pub mod engine;
pub mod error;
pub mod logging;
pub mod ui;

pub use error::AppError;

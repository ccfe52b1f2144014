//! Application state.
//!
//! - [`App`] - Host application state embedding the review
//! - [`AppConfig`] - Persistent preferences with load/save capabilities
//! - [`platform`] - Platform abstractions (browser, file locations)

mod app;
mod app_commands;
mod app_lifecycle;
pub mod config;
pub mod platform;

pub use app::App;
pub use config::AppConfig;

//! Platform-specific abstractions.
//!
//! - [`browser`] - Opening external URLs
//! - [`paths`] - Configuration and log file locations

pub mod browser;
pub mod paths;

pub use browser::{SystemBrowser, UrlOpener};
pub use paths::AppPaths;

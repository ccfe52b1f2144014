//! Log file setup.
//!
//! The terminal is owned by the UI, so logs go to a file in the data
//! directory. Verbosity comes from the `GAS_REVIEW_LOG` environment variable
//! using `tracing_subscriber` filter syntax, defaulting to `info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "GAS_REVIEW_LOG";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Builds the filter from `directives`, falling back to the default level
/// when they are missing or invalid.
#[must_use]
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs the global subscriber, appending to `log_file`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(log_file: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;
    let directives = std::env::var(LOG_ENV_VAR).ok();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("{e}"))?;

    tracing::debug!("Logging to {}", log_file.display());
    Ok(())
}

//! Handing URLs to the platform's default handler.
//!
//! Opening is fire-and-forget: the call returns once the handler has been
//! launched, without waiting for the browser.

use crate::domain::ReviewError;

// ============================================================================
// UrlOpener
// ============================================================================

/// Opens external URLs.
pub trait UrlOpener {
    /// Launches the platform handler for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::UrlOpen`] if no handler could be launched.
    fn open_url(&self, url: &str) -> Result<(), ReviewError>;
}

/// Opens URLs in the system's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open_url(&self, url: &str) -> Result<(), ReviewError> {
        tracing::debug!("Opening {url} in browser");
        open::that_detached(url).map_err(|e| ReviewError::url_open(url, e))
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Error types for the gas fee review component.
//!
//! The component itself never fails while rendering: missing strings are shown
//! as blanks. These errors cover the edges around it: parsing chain ids,
//! loading props files and handing URLs to the platform.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors raised by the collaborators surrounding the review component.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// The chain id is neither `0x`-prefixed hex nor decimal.
    #[error("Invalid chain id: '{0}'")]
    InvalidChainId(String),

    /// The platform refused to open an external URL.
    #[error("Failed to open {url}: {source}")]
    UrlOpen {
        /// The URL that was handed to the platform.
        url: String,
        /// The underlying platform error.
        #[source]
        source: std::io::Error,
    },

    /// A props file could not be read.
    #[error("Failed to read props file: {0}")]
    Io(#[from] std::io::Error),

    /// A props file was not valid JSON for [`ReviewProps`](crate::domain::ReviewProps).
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ReviewError {
    /// Create a new invalid chain id error.
    #[must_use]
    pub fn invalid_chain_id(chain_id: impl Into<String>) -> Self {
        Self::InvalidChainId(chain_id.into())
    }

    /// Create a new URL open error.
    #[must_use]
    pub fn url_open(url: impl Into<String>, source: std::io::Error) -> Self {
        Self::UrlOpen {
            url: url.into(),
            source,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Domain types for the gas fee review component.
//!
//! # Module Organization
//!
//! - [`error`] - Error types for the collaborators around the component
//! - [`fees`] - Pre-formatted fee strings, currency preference and rendering flags
//! - [`network`] - Chain id parsing and mainnet classification

// ============================================================================
// Module Declarations
// ============================================================================

pub mod error;
pub mod fees;
pub mod network;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::ReviewError;

pub use fees::{
    FeeDisplayBundle, PresentationFlags, PrimaryCurrency, ReviewProps, SelectionContext,
    TimeEstimate, TimeEstimateColor,
};

pub use network::{EthereumMainnet, MAINNET_CHAIN_ID, NetworkClassifier, parse_chain_id};

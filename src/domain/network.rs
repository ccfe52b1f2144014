//! Network classification for EVM chain ids.
//!
//! The review component only needs one fact about the network: whether the
//! chain id names Ethereum mainnet. Callers pass the chain id in explicitly and
//! choose the classifier; the component never looks it up on its own.

use crate::domain::error::ReviewError;

// ============================================================================
// Constants
// ============================================================================

/// Chain id of Ethereum mainnet.
pub const MAINNET_CHAIN_ID: u64 = 1;

// ============================================================================
// Chain Id Parsing
// ============================================================================

/// Parses a chain id written either as `0x`-prefixed hex or as decimal.
///
/// Surrounding whitespace is ignored. `"0x1"`, `"0X01"` and `"1"` all parse to
/// `1`.
///
/// # Errors
///
/// Returns [`ReviewError::InvalidChainId`] when the text is empty or not a
/// number in either notation.
pub fn parse_chain_id(chain_id: &str) -> Result<u64, ReviewError> {
    let trimmed = chain_id.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.map_err(|_| ReviewError::invalid_chain_id(chain_id))
}

// ============================================================================
// Classifier
// ============================================================================

/// Decides whether a chain id refers to the main network.
pub trait NetworkClassifier {
    /// Returns `true` when `chain_id` is the main network.
    fn is_mainnet(&self, chain_id: &str) -> bool;
}

/// Classifies Ethereum mainnet (chain id 1) as the main network.
///
/// Unparseable chain ids are treated as "not mainnet".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EthereumMainnet;

impl NetworkClassifier for EthereumMainnet {
    fn is_mainnet(&self, chain_id: &str) -> bool {
        match parse_chain_id(chain_id) {
            Ok(id) => id == MAINNET_CHAIN_ID,
            Err(e) => {
                tracing::debug!("Classifying as non-mainnet: {e}");
                false
            }
        }
    }
}

impl<F> NetworkClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_mainnet(&self, chain_id: &str) -> bool {
        self(chain_id)
    }
}

// ============================================================================
// Tests
// ============================================================================

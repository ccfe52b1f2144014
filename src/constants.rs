//! Constants for the gas fee review component.
//!
//! Display strings, symbols and UI dimensions live here so the widget, the
//! info modal and the host application agree on them.

use std::time::Duration;

// ============================================================================
// Currency Constants
// ============================================================================

/// Symbol of the native currency. A primary currency preference equal to
/// this symbol selects native-first display.
pub const NATIVE_CURRENCY_SYMBOL: &str = "ETH";

/// Preference string for converted-currency-first display.
pub const FIAT_CURRENCY_LABEL: &str = "Fiat";

// ============================================================================
// Display Strings
// ============================================================================

/// Title of the fee row when the wallet estimated the fee itself.
pub const ESTIMATED_GAS_FEE_TITLE: &str = "Estimated gas fee";

/// Suffix of the fee row title when a dapp suggested the fee.
pub const SUGGESTED_GAS_FEE_SUFFIX: &str = "suggested gas fee";

/// Marker drawn after the fee title; clicking it opens the info modal.
pub const INFO_MARKER: &str = "ⓘ";

/// Label in front of the maximum gas fee.
pub const MAX_FEE_LABEL: &str = "Max fee:";

/// Title of the total row.
pub const TOTAL_LABEL: &str = "Total";

/// Label in front of the maximum total.
pub const MAX_AMOUNT_LABEL: &str = "Max amount:";

// ============================================================================
// Info Modal
// ============================================================================

/// Title of the gas fee info modal.
pub const INFO_MODAL_TITLE: &str = "Estimated gas fee tooltip";

/// Body text of the gas fee info modal. Lines are separated by `\n`.
pub const INFO_MODAL_BODY: &str = "Estimated gas fee tooltip: Gas fees are paid to crypto miners who process transactions on the Ethereum network.\n\
MetaMask does not profit from gas fees.\n\
\n\
Gas fees are set by the network and fluctuate based on network traffic and transaction complexity.";

/// Label of the outbound link in the info modal.
pub const LEARN_MORE_LABEL: &str = "Learn more about gas fees";

/// Article opened by the info modal link.
pub const LEARN_MORE_URL: &str =
    "https://community.metamask.io/t/what-is-gas-why-do-transactions-take-so-long/3172";

// ============================================================================
// UI Dimension Constants
// ============================================================================

/// Horizontal margin around the summary when margins are enabled.
pub const SUMMARY_MARGIN: u16 = 2;

/// Gap between the secondary and primary amounts on one row.
pub const AMOUNT_GAP: u16 = 2;

/// Width of the info modal.
pub const INFO_MODAL_WIDTH: u16 = 64;

/// Number of frames a toast stays visible.
pub const TOAST_FRAMES: u16 = 20;

/// How often the host loop redraws without input.
pub const TICK_RATE: Duration = Duration::from_millis(100);

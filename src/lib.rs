//! Gas fee review for EIP-1559 transaction confirmation screens.
//!
//! The [`review::GasFeeReview`] component renders the estimated and maximum
//! gas fee, the transaction total and an info modal explaining gas fees. It
//! picks which denomination (native or fiat) is shown prominently from the
//! user's preference and the network, and reports edit requests to its host.
//!
//! The rest of the crate is the host terminal application around it.

pub mod cli;
pub mod commands;
pub mod constants;
pub mod domain;
pub mod logging;
pub mod review;
pub mod state;
pub mod theme;
pub mod tui;
pub mod ui;
pub mod widgets;

#[cfg(test)]
mod test_utils;

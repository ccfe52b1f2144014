//! Widgets for the review screen.
//!
//! - [`summary`]: Generic labeled rows with clickable spans
//! - [`gas_fee`]: The gas fee section built on [`summary`]

pub mod gas_fee;
pub mod summary;

pub use gas_fee::{GasFeeSummary, GasFeeSummaryState, Hotspot, gas_fee_title};
pub use summary::{Summary, SummaryRow, SummaryState};

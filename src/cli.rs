//! Command line interface of the review binary.
//!
//! Props are assembled in layers: saved preferences first, then an optional
//! JSON props file, then individual flags.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{PrimaryCurrency, ReviewError, ReviewProps, TimeEstimateColor};
use crate::state::AppConfig;
use crate::tui::TerminalOptions;

/// Terminal gas fee review for EIP-1559 transactions
#[derive(Debug, Default, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON file with the review props (camelCase keys)
    #[arg(long, value_name = "FILE")]
    pub props: Option<PathBuf>,

    /// Chain id, hex ("0x1") or decimal ("1")
    #[arg(long)]
    pub chain_id: Option<String>,

    /// Preferred currency: "ETH" for native, anything else for fiat
    #[arg(long)]
    pub primary_currency: Option<PrimaryCurrency>,

    /// Estimated gas fee in the native currency
    #[arg(long)]
    pub gas_fee_native: Option<String>,

    /// Estimated gas fee converted to fiat
    #[arg(long)]
    pub gas_fee_conversion: Option<String>,

    /// Maximum gas fee in the native currency
    #[arg(long)]
    pub gas_fee_max_native: Option<String>,

    /// Maximum gas fee converted to fiat
    #[arg(long)]
    pub gas_fee_max_conversion: Option<String>,

    /// Amount plus estimated fee in the native currency
    #[arg(long)]
    pub total_native: Option<String>,

    /// Amount plus estimated fee converted to fiat
    #[arg(long)]
    pub total_conversion: Option<String>,

    /// Amount plus maximum fee in the native currency
    #[arg(long)]
    pub total_max_native: Option<String>,

    /// Time estimate text, e.g. "Likely in < 30 seconds"
    #[arg(long)]
    pub time_estimate: Option<String>,

    /// Time estimate color: green, red, or anything else for neutral
    #[arg(long)]
    pub time_estimate_color: Option<TimeEstimateColor>,

    /// Hostname of the dapp that suggested the fee
    #[arg(long)]
    pub origin: Option<String>,

    /// Hide the total section
    #[arg(long)]
    pub hide_total: bool,

    /// Render without horizontal margins
    #[arg(long)]
    pub no_margin: bool,

    /// Leave the mouse to the terminal; drive the review with keys only
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Terminal features to request for this run.
    #[must_use]
    pub fn terminal_options(&self) -> TerminalOptions {
        TerminalOptions {
            mouse_capture: !self.no_mouse,
        }
    }

    /// Builds the props to review.
    ///
    /// # Errors
    ///
    /// Returns an error if the props file cannot be read or parsed.
    pub fn build_props(&self, config: &AppConfig) -> Result<ReviewProps, ReviewError> {
        let mut props = match &self.props {
            Some(path) => {
                tracing::info!("Loading props from {}", path.display());
                ReviewProps::from_file(path)?
            }
            None => {
                let mut props = ReviewProps::default();
                props.selection.primary_currency = config.primary_currency;
                props.flags.no_margin = config.no_margin;
                props
            }
        };
        if props.selection.chain_id.trim().is_empty() {
            props.selection.chain_id.clone_from(&config.chain_id);
        }

        let fees = &mut props.fees;
        for (slot, flag) in [
            (&mut fees.gas_fee_native, &self.gas_fee_native),
            (&mut fees.gas_fee_conversion, &self.gas_fee_conversion),
            (&mut fees.gas_fee_max_native, &self.gas_fee_max_native),
            (&mut fees.gas_fee_max_conversion, &self.gas_fee_max_conversion),
            (&mut fees.total_native, &self.total_native),
            (&mut fees.total_conversion, &self.total_conversion),
            (&mut fees.total_max_native, &self.total_max_native),
        ] {
            if flag.is_some() {
                slot.clone_from(flag);
            }
        }

        if let Some(chain_id) = &self.chain_id {
            props.selection.chain_id.clone_from(chain_id);
        }
        if let Some(currency) = self.primary_currency {
            props.selection.primary_currency = currency;
        }
        if let Some(time_estimate) = &self.time_estimate {
            props.time.time_estimate.clone_from(time_estimate);
        }
        if let Some(color) = self.time_estimate_color {
            props.time.time_estimate_color = color;
        }
        if self.origin.is_some() {
            props.flags.origin.clone_from(&self.origin);
        }
        props.flags.hide_total |= self.hide_total;
        props.flags.no_margin |= self.no_margin;

        Ok(props)
    }
}

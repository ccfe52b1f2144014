//! Inputs of the gas fee review component.
//!
//! Everything here arrives pre-formatted from the caller on every render. The
//! component never parses amounts, rounds them, or checks that the native and
//! converted strings agree with each other.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{FIAT_CURRENCY_LABEL, NATIVE_CURRENCY_SYMBOL};

// ============================================================================
// Primary Currency
// ============================================================================

/// The user's preferred denomination for the dominant amount.
///
/// Parsed from the preference string the wallet stores: the native symbol
/// (`"ETH"`) selects [`PrimaryCurrency::Native`], anything else selects
/// [`PrimaryCurrency::Fiat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PrimaryCurrency {
    /// The chain's own unit.
    #[default]
    Native,
    /// The converted display currency.
    Fiat,
}

impl PrimaryCurrency {
    /// Returns the preference string for this currency.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Native => NATIVE_CURRENCY_SYMBOL,
            Self::Fiat => FIAT_CURRENCY_LABEL,
        }
    }

    /// Returns the other preference.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Native => Self::Fiat,
            Self::Fiat => Self::Native,
        }
    }
}

impl From<&str> for PrimaryCurrency {
    fn from(value: &str) -> Self {
        if value == NATIVE_CURRENCY_SYMBOL {
            Self::Native
        } else {
            Self::Fiat
        }
    }
}

impl From<String> for PrimaryCurrency {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<PrimaryCurrency> for String {
    fn from(value: PrimaryCurrency) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for PrimaryCurrency {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for PrimaryCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Time Estimate
// ============================================================================

/// Color hint for the time estimate, chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeEstimateColor {
    /// Likely fast.
    Green,
    /// Likely slow or stuck.
    Red,
    /// No emphasis.
    #[default]
    Neutral,
}

impl TimeEstimateColor {
    /// Returns the lowercase name of the color.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Neutral => "neutral",
        }
    }
}

impl From<&str> for TimeEstimateColor {
    fn from(value: &str) -> Self {
        match value {
            "green" => Self::Green,
            "red" => Self::Red,
            _ => Self::Neutral,
        }
    }
}

impl From<String> for TimeEstimateColor {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<TimeEstimateColor> for String {
    fn from(value: TimeEstimateColor) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for TimeEstimateColor {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Human-readable time estimate and its color hint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeEstimate {
    /// Display text, e.g. `"Likely in < 30 seconds"`.
    pub time_estimate: String,
    /// Color the text is rendered in.
    pub time_estimate_color: TimeEstimateColor,
}

// ============================================================================
// Fee Strings
// ============================================================================

/// Pre-formatted fee and total amounts in both denominations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeeDisplayBundle {
    /// Estimated gas fee in native currency.
    pub gas_fee_native: Option<String>,
    /// Estimated gas fee converted to the display currency.
    pub gas_fee_conversion: Option<String>,
    /// Maximum gas fee in native currency.
    pub gas_fee_max_native: Option<String>,
    /// Maximum gas fee converted to the display currency.
    pub gas_fee_max_conversion: Option<String>,
    /// Amount plus estimated fee in native currency.
    pub total_native: Option<String>,
    /// Amount plus estimated fee converted to the display currency.
    pub total_conversion: Option<String>,
    /// Amount plus maximum fee in native currency.
    pub total_max_native: Option<String>,
}

// ============================================================================
// Selection And Presentation
// ============================================================================

/// Inputs that decide which denomination is primary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionContext {
    /// The user's preferred denomination.
    pub primary_currency: PrimaryCurrency,
    /// Chain id of the network the transaction targets.
    pub chain_id: String,
}

/// Pure rendering toggles.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresentationFlags {
    /// Omit the total and max-amount rows.
    pub hide_total: bool,
    /// Drop the horizontal margin around the summary.
    pub no_margin: bool,
    /// Hostname of the dapp that suggested the fee.
    pub origin: Option<String>,
}

impl PresentationFlags {
    /// Returns the origin, treating an empty string as absent.
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref().filter(|origin| !origin.is_empty())
    }
}

// ============================================================================
// Review Props
// ============================================================================

/// Everything the review component needs for one render.
///
/// Serialized flat with camelCase keys, so a props file looks like:
///
/// ```text
/// {
///   "chainId": "0x1",
///   "primaryCurrency": "ETH",
///   "gasFeeNative": "0.002 ETH",
///   "gasFeeConversion": "$4.00",
///   "timeEstimate": "Likely in < 30 seconds",
///   "timeEstimateColor": "green"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewProps {
    /// Fee and total strings.
    #[serde(flatten)]
    pub fees: FeeDisplayBundle,
    /// Currency preference and chain id.
    #[serde(flatten)]
    pub selection: SelectionContext,
    /// Rendering toggles.
    #[serde(flatten)]
    pub flags: PresentationFlags,
    /// Time estimate row content.
    #[serde(flatten)]
    pub time: TimeEstimate,
}

impl ReviewProps {
    /// Parses props from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Parse`](crate::domain::ReviewError::Parse) when
    /// the text is not a JSON object of the expected shape.
    pub fn from_json(json: &str) -> Result<Self, crate::domain::ReviewError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads props from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, crate::domain::ReviewError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

// ============================================================================
// Tests
// ============================================================================

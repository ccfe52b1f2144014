//! Primary/secondary selection for the fee amounts.
//!
//! Off mainnet there is no meaningful converted currency, so native amounts
//! are always primary there regardless of the user's preference.

use crate::domain::{NetworkClassifier, PrimaryCurrency, ReviewProps};

// ============================================================================
// Resolved Values
// ============================================================================

/// One amount in the dominant position and its counterpart in the other
/// denomination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayPair {
    /// Amount shown in the dominant position.
    pub primary: Option<String>,
    /// Amount in the other denomination.
    pub secondary: Option<String>,
}

impl DisplayPair {
    fn new(primary: &Option<String>, secondary: &Option<String>) -> Self {
        Self {
            primary: primary.clone(),
            secondary: secondary.clone(),
        }
    }

    /// Primary text, empty when absent.
    #[must_use]
    pub fn primary_text(&self) -> &str {
        self.primary.as_deref().unwrap_or_default()
    }

    /// Secondary text, empty when absent.
    #[must_use]
    pub fn secondary_text(&self) -> &str {
        self.secondary.as_deref().unwrap_or_default()
    }
}

/// The amounts of one review, partitioned into primary and secondary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedDisplay {
    /// Whether the chain id classified as mainnet.
    pub is_mainnet: bool,
    /// Whether native amounts are primary.
    pub native_selected: bool,
    /// Estimated gas fee.
    pub gas_fee: DisplayPair,
    /// Maximum gas fee.
    pub gas_fee_max: DisplayPair,
    /// Amount plus estimated fee.
    pub total: DisplayPair,
    /// Amount plus maximum fee.
    pub total_max: DisplayPair,
}

impl ResolvedDisplay {
    /// Whether the secondary amounts are shown at all.
    #[must_use]
    pub const fn shows_secondary(&self) -> bool {
        self.is_mainnet
    }

    /// Whether the primary gas fee is the converted amount, which carries the
    /// edit affordance.
    #[must_use]
    pub const fn primary_is_editable(&self) -> bool {
        !self.native_selected
    }

    /// Whether the secondary gas fee is visible and is the converted amount.
    #[must_use]
    pub const fn secondary_is_editable(&self) -> bool {
        self.shows_secondary() && self.native_selected
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Partitions the fee strings of `props` into primary and secondary amounts.
///
/// Native amounts are primary when the preference is the native currency or
/// when `classifier` does not recognise the chain as mainnet.
#[must_use]
pub fn resolve_primary(props: &ReviewProps, classifier: &impl NetworkClassifier) -> ResolvedDisplay {
    let is_mainnet = classifier.is_mainnet(&props.selection.chain_id);
    let native_selected =
        props.selection.primary_currency == PrimaryCurrency::Native || !is_mainnet;
    let fees = &props.fees;

    tracing::debug!(
        chain_id = %props.selection.chain_id,
        is_mainnet,
        native_selected,
        "Resolved primary currency"
    );

    if native_selected {
        ResolvedDisplay {
            is_mainnet,
            native_selected,
            gas_fee: DisplayPair::new(&fees.gas_fee_native, &fees.gas_fee_conversion),
            gas_fee_max: DisplayPair::new(&fees.gas_fee_max_native, &fees.gas_fee_max_conversion),
            total: DisplayPair::new(&fees.total_native, &fees.total_conversion),
            total_max: DisplayPair::new(&fees.total_max_native, &None),
        }
    } else {
        ResolvedDisplay {
            is_mainnet,
            native_selected,
            gas_fee: DisplayPair::new(&fees.gas_fee_conversion, &fees.gas_fee_native),
            gas_fee_max: DisplayPair::new(&fees.gas_fee_max_conversion, &fees.gas_fee_max_native),
            total: DisplayPair::new(&fees.total_conversion, &fees.total_native),
            // No converted max total is supplied; the converted max gas fee
            // stands in for it. See DESIGN.md before changing.
            total_max: DisplayPair::new(&fees.gas_fee_max_conversion, &fees.total_max_native),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EthereumMainnet;
    use crate::test_utils::PropsMother;
    use rstest::rstest;

    #[test]
    fn test_mainnet_native_preference() {
        let props = PropsMother::mainnet_native();
        let resolved = resolve_primary(&props, &EthereumMainnet);

        assert!(resolved.is_mainnet);
        assert!(resolved.native_selected);
        assert_eq!(resolved.gas_fee.primary_text(), "0.002 ETH");
        assert_eq!(resolved.gas_fee.secondary_text(), "$4.00");
        assert_eq!(resolved.gas_fee_max.primary_text(), "0.003 ETH");
        assert_eq!(resolved.total.primary_text(), "0.102 ETH");
        assert_eq!(resolved.total.secondary_text(), "$204.00");
        assert_eq!(resolved.total_max.primary_text(), "0.103 ETH");
        assert_eq!(resolved.total_max.secondary, None);
        assert!(resolved.shows_secondary());
        assert!(resolved.secondary_is_editable());
        assert!(!resolved.primary_is_editable());
    }

    #[test]
    fn test_mainnet_fiat_preference() {
        let props = PropsMother::mainnet_fiat();
        let resolved = resolve_primary(&props, &EthereumMainnet);

        assert!(resolved.is_mainnet);
        assert!(!resolved.native_selected);
        assert_eq!(resolved.gas_fee.primary_text(), "$4.00");
        assert_eq!(resolved.gas_fee.secondary_text(), "0.002 ETH");
        assert_eq!(resolved.gas_fee_max.primary_text(), "$6.00");
        assert_eq!(resolved.gas_fee_max.secondary_text(), "0.003 ETH");
        assert_eq!(resolved.total.primary_text(), "$204.00");
        assert_eq!(resolved.total.secondary_text(), "0.102 ETH");
        assert!(resolved.shows_secondary());
        assert!(resolved.primary_is_editable());
        assert!(!resolved.secondary_is_editable());
    }

    #[test]
    fn test_fiat_max_total_reads_gas_fee_max_conversion() {
        let props = PropsMother::mainnet_fiat();
        let resolved = resolve_primary(&props, &EthereumMainnet);

        assert_eq!(
            resolved.total_max.primary,
            props.fees.gas_fee_max_conversion
        );
        assert_eq!(resolved.total_max.secondary_text(), "0.103 ETH");
    }

    #[rstest]
    #[case::native(PrimaryCurrency::Native)]
    #[case::fiat(PrimaryCurrency::Fiat)]
    fn test_non_mainnet_forces_native(#[case] preference: PrimaryCurrency) {
        let mut props = PropsMother::polygon();
        props.selection.primary_currency = preference;

        let resolved = resolve_primary(&props, &EthereumMainnet);

        assert!(!resolved.is_mainnet);
        assert!(resolved.native_selected);
        assert_eq!(resolved.gas_fee.primary, props.fees.gas_fee_native);
        assert_eq!(resolved.total.primary, props.fees.total_native);
        assert_eq!(resolved.total_max.primary, props.fees.total_max_native);
        assert!(!resolved.shows_secondary());
        assert!(!resolved.primary_is_editable());
        assert!(!resolved.secondary_is_editable());
    }

    #[test]
    fn test_uses_injected_classifier() {
        let props = PropsMother::polygon();
        let polygon_is_main = |chain_id: &str| chain_id == "0x89";

        let resolved = resolve_primary(&props, &polygon_is_main);

        assert!(resolved.is_mainnet);
    }

    #[test]
    fn test_absent_strings_resolve_empty() {
        let resolved = resolve_primary(&ReviewProps::default(), &EthereumMainnet);

        assert_eq!(resolved.gas_fee.primary_text(), "");
        assert_eq!(resolved.gas_fee.secondary_text(), "");
        assert_eq!(resolved.total_max.primary_text(), "");
    }
}

//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting review setup across tests.
#![allow(dead_code)]

use std::cell::RefCell;

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};
use rstest::fixture;

use crate::domain::{
    FeeDisplayBundle, PresentationFlags, PrimaryCurrency, ReviewError, ReviewProps,
    SelectionContext, TimeEstimate, TimeEstimateColor,
};
use crate::state::platform::UrlOpener;

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct PropsMother;

impl PropsMother {
    /// Ethereum mainnet, native currency preferred.
    #[must_use]
    pub fn mainnet_native() -> ReviewProps {
        ReviewProps {
            fees: FeeDisplayBundle {
                gas_fee_native: Some("0.002 ETH".to_string()),
                gas_fee_conversion: Some("$4.00".to_string()),
                gas_fee_max_native: Some("0.003 ETH".to_string()),
                gas_fee_max_conversion: Some("$6.00".to_string()),
                total_native: Some("0.102 ETH".to_string()),
                total_conversion: Some("$204.00".to_string()),
                total_max_native: Some("0.103 ETH".to_string()),
            },
            selection: SelectionContext {
                primary_currency: PrimaryCurrency::Native,
                chain_id: "0x1".to_string(),
            },
            flags: PresentationFlags::default(),
            time: TimeEstimate {
                time_estimate: "Likely in < 30 seconds".to_string(),
                time_estimate_color: TimeEstimateColor::Green,
            },
        }
    }

    /// Ethereum mainnet, fiat preferred.
    #[must_use]
    pub fn mainnet_fiat() -> ReviewProps {
        let mut props = Self::mainnet_native();
        props.selection.primary_currency = PrimaryCurrency::Fiat;
        props
    }

    /// Polygon, which never shows converted amounts.
    #[must_use]
    pub fn polygon() -> ReviewProps {
        ReviewProps {
            fees: FeeDisplayBundle {
                gas_fee_native: Some("0.01 MATIC".to_string()),
                gas_fee_conversion: Some("$0.01".to_string()),
                gas_fee_max_native: Some("0.02 MATIC".to_string()),
                gas_fee_max_conversion: Some("$0.02".to_string()),
                total_native: Some("1.01 MATIC".to_string()),
                total_conversion: Some("$1.50".to_string()),
                total_max_native: Some("1.02 MATIC".to_string()),
            },
            selection: SelectionContext {
                primary_currency: PrimaryCurrency::Native,
                chain_id: "0x89".to_string(),
            },
            ..Self::mainnet_native()
        }
    }

    /// Mainnet native with a dapp-suggested fee.
    #[must_use]
    pub fn with_origin(origin: &str) -> ReviewProps {
        let mut props = Self::mainnet_native();
        props.flags.origin = Some(origin.to_string());
        props
    }
}

// ============================================================================
// Test Doubles
// ============================================================================

/// Records every URL it is asked to open.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: RefCell<Vec<String>>,
    fail: bool,
}

impl RecordingOpener {
    /// An opener whose every call fails (after recording the URL).
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl UrlOpener for RecordingOpener {
    fn open_url(&self, url: &str) -> Result<(), ReviewError> {
        self.opened.borrow_mut().push(url.to_string());
        if self.fail {
            return Err(ReviewError::url_open(
                url,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no browser"),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Buffer Helpers
// ============================================================================

/// Each row of `buffer` as a string.
#[must_use]
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}

/// The text drawn inside `rect`, rows joined with `\n`.
#[must_use]
pub fn text_in(buffer: &Buffer, rect: Rect) -> String {
    (rect.top()..rect.bottom())
        .map(|y| {
            (rect.left()..rect.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 40)).expect("terminal creation should succeed")
}

#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

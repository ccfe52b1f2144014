//! Gas fee summary widget.
//!
//! Lays out a [`ResolvedDisplay`] in a [`Summary`]: the fee row with its info
//! marker, the time estimate with the maximum fee, and (unless hidden) the
//! total with the maximum amount.
//!
//! The edit affordance sits on whichever gas fee amount shows the converted
//! currency. Off mainnet only the native amount is drawn, so nothing is
//! editable there.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::StatefulWidget,
};

use crate::constants::{
    AMOUNT_GAP, ESTIMATED_GAS_FEE_TITLE, INFO_MARKER, MAX_AMOUNT_LABEL, MAX_FEE_LABEL,
    SUGGESTED_GAS_FEE_SUFFIX, SUMMARY_MARGIN, TOTAL_LABEL,
};
use crate::domain::{ReviewProps, TimeEstimateColor};
use crate::review::ResolvedDisplay;
use crate::theme::{
    ERROR_COLOR, LINK_STYLE, MUTED_STYLE, ORIGIN_COLOR, PRIMARY_AMOUNT_STYLE, SUCCESS_COLOR,
};
use crate::widgets::summary::{Summary, SummaryRow, SummaryState};

// ============================================================================
// Hotspots
// ============================================================================

/// Clickable parts of the gas fee summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hotspot {
    /// The info marker next to the title.
    Info,
    /// The gas fee amount carrying the edit affordance.
    EditAmount,
}

/// Hit areas recorded while rendering [`GasFeeSummary`].
pub type GasFeeSummaryState = SummaryState<Hotspot>;

// ============================================================================
// Text Helpers
// ============================================================================

/// Title of the fee row.
///
/// `"Estimated gas fee"` when the wallet estimated the fee, or
/// `"{origin} suggested gas fee"` when a dapp suggested it.
#[must_use]
pub fn gas_fee_title(origin: Option<&str>) -> String {
    match origin {
        Some(origin) => format!("{origin} {SUGGESTED_GAS_FEE_SUFFIX}"),
        None => ESTIMATED_GAS_FEE_TITLE.to_string(),
    }
}

fn amount(text: &str) -> String {
    text.to_uppercase()
}

fn time_estimate_style(color: TimeEstimateColor) -> Style {
    match color {
        TimeEstimateColor::Green => Style::new().fg(SUCCESS_COLOR),
        TimeEstimateColor::Red => Style::new().fg(ERROR_COLOR),
        TimeEstimateColor::Neutral => Style::new(),
    }
}

fn gap() -> Span<'static> {
    Span::raw(" ".repeat(AMOUNT_GAP as usize))
}

// ============================================================================
// GasFeeSummary
// ============================================================================

/// Renders the gas fee section of a transaction review.
///
/// # Usage
///
/// ```ignore
/// let resolved = resolve_primary(&props, &EthereumMainnet);
/// let widget = GasFeeSummary::new(&props, &resolved);
/// let mut state = GasFeeSummaryState::default();
/// frame.render_stateful_widget(widget, area, &mut state);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GasFeeSummary<'a> {
    props: &'a ReviewProps,
    resolved: &'a ResolvedDisplay,
}

impl<'a> GasFeeSummary<'a> {
    /// Creates the widget for one render pass.
    #[must_use]
    pub const fn new(props: &'a ReviewProps, resolved: &'a ResolvedDisplay) -> Self {
        Self { props, resolved }
    }

    /// Number of terminal rows the widget occupies.
    #[must_use]
    pub const fn height(&self) -> u16 {
        if self.props.flags.hide_total { 2 } else { 5 }
    }

    fn fee_row(&self) -> SummaryRow<'static, Hotspot> {
        let origin = self.props.flags.origin();
        let (title_style, marker_style) = if origin.is_some() {
            (
                Style::new().fg(ORIGIN_COLOR).add_modifier(Modifier::BOLD),
                Style::new().fg(ORIGIN_COLOR),
            )
        } else {
            (PRIMARY_AMOUNT_STYLE, MUTED_STYLE)
        };

        let mut row = SummaryRow::new()
            .left(Span::styled(gas_fee_title(origin), title_style))
            .left(" ")
            .left_target(Span::styled(INFO_MARKER, marker_style), Hotspot::Info);

        let resolved = self.resolved;
        if resolved.shows_secondary() {
            let secondary = resolved.gas_fee.secondary_text();
            if !secondary.is_empty() {
                let editable = resolved.secondary_is_editable();
                let style = if editable { LINK_STYLE } else { MUTED_STYLE };
                row = row
                    .right_maybe_target(
                        Span::styled(amount(secondary), style),
                        editable.then_some(Hotspot::EditAmount),
                    )
                    .right(gap());
            }
        }

        let editable = resolved.primary_is_editable();
        let style = if editable {
            LINK_STYLE.add_modifier(Modifier::BOLD)
        } else {
            PRIMARY_AMOUNT_STYLE
        };
        row.right_maybe_target(
            Span::styled(amount(resolved.gas_fee.primary_text()), style),
            editable.then_some(Hotspot::EditAmount),
        )
    }

    fn time_row(&self) -> SummaryRow<'static, Hotspot> {
        let time = &self.props.time;
        let label_style = MUTED_STYLE.add_modifier(Modifier::BOLD);
        SummaryRow::new()
            .left(Span::styled(
                time.time_estimate.clone(),
                time_estimate_style(time.time_estimate_color),
            ))
            .right(Span::styled(format!("{MAX_FEE_LABEL} "), label_style))
            .right(Span::styled(
                amount(self.resolved.gas_fee_max.primary_text()),
                label_style,
            ))
    }

    fn total_rows(&self) -> [SummaryRow<'static, Hotspot>; 2] {
        let resolved = self.resolved;

        let mut total = SummaryRow::new().left(Span::styled(TOTAL_LABEL, PRIMARY_AMOUNT_STYLE));
        if resolved.shows_secondary() {
            let secondary = resolved.total.secondary_text();
            if !secondary.is_empty() {
                total = total
                    .right(Span::styled(amount(secondary), MUTED_STYLE))
                    .right(gap());
            }
        }
        let total = total.right(Span::styled(
            amount(resolved.total.primary_text()),
            PRIMARY_AMOUNT_STYLE,
        ));

        let max_amount = SummaryRow::new()
            .right(Span::styled(
                format!("{MAX_AMOUNT_LABEL} "),
                MUTED_STYLE.add_modifier(Modifier::BOLD),
            ))
            .right(Span::styled(
                amount(resolved.total_max.primary_text()),
                MUTED_STYLE,
            ));

        [total, max_amount]
    }

    /// Builds the summary layout for the current props.
    #[must_use]
    pub fn summary(&self) -> Summary<'static, Hotspot> {
        let margin = if self.props.flags.no_margin {
            0
        } else {
            SUMMARY_MARGIN
        };

        let summary = Summary::new()
            .margin(margin)
            .row(self.fee_row())
            .row(self.time_row());

        if self.props.flags.hide_total {
            return summary;
        }

        let [total, max_amount] = self.total_rows();
        summary.separator().row(total).row(max_amount)
    }
}

impl StatefulWidget for GasFeeSummary<'_> {
    type State = GasFeeSummaryState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        self.summary().render(area, buf, state);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EthereumMainnet, PrimaryCurrency};
    use crate::review::resolve_primary;
    use crate::test_utils::{PropsMother, buffer_lines, text_in};
    use insta::assert_snapshot;
    use rstest::rstest;

    const WIDTH: u16 = 60;

    fn render(props: &ReviewProps) -> (Buffer, GasFeeSummaryState) {
        render_at(props, WIDTH)
    }

    fn render_at(props: &ReviewProps, width: u16) -> (Buffer, GasFeeSummaryState) {
        let resolved = resolve_primary(props, &EthereumMainnet);
        let widget = GasFeeSummary::new(props, &resolved);
        let area = Rect::new(0, 0, width, widget.height());
        let mut buf = Buffer::empty(area);
        let mut state = GasFeeSummaryState::default();
        widget.render(area, &mut buf, &mut state);
        (buf, state)
    }

    fn screen(buf: &Buffer) -> String {
        buffer_lines(buf).join("\n")
    }

    #[test]
    fn test_title_without_origin() {
        assert_snapshot!(gas_fee_title(None), @"Estimated gas fee");
    }

    #[test]
    fn test_title_with_origin() {
        assert_snapshot!(gas_fee_title(Some("app.uniswap.org")), @"app.uniswap.org suggested gas fee");
    }

    #[test]
    fn test_mainnet_native_scenario() {
        let props = PropsMother::mainnet_native();
        let (buf, state) = render(&props);
        let lines = buffer_lines(&buf);

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("  Estimated gas fee ⓘ"));
        assert!(lines[0].trim_end().ends_with("$4.00  0.002 ETH"));
        assert!(lines[1].contains("Likely in < 30 seconds"));
        assert!(lines[1].trim_end().ends_with("Max fee: 0.003 ETH"));
        assert!(lines[2].trim().chars().all(|c| c == '─'));
        assert!(lines[3].trim_end().ends_with("$204.00  0.102 ETH"));
        assert!(lines[4].trim_end().ends_with("Max amount: 0.103 ETH"));

        let edit = state.area_of(Hotspot::EditAmount).unwrap();
        assert_eq!(text_in(&buf, edit), "$4.00");
        assert!(buf[(edit.x, edit.y)].modifier.contains(Modifier::UNDERLINED));

        let primary_x = (lines[0].trim_end().chars().count() - "0.002 ETH".len()) as u16;
        let primary = &buf[(primary_x, 0)];
        assert_eq!(primary.symbol(), "0");
        assert!(primary.modifier.contains(Modifier::BOLD));
        assert!(!primary.modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_mainnet_fiat_edit_on_primary() {
        let props = PropsMother::mainnet_fiat();
        let (buf, state) = render(&props);
        let lines = buffer_lines(&buf);

        assert!(lines[0].trim_end().ends_with("0.002 ETH  $4.00"));
        assert!(lines[1].trim_end().ends_with("Max fee: $6.00"));
        assert!(lines[3].trim_end().ends_with("0.102 ETH  $204.00"));

        let edit = state.area_of(Hotspot::EditAmount).unwrap();
        assert_eq!(text_in(&buf, edit), "$4.00");
        let cell = &buf[(edit.x, edit.y)];
        assert!(cell.modifier.contains(Modifier::BOLD));
        assert!(cell.modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_fiat_max_amount_shows_converted_max_fee() {
        let props = PropsMother::mainnet_fiat();
        let (buf, _) = render(&props);
        assert!(buffer_lines(&buf)[4].trim_end().ends_with("Max amount: $6.00"));
    }

    #[rstest]
    #[case::native(PrimaryCurrency::Native)]
    #[case::fiat(PrimaryCurrency::Fiat)]
    fn test_non_mainnet_hides_secondary(#[case] preference: PrimaryCurrency) {
        let mut props = PropsMother::polygon();
        props.selection.primary_currency = preference;

        let (buf, state) = render(&props);
        let text = screen(&buf);

        assert!(text.contains("0.01 MATIC"));
        assert!(text.contains("1.01 MATIC"));
        assert!(!text.contains('$'));
        assert_eq!(state.area_of(Hotspot::EditAmount), None);
    }

    #[rstest]
    #[case::mainnet_native(PropsMother::mainnet_native())]
    #[case::mainnet_fiat(PropsMother::mainnet_fiat())]
    #[case::non_mainnet(PropsMother::polygon())]
    #[case::origin(PropsMother::with_origin("app.uniswap.org"))]
    fn test_hide_total_omits_total_rows(#[case] mut props: ReviewProps) {
        props.flags.hide_total = true;

        let (buf, _) = render(&props);
        let text = screen(&buf);

        assert_eq!(buffer_lines(&buf).len(), 2);
        assert!(!text.contains("Total"));
        assert!(!text.contains("Max amount"));
        assert!(!text.contains('─'));
        assert!(text.contains("Max fee"));
    }

    #[test]
    fn test_origin_title_and_marker() {
        let props = PropsMother::with_origin("app.uniswap.org");
        let (buf, state) = render(&props);

        assert!(buffer_lines(&buf)[0].starts_with("  app.uniswap.org suggested gas fee ⓘ"));

        let marker = state.area_of(Hotspot::Info).unwrap();
        assert_eq!(text_in(&buf, marker), INFO_MARKER);
        assert_eq!(buf[(marker.x, marker.y)].fg, ORIGIN_COLOR);
        assert_eq!(buf[(2, 0)].fg, ORIGIN_COLOR);
    }

    #[test]
    fn test_no_margin() {
        let mut props = PropsMother::mainnet_native();
        props.flags.no_margin = true;

        let (buf, state) = render(&props);
        let lines = buffer_lines(&buf);

        assert!(lines[0].starts_with("Estimated gas fee"));
        assert!(lines[0].ends_with("0.002 ETH"));
        assert_eq!(state.area_of(Hotspot::Info).map(|r| r.x), Some(18));
    }

    #[test]
    fn test_long_origin_is_shortened_before_the_amounts() {
        let props = PropsMother::with_origin("app.some-dapp.example.org");
        let (buf, state) = render(&props);

        assert_eq!(
            buffer_lines(&buf)[0],
            "  app.some-dapp.example.org suggested… ⓘ  $4.00  0.002 ETH  "
        );

        let marker = state.area_of(Hotspot::Info).unwrap();
        assert_eq!(text_in(&buf, marker), INFO_MARKER);
        let edit = state.area_of(Hotspot::EditAmount).unwrap();
        assert_eq!(text_in(&buf, edit), "$4.00");
        assert!(marker.right() < edit.x);
        for column in edit.x..edit.right() {
            assert_eq!(state.target_at(column, 0), Some(Hotspot::EditAmount));
        }
    }

    #[test]
    fn test_very_long_origin_keeps_info_marker() {
        let props = PropsMother::with_origin(&"a".repeat(70));
        let (buf, state) = render(&props);

        assert!(buffer_lines(&buf)[0].contains("a… ⓘ $4.00  0.002 ETH"));
        let marker = state.area_of(Hotspot::Info).unwrap();
        assert_eq!(text_in(&buf, marker), INFO_MARKER);
        assert_eq!(buf[(2, 0)].fg, ORIGIN_COLOR);
    }

    #[test]
    fn test_narrow_width_keeps_primary_amounts_whole() {
        let props = PropsMother::mainnet_native();
        let (buf, state) = render_at(&props, 16);
        let lines = buffer_lines(&buf);

        assert_eq!(lines[0], "  E… 0.002 ETH  ");
        assert_eq!(lines[1], "  L… 0.003 ETH  ");
        assert_eq!(lines[3], "  T… 0.102 ETH  ");
        assert_eq!(lines[4], "     0.103 ETH  ");
        assert_eq!(state.area_of(Hotspot::EditAmount), None);
        assert_eq!(state.area_of(Hotspot::Info), None);
    }

    #[test]
    fn test_narrow_width_fiat_keeps_edit_and_marker() {
        let props = PropsMother::mainnet_fiat();
        let (buf, state) = render_at(&props, 16);

        assert_eq!(buffer_lines(&buf)[0], "  Est… ⓘ $4.00  ");

        let edit = state.area_of(Hotspot::EditAmount).unwrap();
        assert_eq!(text_in(&buf, edit), "$4.00");
        let marker = state.area_of(Hotspot::Info).unwrap();
        assert_eq!(text_in(&buf, marker), INFO_MARKER);
    }

    #[test]
    fn test_neutral_time_estimate_uses_default_style() {
        let mut props = PropsMother::mainnet_native();
        props.time.time_estimate_color = TimeEstimateColor::Neutral;

        let (buf, _) = render(&props);

        let cell = &buf[(2, 1)];
        assert_eq!(cell.symbol(), "L");
        assert_eq!(cell.fg, ratatui::style::Color::Reset);
        assert!(cell.modifier.is_empty());
    }

    #[rstest]
    #[case(TimeEstimateColor::Green, SUCCESS_COLOR)]
    #[case(TimeEstimateColor::Red, ERROR_COLOR)]
    fn test_time_estimate_color(#[case] color: TimeEstimateColor, #[case] expected: ratatui::style::Color) {
        let mut props = PropsMother::mainnet_native();
        props.time.time_estimate_color = color;

        let (buf, _) = render(&props);

        assert_eq!(buf[(2, 1)].fg, expected);
    }

    #[test]
    fn test_amounts_are_upper_cased() {
        let mut props = PropsMother::mainnet_native();
        props.fees.gas_fee_native = Some("0.002 eth".to_string());

        let (buf, _) = render(&props);

        assert!(buffer_lines(&buf)[0].trim_end().ends_with("0.002 ETH"));
    }

    #[test]
    fn test_empty_props_render_blank_amounts() {
        let (buf, state) = render(&ReviewProps::default());
        let lines = buffer_lines(&buf);

        assert!(lines[0].starts_with("  Estimated gas fee ⓘ"));
        assert_eq!(lines[1].trim(), "Max fee:");
        assert_eq!(lines[3].trim(), "Total");
        assert_eq!(lines[4].trim(), "Max amount:");
        assert_eq!(state.area_of(Hotspot::EditAmount), None);
    }
}

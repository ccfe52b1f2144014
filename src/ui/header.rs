//! Header rendering.
//!
//! Shows the screen title on the left and the network the transaction is
//! sent to on the right. Whether that network is mainnet is decided by the
//! review's classifier, so the header and the amounts always agree.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::domain::ReviewProps;
use crate::theme::{MUTED_STYLE, ORIGIN_COLOR, PRIMARY_COLOR, SUCCESS_COLOR};

use super::helpers::create_border_block;

const TITLE: &str = "Review transaction";

/// Human label for the network of `chain_id`.
#[must_use]
pub fn network_label(chain_id: &str, is_mainnet: bool) -> String {
    if is_mainnet {
        "Ethereum Mainnet".to_string()
    } else if chain_id.trim().is_empty() {
        "Unknown network".to_string()
    } else {
        format!("Chain {}", chain_id.trim())
    }
}

/// Render the application header.
pub fn render(frame: &mut Frame, area: Rect, props: &ReviewProps, is_mainnet: bool) {
    let header_block = create_border_block("");
    frame.render_widget(header_block.clone(), area);

    if area.height <= 2 {
        return;
    }
    let inner = header_block.inner(area);
    let inner = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1);

    let mut title = vec![Span::styled(
        TITLE,
        Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD),
    )];
    if let Some(origin) = props.flags.origin() {
        title.push(Span::styled("  from ", MUTED_STYLE));
        title.push(Span::styled(origin.to_string(), Style::new().fg(ORIGIN_COLOR)));
    }
    frame.render_widget(Paragraph::new(Line::from(title)), inner);

    let chain_id = &props.selection.chain_id;
    let network_style = if is_mainnet {
        Style::new().fg(SUCCESS_COLOR)
    } else {
        MUTED_STYLE
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("● {}", network_label(chain_id, is_mainnet)),
            network_style,
        ))
        .alignment(Alignment::Right),
        inner,
    );
}

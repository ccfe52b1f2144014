//! Informational modal rendering.
//!
//! A centered popup with a title, wrapped body text, one outbound link and a
//! key hint footer. The popup sizes its height to the wrapped body.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::constants::{INFO_MODAL_BODY, INFO_MODAL_TITLE, INFO_MODAL_WIDTH, LEARN_MORE_LABEL};
use crate::theme::{KEY_HINT_STYLE, LINK_STYLE, MUTED_COLOR};
use crate::ui::helpers::{create_popup_block, wrap_text};
use crate::ui::layout::centered_popup_area;

/// Rows taken by borders, the blank line before the link, the link, the
/// separator and the help line.
const CHROME_HEIGHT: u16 = 6;

// ============================================================================
// Content
// ============================================================================

/// What an info modal shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoModal<'a> {
    /// Title drawn in the border.
    pub title: &'a str,
    /// Body text; `\n` starts a new line.
    pub body: &'a str,
    /// Label of the outbound link.
    pub link_label: &'a str,
}

impl InfoModal<'static> {
    /// The explanation of gas fees shown from the fee row.
    #[must_use]
    pub const fn gas_fee() -> Self {
        Self {
            title: INFO_MODAL_TITLE,
            body: INFO_MODAL_BODY,
            link_label: LEARN_MORE_LABEL,
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Renders the info modal centered in `area`.
///
/// Returns where the link was drawn, or `None` when the terminal is too small
/// to show it.
pub fn render(frame: &mut Frame, area: Rect, modal: &InfoModal<'_>) -> Option<Rect> {
    let popup_width = INFO_MODAL_WIDTH.min(area.width.saturating_sub(4));
    let text_width = popup_width.saturating_sub(4);
    let body = wrap_text(modal.body, text_width as usize);
    let body_height = u16::try_from(body.len()).unwrap_or(u16::MAX);

    let popup_area = centered_popup_area(
        area,
        popup_width,
        body_height.saturating_add(CHROME_HEIGHT),
    );

    let popup_block = create_popup_block(modal.title);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    if popup_area.height < CHROME_HEIGHT || popup_area.width < 6 {
        return None;
    }

    let inner_area = popup_block.inner(popup_area);
    let separator_y = popup_area.y + popup_area.height - 3;

    let body_area = Rect::new(
        inner_area.x + 1,
        inner_area.y,
        text_width,
        body_height.min(separator_y.saturating_sub(inner_area.y)),
    );
    let lines: Vec<Line> = body.into_iter().map(Line::from).collect();
    frame.render_widget(Paragraph::new(lines), body_area);

    let link_y = inner_area.y + body_height + 1;
    let link_area = (link_y < separator_y).then(|| {
        let label_width = u16::try_from(modal.link_label.chars().count()).unwrap_or(u16::MAX);
        Rect::new(inner_area.x + 1, link_y, label_width.min(text_width), 1)
    });
    if let Some(link_area) = link_area {
        frame.render_widget(
            Paragraph::new(Span::styled(modal.link_label, LINK_STYLE)),
            link_area,
        );
    }

    let separator = "─".repeat(popup_area.width.saturating_sub(2) as usize);
    let separator_area = Rect::new(popup_area.x + 1, separator_y, popup_area.width - 2, 1);
    frame.render_widget(
        Paragraph::new(separator)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        separator_area,
    );

    let help_text = Line::from(vec![
        Span::styled("i", KEY_HINT_STYLE),
        Span::styled("/", Style::default().fg(MUTED_COLOR)),
        Span::styled("Esc", KEY_HINT_STYLE),
        Span::styled(":Close  ", Style::default().fg(MUTED_COLOR)),
        Span::styled("l", KEY_HINT_STYLE),
        Span::styled("/", Style::default().fg(MUTED_COLOR)),
        Span::styled("Enter", KEY_HINT_STYLE),
        Span::styled(":Learn more", Style::default().fg(MUTED_COLOR)),
    ]);
    let help_area = Rect::new(
        popup_area.x,
        popup_area.y + popup_area.height - 2,
        popup_area.width,
        1,
    );
    frame.render_widget(
        Paragraph::new(help_text).alignment(Alignment::Center),
        help_area,
    );

    link_area
}

// ============================================================================
// Tests
// ============================================================================

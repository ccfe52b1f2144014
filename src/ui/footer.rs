//! Footer bar with the keyboard shortcuts of the current context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::theme::MUTED_COLOR;

/// Shortcut hints for `context`.
#[must_use]
pub const fn hints(context: InputContext, can_edit: bool) -> &'static str {
    match context {
        InputContext::InfoModal => "i/Esc:Close  l/Enter:Learn more  q:Quit",
        InputContext::Review if can_edit => "i:Info  e:Edit fee  c:Currency  q:Quit",
        InputContext::Review => "i:Info  c:Currency  q:Quit",
    }
}

/// Renders the footer bar.
pub fn render(frame: &mut Frame, area: Rect, context: InputContext, can_edit: bool) {
    let footer = Paragraph::new(hints(context, can_edit))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

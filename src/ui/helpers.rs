//! UI helper functions for creating styled blocks and laying out text.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::BORDER_STYLE;

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a popup-style block with centered title and rounded borders.
///
/// # Example
///
/// ```ignore
/// use gas_review::ui::helpers::create_popup_block;
///
/// let popup = create_popup_block("Estimated gas fee tooltip");
/// ```
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
}

/// Creates a rounded border block with a bold grey title.
///
/// An empty title draws the border only.
#[must_use]
pub fn create_border_block(title: &str) -> Block<'_> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE);
    if title.is_empty() {
        return block;
    }
    block.title(format!(" {title} ")).title_style(
        Style::new()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
}

// ============================================================================
// Text Helpers
// ============================================================================

/// Greedy word wrap of `text` to lines at most `width` characters wide.
///
/// Explicit `\n` breaks are kept; blank lines stay blank. Words longer than
/// `width` are split.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in raw_line.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if current_len == 0 {
                word.len()
            } else {
                current_len + 1 + word.len()
            };
            if needed > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current_len += word.len();
            current.extend(word);
        }

        lines.push(current);
    }

    lines
}

// ============================================================================
// Tests
// ============================================================================

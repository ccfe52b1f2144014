//! Toast notification component.
//!
//! A short-lived message in the bottom-right corner of the screen. Messages
//! starting with `[+]` render in the success color, `[x]` in the error color.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

// ============================================================================
// Constants
// ============================================================================

/// Minimum width for toast notifications.
const MIN_TOAST_WIDTH: u16 = 20;

/// Height of toast notifications.
const TOAST_HEIGHT: u16 = 3;

/// Padding from the right and bottom edges.
const TOAST_PADDING: u16 = 1;

/// Extra width for borders and spacing.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Toast
// ============================================================================

/// A message that disappears after a number of frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    message: String,
    frames_left: u16,
}

impl Toast {
    /// Creates a toast visible for `frames` ticks.
    #[must_use]
    pub fn new(message: impl Into<String>, frames: u16) -> Self {
        Self {
            message: message.into(),
            frames_left: frames,
        }
    }

    /// The message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Counts down one frame. Returns `false` once the toast has expired.
    pub fn tick(&mut self) -> bool {
        self.frames_left = self.frames_left.saturating_sub(1);
        self.frames_left > 0
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Renders a toast notification in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = calculate_toast_position(area, message);

    frame.render_widget(Clear, toast_area);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(toast_block.clone(), toast_area);

    let toast_text = Paragraph::new(message)
        .style(Style::default().fg(determine_text_color(message)))
        .alignment(Alignment::Center);
    frame.render_widget(toast_text, toast_block.inner(toast_area));
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn calculate_toast_position(area: Rect, message: &str) -> Rect {
    let message_len = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let toast_width = message_len
        .saturating_add(TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let toast_height = TOAST_HEIGHT.min(area.height);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_PADDING);
    let toast_y = area.y + area.height.saturating_sub(toast_height + TOAST_PADDING);

    Rect::new(toast_x, toast_y, toast_width, toast_height)
}

fn determine_text_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        Color::White
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::normal(Rect::new(0, 0, 100, 50), "Edit gas fee requested")]
    #[case::long(Rect::new(0, 0, 100, 50), "This is a very long message that should be constrained to half")]
    #[case::short(Rect::new(0, 0, 100, 50), "Hi")]
    #[case::small_area(Rect::new(0, 0, 30, 10), "Test")]
    fn test_toast_position_stays_inside(#[case] area: Rect, #[case] message: &str) {
        let toast = calculate_toast_position(area, message);

        assert_eq!(toast.height, TOAST_HEIGHT);
        assert!(toast.width >= MIN_TOAST_WIDTH);
        assert!(toast.width <= (area.width / 2).max(MIN_TOAST_WIDTH));
        assert!(toast.right() <= area.right());
        assert!(toast.bottom() <= area.bottom());
    }

    #[rstest]
    #[case("[+] Opened in browser", SUCCESS_COLOR)]
    #[case("[x] Failed", ERROR_COLOR)]
    #[case("Edit gas fee requested", Color::White)]
    #[case("", Color::White)]
    fn test_determine_text_color(#[case] message: &str, #[case] expected: Color) {
        assert_eq!(determine_text_color(message), expected);
    }

    #[test]
    fn test_toast_expires() {
        let mut toast = Toast::new("hello", 2);
        assert_eq!(toast.message(), "hello");
        assert!(toast.tick());
        assert!(!toast.tick());
        assert!(!toast.tick());
    }
}

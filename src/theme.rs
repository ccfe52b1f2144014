//! Theme and styling constants for the gas fee review.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary text color - titles and dominant amounts.
pub const PRIMARY_COLOR: Color = Color::White;

/// Link color - amounts that can be tapped to edit, outbound links.
pub const LINK_COLOR: Color = Color::Cyan;

/// Emphasis for values suggested by a dapp instead of the wallet.
pub const ORIGIN_COLOR: Color = Color::Rgb(247, 134, 28);

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Separator line between summary sections.
pub const SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Dominant amount that is not tappable.
pub const PRIMARY_AMOUNT_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Tappable text.
pub const LINK_STYLE: Style = Style::new()
    .fg(LINK_COLOR)
    .add_modifier(Modifier::UNDERLINED);

/// Inert secondary text.
pub const MUTED_STYLE: Style = Style::new().fg(MUTED_COLOR);

/// Key hints in popups.
pub const KEY_HINT_STYLE: Style = Style::new().fg(LINK_COLOR).add_modifier(Modifier::BOLD);

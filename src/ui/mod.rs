//! UI rendering for the host application.
//!
//! # Module Structure
//!
//! - `popups` - Modal dialogs (gas fee info)
//! - `components` - Reusable UI components (toast notifications)
//! - `layout` - Layout calculations and structs
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helpers for styled blocks and text wrapping

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod popups;

use ratatui::{Frame, layout::Rect};

use crate::state::App;
use crate::state::platform::UrlOpener;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Draws the whole screen: header, review, footer, then overlays.
///
/// Takes the app mutably because the review records its hit areas while
/// drawing.
pub fn render<O: UrlOpener>(app: &mut App<O>, frame: &mut Frame) {
    let size = frame.area();
    let layout = layout::calculate_app_layout(size);

    let is_mainnet = app.review.resolve(&app.props).is_mainnet;
    header::render(frame, layout.header, &app.props, is_mainnet);

    let review_area = Rect {
        y: layout.main.y + 1,
        height: layout.main.height.saturating_sub(1),
        ..layout.main
    };
    app.review.render(frame, review_area, &app.props);

    footer::render(
        frame,
        layout.footer,
        app.input_context(),
        app.review.can_edit(),
    );

    if let Some(toast) = &app.toast {
        components::render_toast(frame, size, toast.message());
    }
}

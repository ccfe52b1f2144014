//! Popup UI components.
//!
//! Popups are modal overlays drawn on top of the review and dismissed by user
//! input.

pub mod info;

pub use info::{InfoModal, render as render_info_modal};

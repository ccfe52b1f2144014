//! Reusable UI components.
//!
//! - [`toast`] - Toast notification overlay for non-blocking messages

pub mod toast;

pub use toast::{Toast, render_toast};

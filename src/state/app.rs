//! The host application state.
//!
//! [`App`] embeds one [`GasFeeReview`] next to the props it renders, the
//! persisted preferences and the toast overlay.

use std::path::PathBuf;

use crate::commands::InputContext;
use crate::domain::{EthereumMainnet, ReviewProps};
use crate::review::GasFeeReview;
use crate::state::AppConfig;
use crate::state::platform::{SystemBrowser, UrlOpener};
use crate::ui::components::Toast;

/// Host application state.
#[derive(Debug)]
pub struct App<O = SystemBrowser> {
    /// What the review renders.
    pub props: ReviewProps,
    /// Persisted preferences.
    pub config: AppConfig,
    /// Where preference changes are saved; `None` keeps them in memory.
    pub config_path: Option<PathBuf>,
    /// The embedded review component.
    pub review: GasFeeReview<O, EthereumMainnet>,
    /// Active toast notification.
    pub toast: Option<Toast>,
    /// How many times the user asked to edit the fee.
    pub edit_requests: u32,
    /// Set when the main loop should stop.
    pub exit: bool,
}

impl App {
    /// Creates an app that opens links in the system browser.
    #[must_use]
    pub fn new(props: ReviewProps, config: AppConfig, config_path: Option<PathBuf>) -> Self {
        Self::with_opener(props, config, config_path, SystemBrowser)
    }
}

impl<O: UrlOpener> App<O> {
    /// Creates an app with a specific URL opener.
    pub fn with_opener(
        props: ReviewProps,
        config: AppConfig,
        config_path: Option<PathBuf>,
        opener: O,
    ) -> Self {
        Self {
            props,
            config,
            config_path,
            review: GasFeeReview::new(opener, EthereumMainnet),
            toast: None,
            edit_requests: 0,
            exit: false,
        }
    }

    /// Which keybindings are active.
    #[must_use]
    pub const fn input_context(&self) -> InputContext {
        if self.review.overlay().is_open() {
            InputContext::InfoModal
        } else {
            InputContext::Review
        }
    }

    /// Shows a toast for `frames` ticks, replacing any current one.
    pub fn show_toast(&mut self, message: impl Into<String>, frames: u16) {
        self.toast = Some(Toast::new(message, frames));
    }

    /// Counts the toast down, removing it once expired.
    pub fn tick_toast(&mut self) {
        if let Some(toast) = &mut self.toast
            && !toast.tick()
        {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{PropsMother, RecordingOpener};

    fn app() -> App<RecordingOpener> {
        App::with_opener(
            PropsMother::mainnet_native(),
            AppConfig::default(),
            None,
            RecordingOpener::default(),
        )
    }

    #[test]
    fn test_new_app_is_idle() {
        let app = app();
        assert!(!app.exit);
        assert!(app.toast.is_none());
        assert_eq!(app.edit_requests, 0);
        assert_eq!(app.input_context(), InputContext::Review);
    }

    #[test]
    fn test_input_context_follows_modal() {
        let mut app = app();
        app.review.toggle_info();
        assert_eq!(app.input_context(), InputContext::InfoModal);
    }

    #[test]
    fn test_toast_lifecycle() {
        let mut app = app();
        app.show_toast("Hello", 2);
        assert_eq!(app.toast.as_ref().map(Toast::message), Some("Hello"));

        app.tick_toast();
        assert!(app.toast.is_some());
        app.tick_toast();
        assert!(app.toast.is_none());
    }
}

//! Input handling for the host application.
//!
//! Host keys go through [`KeyMapper`]; everything else is handed to the
//! review, whose [`ReviewEvent`]s come back here as toasts and log lines.

use color_eyre::Result;
use crossterm::event::{Event, KeyEventKind};

use crate::commands::{AppCommand, KeyMapper};
use crate::constants::TOAST_FRAMES;
use crate::review::ReviewEvent;
use crate::state::platform::UrlOpener;

use super::App;

impl<O: UrlOpener> App<O> {
    /// Handles one terminal event.
    pub fn handle_event(&mut self, event: &Event) {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return;
            }
            match KeyMapper::map_key(*key, &self.input_context()) {
                AppCommand::Quit => {
                    self.exit = true;
                    return;
                }
                AppCommand::SwitchPrimaryCurrency => {
                    if let Err(e) = self.switch_primary_currency() {
                        tracing::warn!("Failed to save preferences: {e}");
                        self.show_toast("[x] Failed to save preferences", TOAST_FRAMES);
                    }
                    return;
                }
                AppCommand::Forward => {}
            }
        }

        if let Some(review_event) = self.review.handle_event(event) {
            self.handle_review_event(review_event);
        }
    }

    /// Reacts to what the review reported.
    pub fn handle_review_event(&mut self, event: ReviewEvent) {
        match event {
            ReviewEvent::Edit => {
                self.edit_requests += 1;
                tracing::info!(
                    primary_currency = %self.props.selection.primary_currency,
                    chain_id = %self.props.selection.chain_id,
                    "Gas fee edit requested"
                );
                self.show_toast("Edit gas fee requested", TOAST_FRAMES);
            }
            ReviewEvent::InfoToggled { open } => {
                tracing::debug!(open, "Gas fee info toggled");
            }
            ReviewEvent::LearnMoreOpened => {
                self.show_toast("[+] Opening gas fee guide", TOAST_FRAMES);
            }
        }
    }

    /// Flips the primary currency preference and saves it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be written. The
    /// in-memory preference is switched either way.
    pub fn switch_primary_currency(&mut self) -> Result<()> {
        let next = self.props.selection.primary_currency.toggled();
        self.props.selection.primary_currency = next;
        self.config.primary_currency = next;

        tracing::info!(primary_currency = %next, "Switched primary currency");
        self.show_toast(format!("[+] Primary currency: {next}"), TOAST_FRAMES);

        if let Some(path) = &self.config_path {
            self.config.save_to(path)?;
        }
        Ok(())
    }
}

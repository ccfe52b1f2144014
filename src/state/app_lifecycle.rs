//! Application lifecycle: the main event loop.

use color_eyre::Result;
use crossterm::event::{self, Event};
use std::time::{Duration, Instant};

use crate::constants::TICK_RATE;
use crate::state::platform::UrlOpener;
use crate::tui::Tui;
use crate::ui;

use super::App;

impl<O: UrlOpener> App<O> {
    /// Runs the main application loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        tracing::info!(
            chain_id = %self.props.selection.chain_id,
            primary_currency = %self.props.selection.primary_currency,
            "Starting gas fee review"
        );

        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Resize(_, _) => {}
                    event => self.handle_event(&event),
                }
                terminal.draw(|frame| ui::render(self, frame))?;
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.tick_toast();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        tracing::info!(edit_requests = self.edit_requests, "Review closed");
        Ok(())
    }
}

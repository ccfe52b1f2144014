//! Terminal setup and teardown.
//!
//! Mouse capture is on by default so clicks on the info marker, the editable
//! amount and the modal link reach the review. With it off the terminal keeps
//! its own text selection and the review is driven by keys alone.

use std::io::{self, Stdout};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Input features requested from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalOptions {
    /// Report mouse clicks to the application.
    pub mouse_capture: bool,
}

/// Switches to the alternate screen in raw mode, capturing the mouse when
/// `options` ask for it.
///
/// Anything already switched on is undone if a later step fails.
///
/// # Errors
/// Returns an error if the terminal cannot be configured.
pub fn init(options: TerminalOptions) -> io::Result<Tui> {
    enable_raw_mode()?;
    if let Err(e) = enter(options) {
        if let Err(restore_err) = restore(options) {
            tracing::warn!("Failed to undo partial terminal setup: {restore_err}");
        }
        return Err(e);
    }

    set_panic_hook(options);
    tracing::debug!(mouse_capture = options.mouse_capture, "Terminal ready");

    Terminal::new(CrosstermBackend::new(io::stdout()))
}

fn enter(options: TerminalOptions) -> io::Result<()> {
    execute!(io::stdout(), EnterAlternateScreen)?;
    if options.mouse_capture {
        execute!(io::stdout(), EnableMouseCapture)?;
    }
    Ok(())
}

fn set_panic_hook(options: TerminalOptions) {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!("Review panicked: {panic_info}");
        if let Err(e) = restore(options) {
            tracing::error!("Failed to restore terminal after panic: {e}");
        }
        hook(panic_info);
    }));
}

/// Releases the mouse if it was captured, then leaves the alternate screen
/// and raw mode.
///
/// # Errors
/// Returns an error if the terminal cannot be restored.
pub fn restore(options: TerminalOptions) -> io::Result<()> {
    if options.mouse_capture {
        execute!(io::stdout(), DisableMouseCapture)?;
    }
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()
}

//! The stateful gas fee review component.
//!
//! [`GasFeeReview`] owns the info modal visibility and the hit areas of the
//! last render, and turns terminal input into [`ReviewEvent`]s for the host.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    Frame,
    layout::{Position, Rect},
};

use crate::constants::LEARN_MORE_URL;
use crate::domain::{EthereumMainnet, NetworkClassifier, ReviewProps};
use crate::review::{InfoOverlay, ResolvedDisplay, resolve_primary};
use crate::state::platform::{SystemBrowser, UrlOpener};
use crate::ui::popups::{InfoModal, render_info_modal};
use crate::widgets::{GasFeeSummary, GasFeeSummaryState, Hotspot};

// ============================================================================
// Events
// ============================================================================

/// What the review reports back to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewEvent {
    /// The user asked to edit the gas fee.
    Edit,
    /// The info modal opened or closed.
    InfoToggled {
        /// Whether the modal is now showing.
        open: bool,
    },
    /// The learn-more link was handed to the opener.
    LearnMoreOpened,
}

// ============================================================================
// GasFeeReview
// ============================================================================

/// Gas fee section of a transaction review, with its info modal.
#[derive(Debug)]
pub struct GasFeeReview<O = SystemBrowser, C = EthereumMainnet> {
    overlay: InfoOverlay,
    opener: O,
    classifier: C,
    summary_state: GasFeeSummaryState,
    link_area: Option<Rect>,
}

impl Default for GasFeeReview {
    fn default() -> Self {
        Self::new(SystemBrowser, EthereumMainnet)
    }
}

impl<O: UrlOpener, C: NetworkClassifier> GasFeeReview<O, C> {
    /// Creates a review with the modal closed.
    pub fn new(opener: O, classifier: C) -> Self {
        Self {
            overlay: InfoOverlay::default(),
            opener,
            classifier,
            summary_state: GasFeeSummaryState::default(),
            link_area: None,
        }
    }

    /// Current modal visibility.
    #[must_use]
    pub const fn overlay(&self) -> InfoOverlay {
        self.overlay
    }

    /// The URL opener in use.
    pub const fn opener(&self) -> &O {
        &self.opener
    }

    /// Where `hotspot` was drawn by the last render.
    #[must_use]
    pub fn hotspot_area(&self, hotspot: Hotspot) -> Option<Rect> {
        self.summary_state.area_of(hotspot)
    }

    /// Where the modal's link was drawn by the last render.
    #[must_use]
    pub const fn link_area(&self) -> Option<Rect> {
        self.link_area
    }

    /// Partitions the amounts of `props` with this review's classifier.
    #[must_use]
    pub fn resolve(&self, props: &ReviewProps) -> ResolvedDisplay {
        resolve_primary(props, &self.classifier)
    }

    /// Whether the current rendering offers the edit affordance.
    #[must_use]
    pub fn can_edit(&self) -> bool {
        self.summary_state.area_of(Hotspot::EditAmount).is_some()
    }

    /// Opens or closes the info modal.
    pub fn toggle_info(&mut self) -> ReviewEvent {
        self.overlay.toggle();
        if !self.overlay.is_open() {
            self.link_area = None;
        }
        ReviewEvent::InfoToggled {
            open: self.overlay.is_open(),
        }
    }

    /// Hands the learn-more URL to the opener.
    ///
    /// Failures are logged and otherwise ignored.
    pub fn open_learn_more(&self) -> ReviewEvent {
        if let Err(e) = self.opener.open_url(LEARN_MORE_URL) {
            tracing::warn!("Failed to open learn more link: {e}");
        }
        ReviewEvent::LearnMoreOpened
    }

    /// Draws the summary into `area` and, when open, the modal centered on the
    /// whole frame.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, props: &ReviewProps) {
        let resolved = self.resolve(props);
        let widget = GasFeeSummary::new(props, &resolved);
        let summary_area = Rect {
            height: widget.height().min(area.height),
            ..area
        };
        frame.render_stateful_widget(widget, summary_area, &mut self.summary_state);

        let frame_area = frame.area();
        self.link_area = if self.overlay.is_open() {
            render_info_modal(frame, frame_area, &InfoModal::gas_fee())
        } else {
            None
        };
    }

    /// Maps terminal input to a review event.
    ///
    /// While the modal is open it captures all input.
    pub fn handle_event(&mut self, event: &Event) -> Option<ReviewEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => None,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Option<ReviewEvent> {
        if self.overlay.is_open() {
            return match key.code {
                KeyCode::Char('i') | KeyCode::Esc => Some(self.toggle_info()),
                KeyCode::Char('l') | KeyCode::Enter => Some(self.open_learn_more()),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('i') => Some(self.toggle_info()),
            KeyCode::Char('e') if self.can_edit() => Some(ReviewEvent::Edit),
            _ => None,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> Option<ReviewEvent> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let position = Position::new(mouse.column, mouse.row);

        if self.overlay.is_open() {
            return self
                .link_area
                .is_some_and(|link| link.contains(position))
                .then(|| self.open_learn_more());
        }

        match self.summary_state.target_at(mouse.column, mouse.row)? {
            Hotspot::Info => Some(self.toggle_info()),
            Hotspot::EditAmount => Some(ReviewEvent::Edit),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Visibility of the gas fee info modal.

/// Whether the info modal is showing.
///
/// Starts [`InfoOverlay::Closed`]; only user input moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfoOverlay {
    /// Modal hidden.
    #[default]
    Closed,
    /// Modal showing.
    Open,
}

impl InfoOverlay {
    /// Flips between open and closed.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
        tracing::debug!(overlay = ?self, "Toggled gas fee info");
    }

    /// Closes the modal if it is open.
    pub fn close(&mut self) {
        if self.is_open() {
            self.toggle();
        }
    }

    /// Whether the modal is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert_eq!(InfoOverlay::default(), InfoOverlay::Closed);
        assert!(!InfoOverlay::default().is_open());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut overlay = InfoOverlay::default();

        overlay.toggle();
        assert!(overlay.is_open());

        overlay.toggle();
        assert_eq!(overlay, InfoOverlay::Closed);
    }

    #[test]
    fn test_close_is_noop_when_closed() {
        let mut overlay = InfoOverlay::Closed;
        overlay.close();
        assert_eq!(overlay, InfoOverlay::Closed);

        let mut overlay = InfoOverlay::Open;
        overlay.close();
        assert_eq!(overlay, InfoOverlay::Closed);
    }
}

//! The gas fee review component.
//!
//! - [`resolve`] - Which amounts are primary and which are secondary
//! - [`overlay`] - Info modal visibility
//! - [`shell`] - Rendering, input handling and the outbound link

pub mod overlay;
pub mod resolve;
pub mod shell;

pub use overlay::InfoOverlay;
pub use resolve::{DisplayPair, ResolvedDisplay, resolve_primary};
pub use shell::{GasFeeReview, ReviewEvent};

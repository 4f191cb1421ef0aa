//! Editing surface: binds slide and deck mutations to a gateway.
//!
//! Every mutation is built on a draft, sent to the gateway, and applied to
//! the local copy only once the gateway acknowledges it. A failed call is
//! logged and leaves the local state exactly as it was.

pub mod deck;
pub mod navigation;
pub mod surface;

use crate::gateway::GatewayError;
use crate::models::SlideError;

pub use deck::{create_presentation, DeckEditor};
pub use navigation::{BlockFocus, DeckNavigator};
pub use surface::SlideEditor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    /// Nothing to change (boundary move, empty patch); nothing was sent.
    Unchanged,
}

#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error(transparent)]
    Slide(#[from] SlideError),
    #[error("could not save changes: {0}")]
    Gateway(#[from] GatewayError),
    #[error("slide not found")]
    SlideNotFound,
}

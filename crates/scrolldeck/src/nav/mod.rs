//! Slide position tracking and navigation for a vertically scrolled deck.
//!
//! The scroll observer is the only writer of
//! [`PositionState`](position::PositionState). Navigation commands never move
//! the position directly: they ask the [`Scroller`](scroller::Scroller) to
//! animate towards a slide, and the position follows once the observer sees
//! that slide cross into the viewport band.

pub mod commands;
pub mod controller;
pub mod observer;
pub mod position;
pub mod registry;
pub mod scroller;
pub mod surface;
pub mod validator;

#[cfg(test)]
mod tests;

pub use commands::NavigationIntent;
pub use controller::{CommitKind, ControlEvent, NavKey, NavSettings, SlideController};
pub use observer::{TriggerBand, Viewport};
pub use registry::SlideRegistry;
pub use scroller::SmoothScroller;

/// The single failure class of the navigation core.
///
/// Never shown to the user: callers recover by reverting the control surface
/// to the last confirmed position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("invalid slide target '{requested}' (deck has {count} slides)")]
    InvalidTarget { requested: String, count: usize },
}

impl NavError {
    pub fn invalid(requested: impl ToString, count: usize) -> Self {
        Self::InvalidTarget {
            requested: requested.to_string(),
            count,
        }
    }
}

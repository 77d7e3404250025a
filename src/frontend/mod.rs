//! Frontend abstraction layer
//!
//! This module defines the `Frontend` trait the terminal frontend implements.
//! It provides a unified interface for event polling, rendering, and cleanup.

pub mod events;
pub mod tui;

use crate::core::AppCore;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Frontend trait
///
/// Separates rendering concerns from the view logic: a frontend reads
/// `AppCore` to draw and reports input as `FrontendEvent`s.
pub trait Frontend {
    /// Poll for user input events
    ///
    /// Returns all pending events (keyboard, mouse, resize) converted to
    /// the frontend-agnostic `FrontendEvent` enum; empty if none arrived
    /// within the poll timeout.
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Render the current application state
    ///
    /// Called once per frame. Animations are driven by wall time inside the
    /// frontend, so the same state may render differently frame to frame.
    fn render(&mut self, core: &AppCore) -> Result<()>;

    /// Restore the terminal before the application exits
    fn cleanup(&mut self) -> Result<()>;

    /// Current terminal size in cells, `(width, height)`
    fn size(&self) -> (u16, u16);
}

//! Core logic layer
//!
//! Owns the view state and turns input actions into state changes.
//! NO imports from frontend/ or rendering code.
//! Core updates the view controller, frontends read and render.

pub mod actions;
pub mod app_core;
pub mod input_router;
pub mod view_controller;

pub use actions::Action;
pub use app_core::AppCore;
pub use view_controller::ViewController;

//! TUI Frontend (ratatui-based)
//!
//! Each section of the guide has a renderer here that turns the widget state
//! from `crate::widgets` into cells. `page` stacks them into one tall buffer
//! and `app` owns the terminal and the scrolled viewport onto that buffer.

mod animation;
mod app;
mod case_diagram;
mod controls;
mod fan_compare;
mod hit_map;
mod info_panel;
mod page;
mod summary;
mod text;

pub use app::TuiFrontend;

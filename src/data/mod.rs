//! Data layer - static content and session state
//!
//! Pure data structures with no rendering logic. The core mutates them,
//! frontends read them.

pub mod ui_state;
pub mod zone;

pub use ui_state::{AnimationSpeed, CompareMode, FanCount, ViewState, Visibility};
pub use zone::{Airflow, FanKind, Zone, ZoneInfo};

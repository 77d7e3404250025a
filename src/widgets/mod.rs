//! Widget state structs (rendering-agnostic)
//!
//! Each struct here is a pure derivation of the current `ViewState`. They hold
//! what should be shown and contain no rendering logic, so the terminal
//! renderers in `frontend::tui` only translate them into cells.

pub mod case_diagram;
pub mod fan_card;
pub mod info_panel;
pub mod particles;
pub mod summary;

pub use case_diagram::{CaseDiagramState, FanBank};
pub use fan_card::{AirIndicator, FanCardState, Verdict};
pub use info_panel::InfoPanelState;
pub use particles::ParticleKind;
pub use summary::{ConceptCard, CONCEPT_CARDS, FOOTER_NOTE};

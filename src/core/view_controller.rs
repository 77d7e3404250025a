//! View controller for the airflow guide
//!
//! Owns one `ViewState` and derives every visual parameter from it.
//! All operations are synchronous and infallible: their inputs are closed
//! enums, so invalid values cannot reach this layer.

use crate::data::{AnimationSpeed, CompareMode, FanCount, FanKind, ViewState, Visibility, Zone, ZoneInfo};

#[derive(Debug, Clone, Default)]
pub struct ViewController {
    state: ViewState,
}

impl ViewController {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a caller-provided state (CLI overrides)
    pub fn with_state(state: ViewState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn select_zone(&mut self, zone: Zone) {
        tracing::debug!("Selected zone: {}", zone);
        self.state.selected_zone = zone;
    }

    pub fn set_heat_load(&mut self, enabled: bool) {
        tracing::debug!(
            "Heat load {} (animation {:?})",
            if enabled { "on" } else { "off" },
            AnimationSpeed::from_heat_load(enabled)
        );
        self.state.heat_load = enabled;
    }

    pub fn set_fan_count(&mut self, count: FanCount) {
        tracing::debug!("Fan count set to {}", count.get());
        self.state.fan_count = count;
    }

    pub fn set_compare_mode(&mut self, mode: CompareMode) {
        tracing::debug!("Compare mode set to {}", mode.label());
        self.state.compare_mode = mode;
    }

    /// Rotor speed preset, the only value derived from another field
    pub fn animation_speed(&self) -> AnimationSpeed {
        AnimationSpeed::from_heat_load(self.state.heat_load)
    }

    /// Overview highlights everything; a specific zone dims the others
    pub fn visibility(&self, zone: Zone) -> Visibility {
        if self.state.selected_zone == Zone::Overview || self.state.selected_zone == zone {
            Visibility::Highlighted
        } else {
            Visibility::Dimmed
        }
    }

    /// True for the selected zone when it is not the overview
    pub fn is_emphasized(&self, zone: Zone) -> bool {
        zone != Zone::Overview && self.state.selected_zone == zone
    }

    /// Record backing the info panel
    pub fn current_info(&self) -> &'static ZoneInfo {
        self.state.selected_zone.info()
    }
}

/// Whether the unobstructed blade face is the one seen from inside the case.
///
/// A standard fan shows its clean face on the exhaust side, a reverse fan on
/// the intake side.
pub fn pretty_face_visible(fan: FanKind, mode: CompareMode) -> bool {
    match (fan, mode) {
        (FanKind::Standard, CompareMode::Intake) => false,
        (FanKind::Standard, CompareMode::Exhaust) => true,
        (FanKind::Reverse, CompareMode::Intake) => true,
        (FanKind::Reverse, CompareMode::Exhaust) => false,
    }
}

//! UI State - the session-scoped toggles of one guide view
//!
//! Every field is independently settable and every combination is legal.
//! Nothing here is persisted; a fresh `ViewState` is built per run.

use super::zone::{Airflow, Zone};
use std::time::Duration;

/// Airflow direction shown by the fan comparison cards
pub type CompareMode = Airflow;

/// Number of fans drawn per multi-fan bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FanCount {
    Two,
    #[default]
    Three,
}

impl FanCount {
    pub fn get(self) -> usize {
        match self {
            FanCount::Two => 2,
            FanCount::Three => 3,
        }
    }
}

impl TryFrom<u8> for FanCount {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(FanCount::Two),
            3 => Ok(FanCount::Three),
            other => anyhow::bail!("Fan count must be 2 or 3, got {}", other),
        }
    }
}

/// Rotation preset for fan rotors, derived from the heat load toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationSpeed {
    Slow,
    Fast,
}

impl AnimationSpeed {
    pub fn from_heat_load(enabled: bool) -> Self {
        if enabled {
            AnimationSpeed::Fast
        } else {
            AnimationSpeed::Slow
        }
    }

    /// Time for one full fan revolution
    pub fn rotor_period(self) -> Duration {
        match self {
            AnimationSpeed::Slow => Duration::from_millis(3000),
            AnimationSpeed::Fast => Duration::from_millis(500),
        }
    }

    /// Time for one full CPU cooler revolution
    pub fn cooler_period(self) -> Duration {
        match self {
            AnimationSpeed::Slow => Duration::from_millis(2000),
            AnimationSpeed::Fast => Duration::from_millis(500),
        }
    }
}

/// Whether a zone is drawn at full strength or faded out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Highlighted,
    Dimmed,
}

impl Visibility {
    pub fn is_highlighted(self) -> bool {
        self == Visibility::Highlighted
    }
}

/// The four session fields of one guide view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub selected_zone: Zone,
    pub heat_load: bool,
    pub fan_count: FanCount,
    pub compare_mode: CompareMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected_zone: Zone::Overview,
            heat_load: false,
            fan_count: FanCount::Three,
            compare_mode: Airflow::Intake,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = ViewState::default();
        assert_eq!(state.selected_zone, Zone::Overview);
        assert!(!state.heat_load);
        assert_eq!(state.fan_count.get(), 3);
        assert_eq!(state.compare_mode, Airflow::Intake);
    }

    #[test]
    fn test_fan_count_conversion() {
        assert_eq!(FanCount::try_from(2).unwrap(), FanCount::Two);
        assert_eq!(FanCount::try_from(3).unwrap(), FanCount::Three);
        assert!(FanCount::try_from(0).is_err());
        assert!(FanCount::try_from(4).is_err());
    }

    #[test]
    fn test_animation_presets() {
        assert_eq!(AnimationSpeed::from_heat_load(false), AnimationSpeed::Slow);
        assert_eq!(AnimationSpeed::from_heat_load(true), AnimationSpeed::Fast);
        assert!(AnimationSpeed::Fast.rotor_period() < AnimationSpeed::Slow.rotor_period());
        assert!(AnimationSpeed::Fast.cooler_period() < AnimationSpeed::Slow.cooler_period());
    }
}

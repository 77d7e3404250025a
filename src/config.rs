//! Configuration loader plus strongly typed settings structures.
//!
//! Settings live in `~/.airflow-guide/config.toml` (or the directory named by
//! `AIRFLOW_GUIDE_DIR`). The file is optional: when it is missing the embedded
//! defaults are used, and the guide never writes anything back.

use crate::core::actions::{key_event_to_string, normalize_keybind, Action};
use crate::data::{Airflow, FanCount, Zone};
use crate::theme::ColorFilter;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod keybind_validator;

// Embed default configuration at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "AIRFLOW_GUIDE_DIR";

/// Top-level configuration object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub colors: ColorConfig,
    #[serde(default)]
    pub keybinds: Keybinds,
}

/// Rendering options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll timeout; also the frame interval for animations
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
    #[serde(default = "default_true")]
    pub show_summary: bool,
    #[serde(default = "default_true")]
    pub show_legend: bool,
    #[serde(default)]
    pub color_filter: ColorFilter,
}

fn default_poll_timeout_ms() -> u64 {
    33
}
fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_timeout_ms: default_poll_timeout_ms(),
            show_summary: true,
            show_legend: true,
            color_filter: ColorFilter::default(),
        }
    }
}

/// Palette as hex strings ("#rrggbb")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    #[serde(default = "default_cold_color")]
    pub cold: String, // Intake arrows and fans
    #[serde(default = "default_cold_particle_color")]
    pub cold_particle: String,
    #[serde(default = "default_hot_color")]
    pub hot: String, // Exhaust arrows, fans and heat glow
    #[serde(default = "default_accent_color")]
    pub accent: String, // Titles and selected buttons
    #[serde(default = "default_good_color")]
    pub good: String,
    #[serde(default = "default_bad_color")]
    pub bad: String,
    #[serde(default = "default_text_color")]
    pub text: String,
    #[serde(default = "default_muted_color")]
    pub muted: String,
    #[serde(default = "default_border_color")]
    pub border: String,
    #[serde(default = "default_background_color")]
    pub background: String,
}

fn default_cold_color() -> String {
    "#3b82f6".to_string()
}
fn default_cold_particle_color() -> String {
    "#22d3ee".to_string()
}
fn default_hot_color() -> String {
    "#ef4444".to_string()
}
fn default_accent_color() -> String {
    "#22d3ee".to_string()
}
fn default_good_color() -> String {
    "#4ade80".to_string()
}
fn default_bad_color() -> String {
    "#f87171".to_string()
}
fn default_text_color() -> String {
    "#cbd5e1".to_string()
}
fn default_muted_color() -> String {
    "#94a3b8".to_string()
}
fn default_border_color() -> String {
    "#475569".to_string()
}
fn default_background_color() -> String {
    "#0f172a".to_string()
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            cold: default_cold_color(),
            cold_particle: default_cold_particle_color(),
            hot: default_hot_color(),
            accent: default_accent_color(),
            good: default_good_color(),
            bad: default_bad_color(),
            text: default_text_color(),
            muted: default_muted_color(),
            border: default_border_color(),
            background: default_background_color(),
        }
    }
}

/// One keybind string per action ("q", "Shift+Tab", "Ctrl+x", ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keybinds {
    #[serde(default = "default_zone_overview")]
    pub zone_overview: String,
    #[serde(default = "default_zone_bottom")]
    pub zone_bottom: String,
    #[serde(default = "default_zone_side")]
    pub zone_side: String,
    #[serde(default = "default_zone_top")]
    pub zone_top: String,
    #[serde(default = "default_zone_rear")]
    pub zone_rear: String,
    #[serde(default = "default_next_zone")]
    pub next_zone: String,
    #[serde(default = "default_previous_zone")]
    pub previous_zone: String,

    #[serde(default = "default_toggle_heat")]
    pub toggle_heat: String,
    #[serde(default = "default_two_fans")]
    pub two_fans: String,
    #[serde(default = "default_three_fans")]
    pub three_fans: String,

    #[serde(default = "default_compare_intake")]
    pub compare_intake: String,
    #[serde(default = "default_compare_exhaust")]
    pub compare_exhaust: String,
    #[serde(default = "default_toggle_compare")]
    pub toggle_compare: String,

    #[serde(default = "default_scroll_up")]
    pub scroll_up: String,
    #[serde(default = "default_scroll_down")]
    pub scroll_down: String,
    #[serde(default = "default_page_up")]
    pub page_up: String,
    #[serde(default = "default_page_down")]
    pub page_down: String,

    #[serde(default = "default_quit")]
    pub quit: String,
}

fn default_zone_overview() -> String {
    "o".to_string()
}
fn default_zone_bottom() -> String {
    "b".to_string()
}
fn default_zone_side() -> String {
    "s".to_string()
}
fn default_zone_top() -> String {
    "t".to_string()
}
fn default_zone_rear() -> String {
    "r".to_string()
}
fn default_next_zone() -> String {
    "Tab".to_string()
}
fn default_previous_zone() -> String {
    "Shift+Tab".to_string()
}
fn default_toggle_heat() -> String {
    "h".to_string()
}
fn default_two_fans() -> String {
    "2".to_string()
}
fn default_three_fans() -> String {
    "3".to_string()
}
fn default_compare_intake() -> String {
    "i".to_string()
}
fn default_compare_exhaust() -> String {
    "e".to_string()
}
fn default_toggle_compare() -> String {
    "c".to_string()
}
fn default_scroll_up() -> String {
    "Up".to_string()
}
fn default_scroll_down() -> String {
    "Down".to_string()
}
fn default_page_up() -> String {
    "PageUp".to_string()
}
fn default_page_down() -> String {
    "PageDown".to_string()
}
pub(crate) fn default_quit() -> String {
    "q".to_string()
}

impl Default for Keybinds {
    fn default() -> Self {
        Self {
            zone_overview: default_zone_overview(),
            zone_bottom: default_zone_bottom(),
            zone_side: default_zone_side(),
            zone_top: default_zone_top(),
            zone_rear: default_zone_rear(),
            next_zone: default_next_zone(),
            previous_zone: default_previous_zone(),
            toggle_heat: default_toggle_heat(),
            two_fans: default_two_fans(),
            three_fans: default_three_fans(),
            compare_intake: default_compare_intake(),
            compare_exhaust: default_compare_exhaust(),
            toggle_compare: default_toggle_compare(),
            scroll_up: default_scroll_up(),
            scroll_down: default_scroll_down(),
            page_up: default_page_up(),
            page_down: default_page_down(),
            quit: default_quit(),
        }
    }
}

impl Keybinds {
    /// Every configurable binding as (field name, keybind, action)
    pub fn bindings(&self) -> Vec<(&'static str, &str, Action)> {
        vec![
            ("zone_overview", self.zone_overview.as_str(), Action::SelectZone(Zone::Overview)),
            ("zone_bottom", self.zone_bottom.as_str(), Action::SelectZone(Zone::Bottom)),
            ("zone_side", self.zone_side.as_str(), Action::SelectZone(Zone::Side)),
            ("zone_top", self.zone_top.as_str(), Action::SelectZone(Zone::Top)),
            ("zone_rear", self.zone_rear.as_str(), Action::SelectZone(Zone::Rear)),
            ("next_zone", self.next_zone.as_str(), Action::NextZone),
            ("previous_zone", self.previous_zone.as_str(), Action::PreviousZone),
            ("toggle_heat", self.toggle_heat.as_str(), Action::ToggleHeatLoad),
            ("two_fans", self.two_fans.as_str(), Action::SetFanCount(FanCount::Two)),
            ("three_fans", self.three_fans.as_str(), Action::SetFanCount(FanCount::Three)),
            ("compare_intake", self.compare_intake.as_str(), Action::SetCompareMode(Airflow::Intake)),
            ("compare_exhaust", self.compare_exhaust.as_str(), Action::SetCompareMode(Airflow::Exhaust)),
            ("toggle_compare", self.toggle_compare.as_str(), Action::ToggleCompareMode),
            ("scroll_up", self.scroll_up.as_str(), Action::ScrollUp),
            ("scroll_down", self.scroll_down.as_str(), Action::ScrollDown),
            ("page_up", self.page_up.as_str(), Action::PageUp),
            ("page_down", self.page_down.as_str(), Action::PageDown),
            ("quit", self.quit.as_str(), Action::Quit),
        ]
    }

    /// Resolve a KeyEvent to an Action
    pub fn resolve_action(&self, key: crossterm::event::KeyEvent) -> Action {
        let key_str = key_event_to_string(key);
        if key_str.is_empty() {
            return Action::None;
        }

        self.bindings()
            .into_iter()
            .find(|(_, bind, _)| !bind.trim().is_empty() && normalize_keybind(bind) == key_str)
            .map(|(_, _, action)| action)
            .unwrap_or(Action::None)
    }

    /// Key hint for the footer, e.g. "h"
    pub fn hint_for(&self, action: Action) -> Option<&str> {
        self.bindings()
            .into_iter()
            .find(|(_, bind, a)| *a == action && !bind.is_empty())
            .map(|(_, bind, _)| bind)
    }
}

impl Config {
    /// Load config for this run: explicit path if given, else the profile file,
    /// else embedded defaults.
    pub fn load_with_options(path_override: Option<&Path>) -> Result<Self> {
        let base_dir = Self::base_dir()?;
        Self::load_in(&base_dir, path_override)
    }

    /// Same as `load_with_options`, with the profile directory given explicitly
    pub fn load_in(base_dir: &Path, path_override: Option<&Path>) -> Result<Self> {
        let mut config = match path_override {
            Some(path) => Self::load_from_path(path)?,
            None => {
                let config_path = Self::config_path_in(base_dir);
                if config_path.exists() {
                    Self::load_from_path(&config_path)?
                } else {
                    tracing::info!(
                        "No config file at {:?}, using built-in defaults",
                        config_path
                    );
                    Self::embedded_default()?
                }
            }
        };

        config.validate_keybinds();
        Ok(config)
    }

    /// Load and parse a specific config file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .context(format!("Failed to parse config file: {:?}", path))?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse the config shipped inside the binary
    pub fn embedded_default() -> Result<Self> {
        toml::from_str(DEFAULT_CONFIG).context("Failed to parse embedded config.toml")
    }

    /// Report keybind problems and repair missing critical bindings
    pub fn validate_keybinds(&mut self) {
        let validation = keybind_validator::validate_keybinds(&self.keybinds);
        if validation.has_errors() {
            tracing::warn!(
                "Keybind validation found {} errors",
                validation.errors().len()
            );
            for error in validation.errors() {
                tracing::warn!("  {}", error.message());
            }

            let fixed = keybind_validator::auto_fix_keybinds(&mut self.keybinds, &validation.issues);
            if fixed > 0 {
                tracing::info!("Auto-fixed {} keybind issues", fixed);
            }
        }
        if validation.has_warnings() {
            for warning in validation.warnings() {
                tracing::warn!("Keybind warning: {}", warning.message());
            }
        }
    }

    /// Get the base directory (~/.airflow-guide/)
    /// Can be overridden with AIRFLOW_GUIDE_DIR environment variable
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var(DIR_ENV_VAR) {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".airflow-guide"))
    }

    /// Get path to config.toml
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_path_in(&Self::base_dir()?))
    }

    /// Path of config.toml inside a given profile directory
    pub fn config_path_in(base_dir: &Path) -> PathBuf {
        base_dir.join("config.toml")
    }
}

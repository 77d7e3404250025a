//! Application theme
//!
//! Resolves the hex palette from `ColorConfig` into ratatui colors once at
//! startup, applies the optional accessibility filter, and provides the
//! blending used to fade out dimmed zones.

use crate::config::ColorConfig;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Resolved colors used by every renderer
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub cold: Color,
    pub cold_particle: Color,
    pub hot: Color,
    pub accent: Color,
    pub good: Color,
    pub bad: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub background: Color,
}

impl AppTheme {
    /// Build from config, falling back to the default for any unparsable entry
    pub fn from_config(colors: &ColorConfig, filter: ColorFilter) -> Self {
        let defaults = ColorConfig::default();
        let resolve = |value: &str, fallback: &str, name: &str| -> Color {
            let color = parse_hex_color(value).unwrap_or_else(|| {
                tracing::warn!("Invalid color '{}' for {}, using {}", value, name, fallback);
                parse_hex_color(fallback).unwrap_or(Color::White)
            });
            filter.apply(color)
        };

        Self {
            cold: resolve(&colors.cold, &defaults.cold, "cold"),
            cold_particle: resolve(&colors.cold_particle, &defaults.cold_particle, "cold_particle"),
            hot: resolve(&colors.hot, &defaults.hot, "hot"),
            accent: resolve(&colors.accent, &defaults.accent, "accent"),
            good: resolve(&colors.good, &defaults.good, "good"),
            bad: resolve(&colors.bad, &defaults.bad, "bad"),
            text: resolve(&colors.text, &defaults.text, "text"),
            muted: resolve(&colors.muted, &defaults.muted, "muted"),
            border: resolve(&colors.border, &defaults.border, "border"),
            background: resolve(&colors.background, &defaults.background, "background"),
        }
    }

    /// Fade a color toward the background (the terminal stand-in for opacity)
    pub fn faded(&self, color: Color, amount: f32) -> Color {
        blend_colors(color, self.background, amount)
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_config(&ColorConfig::default(), ColorFilter::None)
    }
}

/// Parse "#rrggbb" (leading '#' optional)
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

fn color_to_rgb_components(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Indexed(index) => indexed_color_to_rgb(index),
        Color::Reset => (0, 0, 0),
        Color::Black => (0, 0, 0),
        Color::Red => (205, 0, 0),
        Color::Green => (0, 205, 0),
        Color::Yellow => (205, 205, 0),
        Color::Blue => (0, 0, 238),
        Color::Magenta => (205, 0, 205),
        Color::Cyan => (0, 205, 205),
        Color::Gray => (229, 229, 229),
        Color::DarkGray => (127, 127, 127),
        Color::LightRed => (255, 102, 102),
        Color::LightGreen => (102, 255, 102),
        Color::LightYellow => (255, 255, 102),
        Color::LightBlue => (173, 216, 230),
        Color::LightMagenta => (255, 119, 255),
        Color::LightCyan => (224, 255, 255),
        Color::White => (255, 255, 255),
    }
}

fn indexed_color_to_rgb(index: u8) -> (u8, u8, u8) {
    const STANDARD_COLORS: [(u8, u8, u8); 16] = [
        (0, 0, 0),
        (128, 0, 0),
        (0, 128, 0),
        (128, 128, 0),
        (0, 0, 128),
        (128, 0, 128),
        (0, 128, 128),
        (192, 192, 192),
        (128, 128, 128),
        (255, 0, 0),
        (0, 255, 0),
        (255, 255, 0),
        (0, 0, 255),
        (255, 0, 255),
        (0, 255, 255),
        (255, 255, 255),
    ];

    if index < 16 {
        return STANDARD_COLORS[index as usize];
    }

    if index <= 231 {
        let level = index as usize - 16;
        let levels = [0, 95, 135, 175, 215, 255];
        return (levels[level / 36], levels[(level % 36) / 6], levels[level % 6]);
    }

    let gray = 8 + (index - 232) * 10;
    (gray, gray, gray)
}

fn blend_colors(base: Color, other: Color, ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    let (br, bg, bb) = color_to_rgb_components(base);
    let (or, og, ob) = color_to_rgb_components(other);
    let blend_component = |a: u8, b: u8| -> u8 {
        let value = (a as f32) * (1.0 - ratio) + (b as f32) * ratio;
        value.round().clamp(0.0, 255.0) as u8
    };

    Color::Rgb(
        blend_component(br, or),
        blend_component(bg, og),
        blend_component(bb, ob),
    )
}

/// Accessibility filter applied to the whole palette.
///
/// Intake and exhaust are told apart by blue vs red, so the simulations
/// let users check the diagram still reads under color vision deficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorFilter {
    #[default]
    None,
    Grayscale,
    Deuteranopia,
    Protanopia,
    Tritanopia,
}

impl ColorFilter {
    pub fn apply(&self, color: Color) -> Color {
        let (r, g, b) = color_to_rgb_components(color);
        let (r, g, b) = (r as f32, g as f32, b as f32);
        let to_u8 = |v: f32| v.round().clamp(0.0, 255.0) as u8;

        match self {
            ColorFilter::None => color,
            // ITU-R BT.709 luminance
            ColorFilter::Grayscale => {
                let gray = to_u8(0.2126 * r + 0.7152 * g + 0.0722 * b);
                Color::Rgb(gray, gray, gray)
            }
            ColorFilter::Deuteranopia => Color::Rgb(
                to_u8(0.625 * r + 0.375 * g),
                to_u8(0.7 * g + 0.3 * r),
                to_u8(b),
            ),
            ColorFilter::Protanopia => Color::Rgb(
                to_u8(0.567 * r + 0.433 * g),
                to_u8(0.558 * g + 0.442 * r),
                to_u8(b),
            ),
            ColorFilter::Tritanopia => Color::Rgb(
                to_u8(r),
                to_u8(0.95 * g + 0.05 * b),
                to_u8(0.433 * g + 0.567 * b),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ef4444"), Some(Color::Rgb(0xef, 0x44, 0x44)));
        assert_eq!(parse_hex_color("3b82f6"), Some(Color::Rgb(0x3b, 0x82, 0xf6)));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
    }

    #[test]
    fn test_invalid_config_color_falls_back() {
        let colors = ColorConfig {
            hot: "not-a-color".to_string(),
            ..ColorConfig::default()
        };
        let theme = AppTheme::from_config(&colors, ColorFilter::None);
        assert_eq!(theme.hot, Color::Rgb(0xef, 0x44, 0x44));
    }

    #[test]
    fn test_faded_moves_toward_background() {
        let theme = AppTheme::default();
        assert_eq!(theme.faded(theme.hot, 0.0), theme.hot);
        assert_eq!(theme.faded(theme.hot, 1.0), theme.background);
    }

    #[test]
    fn test_grayscale_filter() {
        let gray = ColorFilter::Grayscale.apply(Color::Rgb(255, 0, 0));
        match gray {
            Color::Rgb(r, g, b) => {
                assert_eq!(r, g);
                assert_eq!(g, b);
            }
            other => panic!("Expected RGB, got {:?}", other),
        }
    }

    #[test]
    fn test_none_filter_is_identity() {
        assert_eq!(ColorFilter::None.apply(Color::Cyan), Color::Cyan);
    }
}

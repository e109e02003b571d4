//! Configuration types for SynthesiaCanvas
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `UiSettings`, `BehaviorSettings` - Settings sections
//! - `IconMode` - Glyph set selection

use serde::{Deserialize, Serialize};

use crate::route::HOME_PATH;

/// Icon rendering mode.
///
/// Controls whether icons use Nerd Font glyphs (requires a Nerd Font) or safe
/// Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Start with the sidebar collapsed to icons
    #[serde(default)]
    pub sidebar_collapsed: bool,

    /// Terminal width (columns) below which the narrow layout with a drawer
    /// is used
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            sidebar_collapsed: false,
            mobile_breakpoint: default_mobile_breakpoint(),
        }
    }
}

fn default_mobile_breakpoint() -> u16 {
    100
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Route opened at startup when none is given on the command line
    #[serde(default = "default_start_route")]
    pub start_route: String,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            start_route: default_start_route(),
        }
    }
}

fn default_start_route() -> String {
    HOME_PATH.to_string()
}

/// Global application settings from config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.ui.mobile_breakpoint, 100);
        assert_eq!(settings.behavior.start_route, "/dashboard");
    }

    #[test]
    fn test_partial_sections() {
        let settings: Settings = toml::from_str(
            r#"
            [ui]
            icons = "nerd_fonts"
            sidebar_collapsed = true
            "#,
        )
        .unwrap();
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert!(settings.ui.sidebar_collapsed);
        assert_eq!(settings.ui.mobile_breakpoint, 100);
    }

    #[test]
    fn test_icon_mode_display() {
        assert_eq!(IconMode::Unicode.to_string(), "unicode");
        assert_eq!(IconMode::NerdFonts.to_string(), "nerd_fonts");
    }
}

//! Theme mode selection shared by every layer.
//!
//! The mode is the only piece of UI state that survives a restart. It is
//! stored as one of the literal strings `light`, `dark` or `ocean`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Key under which the active mode is persisted.
pub const THEME_MODE_KEY: &str = "themeMode";

/// Named visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Bright backgrounds with blue/purple accents
    #[default]
    Light,
    /// Dark backgrounds with brightened accents
    Dark,
    /// Navy background with teal/orange accents
    Ocean,
}

impl ThemeMode {
    /// All modes in picker order.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Ocean];

    /// Persisted literal for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Ocean => "ocean",
        }
    }

    /// Label shown in the theme picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::Ocean => "Ocean",
        }
    }

    /// Parse a persisted value, falling back to [`ThemeMode::Light`] when the
    /// value is missing or unrecognized.
    pub fn from_persisted(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse::<ThemeMode>().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the three mode literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl fmt::Display for UnknownThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme mode '{}'", self.0)
    }
}

impl std::error::Error for UnknownThemeMode {}

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    // Exact literals only; "Dark" or " dark" are treated as unrecognized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "ocean" => Ok(ThemeMode::Ocean),
            other => Err(UnknownThemeMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_literals() {
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!("ocean".parse::<ThemeMode>().unwrap(), ThemeMode::Ocean);
    }

    #[test]
    fn test_parse_rejects_other_spellings() {
        assert!("Dark".parse::<ThemeMode>().is_err());
        assert!("".parse::<ThemeMode>().is_err());
        assert!("solarized".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_from_persisted_falls_back_to_light() {
        assert_eq!(ThemeMode::from_persisted(None), ThemeMode::Light);
        assert_eq!(ThemeMode::from_persisted(Some("neon")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_persisted(Some("ocean")), ThemeMode::Ocean);
    }

    #[test]
    fn test_display_matches_persisted_literal() {
        for mode in ThemeMode::ALL {
            assert_eq!(mode.to_string().parse::<ThemeMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&ThemeMode::Ocean).unwrap();
        assert_eq!(json, "\"ocean\"");
    }
}

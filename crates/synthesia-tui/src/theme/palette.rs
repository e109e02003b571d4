//! Colour palettes for the three theme modes.
//!
//! Every role is an exact 24-bit colour; terminals without truecolor get
//! ratatui's nearest approximation.

use ratatui::style::Color;
use synthesia_core::Tone;

/// `0xRRGGBB` to a truecolor [`Color`].
pub const fn hex(rgb: u32) -> Color {
    Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// One semantic colour with its tonal variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRole {
    pub main: Color,
    pub light: Color,
    pub dark: Color,
    /// Text drawn on top of `main`
    pub contrast_text: Option<Color>,
}

impl ColorRole {
    const fn new(main: u32, light: u32, dark: u32) -> Self {
        Self {
            main: hex(main),
            light: hex(light),
            dark: hex(dark),
            contrast_text: None,
        }
    }

    const fn with_contrast(self, contrast: u32) -> Self {
        Self {
            contrast_text: Some(hex(contrast)),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    /// Screen background
    pub default: Color,
    /// Panels, cards and popovers
    pub paper: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextColors {
    pub primary: Color,
    pub secondary: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Dark-surface palette (dark and ocean)
    pub is_dark: bool,
    pub primary: ColorRole,
    pub secondary: ColorRole,
    pub success: ColorRole,
    pub warning: ColorRole,
    pub error: ColorRole,
    pub info: ColorRole,
    pub background: Background,
    pub text: TextColors,
    pub divider: Color,
}

impl Palette {
    /// Foreground for a status chip.
    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Success => self.success.main,
            Tone::Warning => self.warning.main,
            Tone::Info => self.info.main,
            Tone::Error => self.error.main,
            Tone::Neutral => self.text.secondary,
        }
    }

    /// Text drawn on a `primary.main` fill.
    pub fn on_primary(&self) -> Color {
        self.primary.contrast_text.unwrap_or(self.background.paper)
    }
}

/// Clean, bright surfaces with blue and purple accents.
pub const LIGHT: Palette = Palette {
    is_dark: false,
    primary: ColorRole::new(0x2563eb, 0x3b82f6, 0x1d4ed8).with_contrast(0xffffff),
    secondary: ColorRole::new(0x7c3aed, 0x8b5cf6, 0x6d28d9).with_contrast(0xffffff),
    success: ColorRole::new(0x10b981, 0x34d399, 0x059669),
    warning: ColorRole::new(0xf59e0b, 0xfbbf24, 0xd97706),
    error: ColorRole::new(0xef4444, 0xf87171, 0xdc2626),
    info: ColorRole::new(0x06b6d4, 0x22d3ee, 0x0891b2),
    background: Background {
        default: hex(0xf8fafc),
        paper: hex(0xffffff),
    },
    text: TextColors {
        primary: hex(0x0f172a),
        secondary: hex(0x475569),
    },
    divider: hex(0xe2e8f0),
};

/// Slate surfaces with brightened accents.
pub const DARK: Palette = Palette {
    is_dark: true,
    primary: ColorRole::new(0x60a5fa, 0x93c5fd, 0x3b82f6).with_contrast(0x0f172a),
    secondary: ColorRole::new(0xa78bfa, 0xc4b5fd, 0x8b5cf6).with_contrast(0x0f172a),
    success: ColorRole::new(0x34d399, 0x6ee7b7, 0x10b981),
    warning: ColorRole::new(0xfbbf24, 0xfcd34d, 0xf59e0b),
    error: ColorRole::new(0xf87171, 0xfca5a5, 0xef4444),
    info: ColorRole::new(0x22d3ee, 0x67e8f9, 0x06b6d4),
    background: Background {
        default: hex(0x0f172a),
        paper: hex(0x1e293b),
    },
    text: TextColors {
        primary: hex(0xf1f5f9),
        secondary: hex(0x94a3b8),
    },
    divider: hex(0x334155),
};

/// Navy surfaces with teal and orange accents.
pub const OCEAN: Palette = Palette {
    is_dark: true,
    primary: ColorRole::new(0x14b8a6, 0x2dd4bf, 0x0f766e).with_contrast(0xffffff),
    secondary: ColorRole::new(0xfb923c, 0xfdba74, 0xea580c).with_contrast(0xffffff),
    success: ColorRole::new(0x22c55e, 0x4ade80, 0x16a34a),
    warning: ColorRole::new(0xeab308, 0xfacc15, 0xca8a04),
    error: ColorRole::new(0xf43f5e, 0xfb7185, 0xe11d48),
    info: ColorRole::new(0x06b6d4, 0x22d3ee, 0x0891b2),
    background: Background {
        default: hex(0x0a1628),
        paper: hex(0x112240),
    },
    text: TextColors {
        primary: hex(0xe2e8f0),
        secondary: hex(0x94a3b8),
    },
    divider: hex(0x1e3a5f),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_splits_channels() {
        assert_eq!(hex(0x2563eb), Color::Rgb(0x25, 0x63, 0xeb));
        assert_eq!(hex(0x000000), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_primary_roles_have_contrast_text() {
        for palette in [LIGHT, DARK, OCEAN] {
            assert!(palette.primary.contrast_text.is_some());
            assert!(palette.secondary.contrast_text.is_some());
        }
    }

    #[test]
    fn test_neutral_tone_uses_secondary_text() {
        assert_eq!(OCEAN.tone(Tone::Neutral), OCEAN.text.secondary);
        assert_eq!(DARK.tone(Tone::Error), hex(0xf87171));
    }

    #[test]
    fn test_only_light_is_bright() {
        assert!(!LIGHT.is_dark);
        assert!(DARK.is_dark);
        assert!(OCEAN.is_dark);
    }
}

//! Theme registry: one immutable [`ThemeDefinition`] per [`ThemeMode`].

use ratatui::style::Modifier;
use synthesia_core::ThemeMode;

use super::palette::{self, Palette};

pub const FONT_FAMILY: &str = "\"Inter\", \"Segoe UI\", \"Roboto\", \"Helvetica\", \"Arial\", sans-serif";

/// Shared corner radius for every surface.
pub const BORDER_RADIUS: u16 = 12;

/// One step of the type scale. Sizes are in rem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextVariant {
    pub font_size: f32,
    pub font_weight: u16,
    pub line_height: f32,
}

impl TextVariant {
    const fn new(font_size: f32, font_weight: u16, line_height: f32) -> Self {
        Self {
            font_size,
            font_weight,
            line_height,
        }
    }

    /// Terminal emphasis for this weight.
    pub fn modifier(&self) -> Modifier {
        if self.font_weight >= 600 {
            Modifier::BOLD
        } else {
            Modifier::empty()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonText {
    pub font_weight: u16,
    /// Labels keep their case
    pub uppercase: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub font_family: &'static str,
    pub h1: TextVariant,
    pub h2: TextVariant,
    pub h3: TextVariant,
    pub h4: TextVariant,
    pub h5: TextVariant,
    pub h6: TextVariant,
    pub button: ButtonText,
}

impl Typography {
    /// Heading for `level` in `1..=6`; out-of-range levels clamp.
    pub fn heading(&self, level: u8) -> &TextVariant {
        match level {
            0 | 1 => &self.h1,
            2 => &self.h2,
            3 => &self.h3,
            4 => &self.h4,
            5 => &self.h5,
            _ => &self.h6,
        }
    }
}

const TYPOGRAPHY: Typography = Typography {
    font_family: FONT_FAMILY,
    h1: TextVariant::new(2.5, 700, 1.2),
    h2: TextVariant::new(2.0, 700, 1.3),
    h3: TextVariant::new(1.75, 600, 1.4),
    h4: TextVariant::new(1.5, 600, 1.4),
    h5: TextVariant::new(1.25, 600, 1.5),
    h6: TextVariant::new(1.0, 600, 1.5),
    button: ButtonText {
        font_weight: 500,
        uppercase: false,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub border_radius: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonOverride {
    pub border_radius: u16,
    /// Vertical, horizontal padding in pixels
    pub padding: (u16, u16),
    pub font_weight: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceOverride {
    pub border_radius: u16,
    /// Outline cards in a tint of the primary colour
    pub accent_border: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipOverride {
    pub border_radius: u16,
    pub font_weight: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentOverrides {
    pub button: ButtonOverride,
    pub card: SurfaceOverride,
    pub paper: SurfaceOverride,
    pub chip: ChipOverride,
}

const fn components(accent_card_border: bool) -> ComponentOverrides {
    ComponentOverrides {
        button: ButtonOverride {
            border_radius: 10,
            padding: (10, 20),
            font_weight: 500,
        },
        card: SurfaceOverride {
            border_radius: BORDER_RADIUS,
            accent_border: accent_card_border,
        },
        paper: SurfaceOverride {
            border_radius: BORDER_RADIUS,
            accent_border: false,
        },
        chip: ChipOverride {
            border_radius: 8,
            font_weight: 500,
        },
    }
}

/// Complete styling for one mode. Never mutated; a mode change swaps the
/// whole value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeDefinition {
    pub mode: ThemeMode,
    pub palette: Palette,
    pub typography: Typography,
    pub shape: Shape,
    pub components: ComponentOverrides,
}

pub fn theme_for(mode: ThemeMode) -> ThemeDefinition {
    let (palette, accent_card_border) = match mode {
        ThemeMode::Light => (palette::LIGHT, false),
        ThemeMode::Dark => (palette::DARK, false),
        ThemeMode::Ocean => (palette::OCEAN, true),
    };
    ThemeDefinition {
        mode,
        palette,
        typography: TYPOGRAPHY,
        shape: Shape {
            border_radius: BORDER_RADIUS,
        },
        components: components(accent_card_border),
    }
}

/// Resolve a raw mode name; anything unrecognised gets the light theme.
pub fn theme_for_name(name: &str) -> ThemeDefinition {
    theme_for(ThemeMode::from_persisted(Some(name)))
}

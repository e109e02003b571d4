//! Theme registry and style builders.
//!
//! - `registry`: `ThemeDefinition` per `ThemeMode` (palette, typography, shape)
//! - `palette`: exact colour values for light, dark and ocean
//! - `styles`: semantic style builders over a definition
//! - `icons`: glyphs with Nerd Font and Unicode variants

pub mod icons;
pub mod palette;
pub mod registry;
pub mod styles;

pub use registry::{theme_for, theme_for_name, ThemeDefinition};

//! Configuration file parsing for SynthesiaCanvas
//!
//! Supports:
//! - `<config_dir>/synthesia-canvas/config.toml` - Global settings
//! - `<config_dir>/synthesia-canvas/preferences.toml` - Persisted theme mode
//!   (managed by [`crate::preferences`])

pub mod settings;
pub mod types;

pub use settings::{
    config_dir, init_config_dir, load_settings, read_settings, save_settings, CONFIG_FILENAME,
};
pub use types::*;

//! Settings parser for config.toml

use super::types::Settings;
use std::path::{Path, PathBuf};
use synthesia_core::prelude::*;

pub const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "synthesia-canvas";

/// Resolve the configuration directory.
///
/// `override_dir` wins; otherwise `<config_dir>/synthesia-canvas`, or a
/// relative `.synthesia-canvas` when the platform has no config dir.
pub fn config_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    dirs::config_dir()
        .map(|base| base.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(format!(".{}", APP_DIR)))
}

/// Load settings from `<dir>/config.toml`, falling back to defaults.
pub fn load_settings(dir: &Path) -> Settings {
    match read_settings(dir) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("{}; using default settings", e);
            Settings::default()
        }
    }
}

/// Read `<dir>/config.toml`. A missing file gives the defaults; an
/// unreadable or malformed one is an error.
pub fn read_settings(dir: &Path) -> Result<Settings> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::config(format!("Failed to read {}: {}", config_path.display(), e))
    })?;
    let settings = toml::from_str(&content).map_err(|e| {
        Error::config_invalid(format!("{}: {}", config_path.display(), e))
    })?;
    debug!("Loaded settings from {:?}", config_path);
    Ok(settings)
}

/// Create the config directory with a default config.toml if missing.
pub fn init_config_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        save_settings(dir, &Settings::default())?;
    }
    Ok(())
}

/// Save settings to `<dir>/config.toml` atomically.
pub fn save_settings(dir: &Path, settings: &Settings) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    let temp_path = dir.join(".config.toml.tmp");

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    let full_content = format!("{}{}", generate_config_header(), content);

    // Atomic write: write to temp, then rename
    std::fs::write(&temp_path, &full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, &config_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved settings to {:?}", config_path);
    Ok(())
}

fn generate_config_header() -> String {
    r#"# SynthesiaCanvas Configuration
#
# [ui]
#   icons             - "unicode" or "nerd_fonts"
#   sidebar_collapsed - start with the sidebar collapsed to icons
#   mobile_breakpoint - width in columns below which the drawer layout is used
# [behavior]
#   start_route       - page opened at startup, e.g. "/agents"

"#
    .to_string()
}

//! SynthesiaCanvas - composition root
//!
//! Wires the catalog, settings and theme context into an [`AppState`] and
//! hands it to the terminal UI.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use synthesia_app::config::{self, Settings};
use synthesia_app::preferences::FilePreferenceStore;
use synthesia_app::{AppState, ThemeContext};
use synthesia_core::prelude::*;
use synthesia_core::{logging, Catalog, MockCatalog, ThemeMode};

/// Startup options, usually from the command line.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub route: Option<String>,
    pub config_dir: Option<PathBuf>,
    pub data: Option<PathBuf>,
    pub theme: Option<ThemeMode>,
}

/// Main application entry point
pub async fn run(options: Options) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    logging::init()?;

    log_startup_banner();

    let result = match build_state(&options) {
        Ok(state) => synthesia_tui::run(state).await,
        Err(e) => Err(e),
    };

    if let Err(ref e) = result {
        error!("{}: {:?}", failure_label(e), e);
    }

    info!("SynthesiaCanvas exiting");
    result
}

fn log_startup_banner() {
    info!("═══════════════════════════════════════════════════════");
    info!("SynthesiaCanvas starting");
    info!("═══════════════════════════════════════════════════════");
}

/// Assemble the model: settings, catalog, theme context and start route.
pub fn build_state(options: &Options) -> Result<AppState> {
    let dir = config::config_dir(options.config_dir.as_deref());
    if let Err(e) = config::init_config_dir(&dir) {
        warn!("Config directory unavailable: {}", e);
    }
    let settings = config::load_settings(&dir);
    info!("Config dir: {}", dir.display());

    let catalog = load_catalog(options.data.as_deref()).context("Failed to load catalog")?;
    let start_route = options
        .route
        .clone()
        .unwrap_or_else(|| settings.behavior.start_route.clone());

    let mut state = new_state(catalog, settings, &dir);

    if let Some(mode) = options.theme {
        if let Err(e) = state.theme_mut().set_theme_mode(mode) {
            warn!("Theme mode not saved: {}", e);
        }
    }

    match state.navigate(&start_route) {
        Ok(()) => {}
        Err(e) if e.is_recoverable() => {
            warn!("Ignoring start route: {}", e);
            state.set_error_status(format!("No page at {}", start_route));
        }
        Err(e) => return Err(e),
    }
    info!("Starting at {}", state.current_path());

    Ok(state)
}

/// Log prefix for an error that ended the run.
fn failure_label(e: &Error) -> &'static str {
    if e.is_fatal() {
        "Fatal error"
    } else {
        "Application error"
    }
}

fn load_catalog(data: Option<&Path>) -> Result<Arc<dyn Catalog>> {
    let catalog = match data {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            MockCatalog::from_file(path)?
        }
        None => MockCatalog::builtin()?,
    };
    Ok(Arc::new(catalog))
}

fn new_state(catalog: Arc<dyn Catalog>, settings: Settings, dir: &Path) -> AppState {
    let mut state = AppState::new(catalog, settings);
    let store = FilePreferenceStore::in_dir(dir);
    state.install_theme(ThemeContext::init(Box::new(store)));
    state
}

//! Application state (Model in TEA pattern)

use std::sync::Arc;

use synthesia_core::prelude::*;
use synthesia_core::{Catalog, ThemeMode};

use crate::config::Settings;
use crate::menus::MenuState;
use crate::navigation;
use crate::page::PageState;
use crate::route::Route;
use crate::sidebar::SidebarState;
use crate::theme_context::ThemeContext;
use crate::views;

/// How long a status line message stays visible, in ticks (~50ms each).
pub const STATUS_TICKS: u16 = 80;

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Shell and page accept navigation keys
    #[default]
    Normal,

    /// Search input mode - capturing text for the page filter
    SearchInput,

    /// A header popover menu is open
    Menu,
}

/// Which pane receives arrow keys and `Enter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Sidebar,
    #[default]
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    ticks_left: u16,
}

pub struct AppState {
    /// Page currently shown
    pub route: Route,

    /// Read-only records
    pub catalog: Arc<dyn Catalog>,

    /// Application settings from config file
    pub settings: Settings,

    pub sidebar: SidebarState,
    pub menu: MenuState,

    /// Ephemeral filter/selection state of the current page
    pub page: PageState,

    pub ui_mode: UiMode,
    pub focus: Focus,
    pub phase: AppPhase,

    /// Transient status line message
    pub status: Option<StatusMessage>,

    /// Last known terminal width, drives the narrow layout
    pub viewport_width: u16,

    theme: Option<ThemeContext>,
}

impl AppState {
    /// Build the model. The theme context is installed separately by the
    /// composition root with [`AppState::install_theme`].
    pub fn new(catalog: Arc<dyn Catalog>, settings: Settings) -> Self {
        let sidebar = SidebarState::new(settings.ui.sidebar_collapsed);
        Self {
            route: Route::default(),
            catalog,
            settings,
            sidebar,
            menu: MenuState::default(),
            page: PageState::default(),
            ui_mode: UiMode::default(),
            focus: Focus::default(),
            phase: AppPhase::default(),
            status: None,
            viewport_width: u16::MAX,
            theme: None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────

    pub fn install_theme(&mut self, context: ThemeContext) {
        self.theme = Some(context);
    }

    /// The installed theme context.
    ///
    /// # Panics
    ///
    /// Panics when no context was installed. That is a wiring bug at
    /// startup and never substituted with a default.
    pub fn theme(&self) -> &ThemeContext {
        match &self.theme {
            Some(context) => context,
            None => panic!(
                "ThemeContext accessed before it was installed; \
                 call AppState::install_theme in the composition root"
            ),
        }
    }

    /// Mutable access to the installed theme context. Panics like
    /// [`AppState::theme`].
    pub fn theme_mut(&mut self) -> &mut ThemeContext {
        match &mut self.theme {
            Some(context) => context,
            None => panic!(
                "ThemeContext accessed before it was installed; \
                 call AppState::install_theme in the composition root"
            ),
        }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme().theme_mode()
    }

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────

    pub fn current_path(&self) -> String {
        self.route.path()
    }

    pub fn section_title(&self) -> &'static str {
        navigation::section_title(&self.current_path())
    }

    /// Resolve `path` and show it. Unknown paths leave the current page in
    /// place and return the routing error.
    pub fn navigate(&mut self, path: &str) -> Result<()> {
        let route = Route::resolve(path)?;
        self.go_to(route);
        Ok(())
    }

    /// Show `route`. Page state resets only when the route actually changes;
    /// the drawer closes either way.
    pub fn go_to(&mut self, route: Route) {
        if route != self.route {
            debug!("Route {} -> {}", self.route, route);
            self.route = route;
            self.page.reset();
            if self.ui_mode == UiMode::SearchInput {
                self.ui_mode = UiMode::Normal;
            }
        }
        if let Some(index) = navigation::active_index(&self.current_path()) {
            self.sidebar.focused = index;
        }
        if self.sidebar.is_mobile_open {
            self.sidebar.close_mobile();
            self.focus = Focus::Content;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────

    /// Narrow layout: the sidebar is replaced by an overlay drawer.
    pub fn is_mobile(&self) -> bool {
        self.viewport_width < self.settings.ui.mobile_breakpoint
    }

    /// Whether any form of the sidebar is on screen.
    pub fn sidebar_visible(&self) -> bool {
        !self.is_mobile() || self.sidebar.is_mobile_open
    }

    // ─────────────────────────────────────────────────────────
    // Page content
    // ─────────────────────────────────────────────────────────

    pub fn content_targets(&self) -> Vec<Route> {
        views::content_targets(self.catalog.as_ref(), &self.route, &self.page)
    }

    pub fn content_len(&self) -> usize {
        self.content_targets().len()
    }

    // ─────────────────────────────────────────────────────────
    // Status line
    // ─────────────────────────────────────────────────────────

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level: StatusLevel::Info,
            ticks_left: STATUS_TICKS,
        });
    }

    pub fn set_error_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level: StatusLevel::Error,
            ticks_left: STATUS_TICKS,
        });
    }

    /// Age the status message, clearing it once it expires.
    pub fn tick_status(&mut self) {
        if let Some(status) = &mut self.status {
            status.ticks_left = status.ticks_left.saturating_sub(1);
            if status.ticks_left == 0 {
                self.status = None;
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

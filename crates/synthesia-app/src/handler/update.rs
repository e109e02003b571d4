//! Main update function - handles state transitions (TEA pattern)

use std::sync::Arc;

use synthesia_core::prelude::*;

use crate::menus::AccountAction;
use crate::message::Message;
use crate::route::Route;
use crate::state::{AppPhase, AppState, Focus, UiMode};

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick_status();
            UpdateResult::none()
        }

        Message::Resize { width, .. } => {
            state.viewport_width = width;
            if !state.is_mobile() && state.sidebar.is_mobile_open {
                state.sidebar.close_mobile();
            }
            if !state.sidebar_visible() {
                state.focus = Focus::Content;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(path) => {
            if let Err(e) = state.navigate(&path) {
                warn!("Refusing navigation: {}", e);
                state.set_error_status(format!("No page at {}", path));
            }
            UpdateResult::none()
        }

        Message::Back => {
            if let Some(parent) = state.route.parent() {
                state.go_to(parent);
            }
            UpdateResult::none()
        }

        Message::OpenSelected => match state.focus {
            Focus::Sidebar => {
                UpdateResult::message(Message::Navigate(state.sidebar.focused_path().to_string()))
            }
            Focus::Content => {
                let target = state.content_targets().get(state.page.selected).cloned();
                if let Some(route) = target {
                    state.go_to(route);
                }
                UpdateResult::none()
            }
        },

        Message::SelectNext => {
            match state.focus {
                Focus::Sidebar => state.sidebar.focus_next(),
                Focus::Content => {
                    let len = state.content_len();
                    state.page.select_next(len);
                }
            }
            UpdateResult::none()
        }

        Message::SelectPrevious => {
            match state.focus {
                Focus::Sidebar => state.sidebar.focus_previous(),
                Focus::Content => {
                    let len = state.content_len();
                    state.page.select_previous(len);
                }
            }
            UpdateResult::none()
        }

        Message::ToggleFocus => {
            state.focus = match state.focus {
                Focus::Content if state.sidebar_visible() => Focus::Sidebar,
                _ => Focus::Content,
            };
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Shell
        // ─────────────────────────────────────────────────────────
        Message::ToggleSidebar => {
            state.sidebar.toggle();
            debug!("Sidebar collapsed: {}", state.sidebar.is_collapsed());
            UpdateResult::none()
        }

        Message::ToggleMobileDrawer => {
            if state.is_mobile() {
                state.sidebar.toggle_mobile();
                state.focus = if state.sidebar.is_mobile_open {
                    Focus::Sidebar
                } else {
                    Focus::Content
                };
            }
            UpdateResult::none()
        }

        Message::OpenMenu(menu) => {
            let mode = state.theme_mode();
            state.menu.open(menu, mode);
            state.ui_mode = UiMode::Menu;
            UpdateResult::none()
        }

        Message::CloseMenu => {
            state.menu.close();
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        Message::MenuNext => {
            state.menu.next();
            UpdateResult::none()
        }

        Message::MenuPrevious => {
            state.menu.previous();
            UpdateResult::none()
        }

        Message::MenuSelect => {
            let follow_up = if let Some(mode) = state.menu.selected_theme() {
                Some(Message::SetThemeMode(mode))
            } else {
                match state.menu.selected_account_action() {
                    Some(AccountAction::Settings) => {
                        Some(Message::Navigate(Route::Settings.path()))
                    }
                    Some(AccountAction::Logout) => {
                        state.set_status("Logout is not available in this preview");
                        None
                    }
                    None => None,
                }
            };
            state.menu.close();
            state.ui_mode = UiMode::Normal;
            UpdateResult {
                message: follow_up,
            }
        }

        Message::SetThemeMode(mode) => {
            match state.theme_mut().set_theme_mode(mode) {
                Ok(()) => state.set_status(format!("Theme: {}", mode.display_name())),
                Err(e) => {
                    warn!("Theme preference not saved: {}", e);
                    state.set_error_status(format!(
                        "Theme set to {} but not saved: {}",
                        mode.display_name(),
                        e
                    ));
                }
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Page-local
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            if state.route.is_searchable() {
                state.ui_mode = UiMode::SearchInput;
                state.focus = Focus::Content;
            }
            UpdateResult::none()
        }

        Message::SearchInput { text } => {
            state.page.filter.query = text;
            state.page.selected = 0;
            UpdateResult::none()
        }

        Message::SubmitSearch => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        Message::CancelSearch => {
            state.page.filter.query.clear();
            state.page.selected = 0;
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        Message::NextCategory => cycle_agent_category(state, true),
        Message::PreviousCategory => cycle_agent_category(state, false),

        Message::NextSettingsTab => {
            state.page.settings_tab = state.page.settings_tab.next();
            UpdateResult::none()
        }

        Message::PreviousSettingsTab => {
            state.page.settings_tab = state.page.settings_tab.previous();
            UpdateResult::none()
        }

        Message::NewWorkflow => {
            state.go_to(Route::WorkflowBuilder { id: None });
            UpdateResult::none()
        }
    }
}

/// Move the agents page category tab; other pages have no categories.
fn cycle_agent_category(state: &mut AppState, forward: bool) -> UpdateResult {
    if state.route == Route::Agents {
        let catalog = Arc::clone(&state.catalog);
        let names = catalog.category_names();
        state.page.cycle_category(&names, forward);
    }
    UpdateResult::none()
}

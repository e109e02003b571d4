//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::menus::HeaderMenu;
use crate::message::Message;
use crate::navigation::NAV_ITEMS;
use crate::route::Route;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C in every mode
    if key.is_force_quit() {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::Menu => handle_key_menu(key),
    }
}

/// Handle key events while a header menu is open
fn handle_key_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::MenuPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::MenuNext),
        InputKey::Enter => Some(Message::MenuSelect),
        InputKey::Esc | InputKey::Char('q') => Some(Message::CloseMenu),
        _ => None,
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Cancel search input and clear the query
        InputKey::Esc => Some(Message::CancelSearch),

        // Keep query, exit input mode
        InputKey::Enter | InputKey::Down => Some(Message::SubmitSearch),

        InputKey::Backspace => {
            let mut query = state.page.filter.query.clone();
            query.pop();
            Some(Message::SearchInput { text: query })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut query = state.page.filter.query.clone();
            query.push(c);
            Some(Message::SearchInput { text: query })
        }

        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    let route = &state.route;

    match key {
        InputKey::Char('q') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Shell
        // ─────────────────────────────────────────────────────────
        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleFocus),
        InputKey::Char('b') => Some(Message::ToggleSidebar),
        InputKey::Char('m') => Some(Message::ToggleMobileDrawer),
        InputKey::Char('t') => Some(Message::OpenMenu(HeaderMenu::Theme)),
        InputKey::Char('a') => Some(Message::OpenMenu(HeaderMenu::Account)),
        InputKey::Char('?') => Some(Message::Navigate("/about".to_string())),

        // Number keys jump straight to a sidebar entry
        InputKey::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            NAV_ITEMS
                .get(index)
                .map(|item| Message::Navigate(item.path.to_string()))
        }

        // ─────────────────────────────────────────────────────────
        // Selection
        // ─────────────────────────────────────────────────────────
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Enter => Some(Message::OpenSelected),

        InputKey::Esc => {
            if state.sidebar.is_mobile_open {
                Some(Message::ToggleMobileDrawer)
            } else if route.parent().is_some() {
                Some(Message::Back)
            } else if !state.page.filter.query.is_empty() {
                Some(Message::CancelSearch)
            } else {
                None
            }
        }
        InputKey::Backspace if route.parent().is_some() => Some(Message::Back),

        // ─────────────────────────────────────────────────────────
        // Page-local
        // ─────────────────────────────────────────────────────────
        InputKey::Char('/') if route.is_searchable() => Some(Message::StartSearch),
        InputKey::Char('n') if *route == Route::Workflows => Some(Message::NewWorkflow),

        InputKey::Char('[') | InputKey::Left => match route {
            Route::Agents => Some(Message::PreviousCategory),
            Route::Settings => Some(Message::PreviousSettingsTab),
            _ => None,
        },
        InputKey::Char(']') | InputKey::Right => match route {
            Route::Agents => Some(Message::NextCategory),
            Route::Settings => Some(Message::NextSettingsTab),
            _ => None,
        },

        _ => None,
    }
}

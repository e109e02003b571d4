//! Tests for handler module

use std::sync::Arc;

use super::*;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::menus::HeaderMenu;
use crate::message::Message;
use crate::navigation::NAV_ITEMS;
use crate::preferences::{FilePreferenceStore, MemoryPreferenceStore};
use crate::process::process_message;
use crate::route::Route;
use crate::state::{AppPhase, AppState, Focus, StatusLevel, UiMode};
use crate::theme_context::ThemeContext;
use synthesia_core::{MockCatalog, ThemeMode};

fn test_state() -> AppState {
    let catalog = Arc::new(MockCatalog::builtin().unwrap());
    let mut state = AppState::new(catalog, Settings::default());
    state.install_theme(ThemeContext::init(Box::new(MemoryPreferenceStore::new())));
    state
}

fn press(state: &mut AppState, key: InputKey) {
    process_message(state, Message::Key(key));
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, InputKey::Char(c));
    }
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = test_state();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert!(state.should_quit());
}

#[test]
fn test_q_key_produces_quit_message() {
    let state = test_state();
    assert_eq!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    );
}

#[test]
fn test_ctrl_c_quits_in_every_mode() {
    let mut state = test_state();
    for mode in [UiMode::Normal, UiMode::SearchInput, UiMode::Menu] {
        state.ui_mode = mode;
        assert_eq!(
            handle_key(&state, InputKey::CharCtrl('c')),
            Some(Message::Quit)
        );
    }
}

#[test]
fn test_q_is_text_while_searching() {
    let mut state = test_state();
    state.navigate("/projects").unwrap();
    press(&mut state, InputKey::Char('/'));
    press(&mut state, InputKey::Char('q'));

    assert!(!state.should_quit());
    assert_eq!(state.page.filter.query, "q");
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_navigate_message_changes_route() {
    let mut state = test_state();
    process_message(&mut state, Message::Navigate("/agents/agent-1".into()));

    assert_eq!(
        state.route,
        Route::AgentDetail {
            id: "agent-1".into()
        }
    );
    assert_eq!(state.section_title(), "Agents");
}

#[test]
fn test_unknown_path_is_refused_with_status() {
    let mut state = test_state();
    process_message(&mut state, Message::Navigate("/reports".into()));

    assert_eq!(state.route, Route::Dashboard);
    let status = state.status.as_ref().unwrap();
    assert_eq!(status.level, StatusLevel::Error);
    assert!(status.text.contains("/reports"));
}

#[test]
fn test_number_keys_jump_to_nav_items() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('3'));
    assert_eq!(state.route, Route::Agents);

    press(&mut state, InputKey::Char('7'));
    assert_eq!(state.route, Route::Settings);

    // No eighth entry
    press(&mut state, InputKey::Char('8'));
    assert_eq!(state.route, Route::Settings);
}

#[test]
fn test_question_mark_opens_about() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('?'));
    assert_eq!(state.route, Route::About);
    assert_eq!(state.section_title(), "Dashboard");
}

#[test]
fn test_enter_on_agent_row_opens_detail_and_esc_goes_back() {
    let mut state = test_state();
    state.navigate("/agents").unwrap();

    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);
    assert_eq!(
        state.route,
        Route::AgentDetail {
            id: "agent-2".into()
        }
    );

    press(&mut state, InputKey::Esc);
    assert_eq!(state.route, Route::Agents);
    assert_eq!(state.page.selected, 0);
}

#[test]
fn test_backspace_goes_back_from_detail_only() {
    let mut state = test_state();
    state.navigate("/projects/proj-1").unwrap();
    press(&mut state, InputKey::Backspace);
    assert_eq!(state.route, Route::Projects);

    press(&mut state, InputKey::Backspace);
    assert_eq!(state.route, Route::Projects);
}

#[test]
fn test_not_found_detail_enter_returns_to_list() {
    let mut state = test_state();
    state.navigate("/agents/does-not-exist").unwrap();
    press(&mut state, InputKey::Enter);
    assert_eq!(state.route, Route::Agents);
}

#[test]
fn test_selection_wraps_over_content() {
    let mut state = test_state();
    state.navigate("/projects").unwrap();
    press(&mut state, InputKey::Up);
    assert_eq!(state.page.selected, 3);
    press(&mut state, InputKey::Down);
    assert_eq!(state.page.selected, 0);
}

#[test]
fn test_n_opens_new_workflow_builder() {
    let mut state = test_state();
    state.navigate("/workflows").unwrap();
    press(&mut state, InputKey::Char('n'));
    assert_eq!(state.route, Route::WorkflowBuilder { id: None });
    assert_eq!(state.current_path(), "/workflows/new");
}

// ─────────────────────────────────────────────────────────
// Sidebar
// ─────────────────────────────────────────────────────────

#[test]
fn test_sidebar_navigation_via_focus_and_enter() {
    let mut state = test_state();
    press(&mut state, InputKey::Tab);
    assert_eq!(state.focus, Focus::Sidebar);

    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);
    assert_eq!(state.route, Route::Projects);
}

#[test]
fn test_collapsed_sidebar_still_navigates() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('b'));
    assert!(state.sidebar.is_collapsed());

    press(&mut state, InputKey::Tab);
    for _ in 0..4 {
        press(&mut state, InputKey::Down);
    }
    press(&mut state, InputKey::Enter);
    assert_eq!(state.route, Route::Executions);
    assert!(state.sidebar.is_collapsed());
}

#[test]
fn test_drawer_only_toggles_in_narrow_layout() {
    let mut state = test_state();
    process_message(
        &mut state,
        Message::Resize {
            width: 160,
            height: 40,
        },
    );
    press(&mut state, InputKey::Char('m'));
    assert!(!state.sidebar.is_mobile_open);

    process_message(
        &mut state,
        Message::Resize {
            width: 70,
            height: 40,
        },
    );
    press(&mut state, InputKey::Char('m'));
    assert!(state.sidebar.is_mobile_open);
    assert_eq!(state.focus, Focus::Sidebar);
}

#[test]
fn test_drawer_closes_after_navigation() {
    let mut state = test_state();
    state.viewport_width = 70;
    press(&mut state, InputKey::Char('m'));
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);

    assert_eq!(state.route, Route::Projects);
    assert!(!state.sidebar.is_mobile_open);
    assert_eq!(state.focus, Focus::Content);
}

#[test]
fn test_widening_terminal_closes_drawer() {
    let mut state = test_state();
    state.viewport_width = 70;
    press(&mut state, InputKey::Char('m'));
    process_message(
        &mut state,
        Message::Resize {
            width: 140,
            height: 40,
        },
    );
    assert!(!state.sidebar.is_mobile_open);
}

#[test]
fn test_tab_cannot_focus_hidden_sidebar() {
    let mut state = test_state();
    state.viewport_width = 70;
    press(&mut state, InputKey::Tab);
    assert_eq!(state.focus, Focus::Content);
}

// ─────────────────────────────────────────────────────────
// Menus & theme
// ─────────────────────────────────────────────────────────

#[test]
fn test_theme_menu_selects_mode() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('t'));
    assert_eq!(state.ui_mode, UiMode::Menu);
    assert_eq!(state.menu.open, Some(HeaderMenu::Theme));

    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);

    assert_eq!(state.theme_mode(), ThemeMode::Ocean);
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(!state.menu.is_open());
}

#[test]
fn test_theme_change_persists_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = test_state();
    state.install_theme(ThemeContext::init(Box::new(FilePreferenceStore::in_dir(
        dir.path(),
    ))));

    process_message(&mut state, Message::SetThemeMode(ThemeMode::Dark));

    let reloaded = ThemeContext::init(Box::new(FilePreferenceStore::in_dir(dir.path())));
    assert_eq!(reloaded.theme_mode(), ThemeMode::Dark);
}

#[test]
fn test_theme_write_failure_reports_but_applies() {
    let mut state = test_state();
    state.install_theme(ThemeContext::init(Box::new(
        MemoryPreferenceStore::new().failing_writes(),
    )));

    process_message(&mut state, Message::SetThemeMode(ThemeMode::Ocean));

    assert_eq!(state.theme_mode(), ThemeMode::Ocean);
    assert_eq!(state.status.as_ref().unwrap().level, StatusLevel::Error);
}

#[test]
fn test_account_menu_settings_shortcut() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('a'));
    press(&mut state, InputKey::Enter);
    assert_eq!(state.route, Route::Settings);
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_account_menu_logout_is_placeholder() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('a'));
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);

    assert_eq!(state.route, Route::Dashboard);
    assert!(!state.should_quit());
    assert!(state.status.is_some());
}

#[test]
fn test_esc_closes_menu_without_action() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('t'));
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Esc);
    assert_eq!(state.theme_mode(), ThemeMode::Light);
    assert_eq!(state.ui_mode, UiMode::Normal);
}

// ─────────────────────────────────────────────────────────
// Search & categories
// ─────────────────────────────────────────────────────────

#[test]
fn test_search_only_on_searchable_pages() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('/'));
    assert_eq!(state.ui_mode, UiMode::Normal);

    state.navigate("/projects").unwrap();
    press(&mut state, InputKey::Char('/'));
    assert_eq!(state.ui_mode, UiMode::SearchInput);
}

#[test]
fn test_search_typing_backspace_and_submit() {
    let mut state = test_state();
    state.navigate("/projects").unwrap();
    press(&mut state, InputKey::Char('/'));
    type_text(&mut state, "datax");
    press(&mut state, InputKey::Backspace);
    press(&mut state, InputKey::Enter);

    assert_eq!(state.page.filter.query, "data");
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.content_len(), 1);
}

#[test]
fn test_search_without_matches_leaves_no_targets() {
    let mut state = test_state();
    state.navigate("/projects").unwrap();
    press(&mut state, InputKey::Char('/'));
    type_text(&mut state, "zzzz");
    assert_eq!(state.content_len(), 0);

    press(&mut state, InputKey::Enter);
    assert_eq!(state.route, Route::Projects);
}

#[test]
fn test_narrowing_search_keeps_selection_inside_results() {
    let mut state = test_state();
    state.navigate("/projects").unwrap();
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Down);
    assert_eq!(state.page.selected, 2);

    press(&mut state, InputKey::Char('/'));
    type_text(&mut state, "data");
    press(&mut state, InputKey::Enter);
    assert!(state.page.selected < state.content_len());

    press(&mut state, InputKey::Enter);
    assert_eq!(state.route, Route::ProjectDetail { id: "proj-3".into() });
}

#[test]
fn test_esc_cancels_search_and_clears_query() {
    let mut state = test_state();
    state.navigate("/agents").unwrap();
    press(&mut state, InputKey::Char('/'));
    type_text(&mut state, "seo");
    press(&mut state, InputKey::Esc);

    assert!(state.page.filter.query.is_empty());
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_category_tabs_filter_agents() {
    let mut state = test_state();
    state.navigate("/agents").unwrap();

    press(&mut state, InputKey::Char(']'));
    assert_eq!(
        state.page.filter.category.as_deref(),
        Some("Research & Analysis")
    );
    assert_eq!(state.content_len(), 1);

    press(&mut state, InputKey::Char('['));
    assert_eq!(state.page.filter.category, None);
    assert_eq!(state.content_len(), 6);
}

#[test]
fn test_category_and_query_combine() {
    let mut state = test_state();
    state.navigate("/agents").unwrap();
    // "Content Creation" is the second category
    press(&mut state, InputKey::Char(']'));
    press(&mut state, InputKey::Char(']'));
    press(&mut state, InputKey::Char('/'));
    type_text(&mut state, "writer");

    assert_eq!(
        state.content_targets(),
        vec![Route::AgentDetail {
            id: "agent-2".into()
        }]
    );
}

#[test]
fn test_filter_resets_when_leaving_page() {
    let mut state = test_state();
    state.navigate("/agents").unwrap();
    press(&mut state, InputKey::Char(']'));
    press(&mut state, InputKey::Char('1'));
    press(&mut state, InputKey::Char('3'));

    assert_eq!(state.route, Route::Agents);
    assert_eq!(state.page.filter.category, None);
    assert_eq!(state.page.category_index, 0);
}

#[test]
fn test_settings_tabs_cycle_with_arrows() {
    let mut state = test_state();
    state.navigate("/settings").unwrap();
    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Right);
    assert_eq!(state.page.settings_tab.label(), "API Keys");
    press(&mut state, InputKey::Left);
    assert_eq!(state.page.settings_tab.label(), "Team");
}

#[test]
fn test_tick_expires_status() {
    let mut state = test_state();
    state.set_status("saved");
    for _ in 0..crate::state::STATUS_TICKS {
        update(&mut state, Message::Tick);
    }
    assert!(state.status.is_none());
}

#[test]
fn test_nav_items_cover_number_keys() {
    assert_eq!(NAV_ITEMS.len(), 7);
}

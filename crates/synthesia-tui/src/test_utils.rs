//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's `TestBackend` so widget and full-screen tests can render
//! into an in-memory buffer and search it for text.
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.render_widget(widget, term.area());
//! assert!(term.buffer_contains("expected text"));
//! ```

use std::sync::Arc;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

use synthesia_app::config::{IconMode, Settings};
use synthesia_app::preferences::MemoryPreferenceStore;
use synthesia_app::state::{AppState, Focus};
use synthesia_app::{Route, ThemeContext};
use synthesia_core::{Catalog, MockCatalog, User};

use crate::pages::{Page, PageContext};
use crate::theme::{icons::IconSet, theme_for};

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for testing narrow layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// 40x12
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with `render::view`.
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Whole buffer as text, one line per row (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Wide glyphs occupy two cells; the second holds an empty symbol, so plain
/// concatenation reproduces the rendered text.
fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// The bundled catalog's signed-in user.
pub fn test_user() -> User {
    MockCatalog::builtin()
        .expect("bundled catalog parses")
        .current_user()
        .clone()
}

/// App state over the bundled catalog with an in-memory theme store.
pub fn test_state() -> AppState {
    let catalog = Arc::new(MockCatalog::builtin().expect("bundled catalog parses"));
    let mut state = AppState::new(catalog, Settings::default());
    state.install_theme(ThemeContext::init(Box::new(MemoryPreferenceStore::new())));
    state
}

/// Render `route` as a bare page filling the terminal, with the content
/// pane focused. `setup` adjusts the state first.
pub fn render_page(term: &mut TestTerminal, route: &Route, setup: impl FnOnce(&mut AppState)) {
    let mut state = test_state();
    state.focus = Focus::Content;
    setup(&mut state);

    let theme = theme_for(state.theme_mode());
    let ctx = PageContext {
        theme: &theme,
        icons: IconSet::new(IconMode::Unicode),
        catalog: state.catalog.as_ref(),
        page: &state.page,
        focused: state.focus == Focus::Content,
        searching: false,
    };
    let area = term.area();
    term.render_widget(Page::new(ctx, route), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_sizes() {
        assert_eq!(TestTerminal::new().area(), Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT));
        assert_eq!(
            TestTerminal::compact().area(),
            Rect::new(0, 0, COMPACT_WIDTH, COMPACT_HEIGHT)
        );
    }

    #[test]
    fn test_buffer_contains_and_line_contains() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("Hello World"), term.area());
        assert!(term.buffer_contains("Hello World"));
        assert!(term.line_contains(0, "Hello"));
        assert!(!term.line_contains(1, "Hello"));
        assert!(!term.buffer_contains("Goodbye"));
    }

    #[test]
    fn test_state_has_theme_installed() {
        let state = test_state();
        assert_eq!(state.theme_mode(), synthesia_core::ThemeMode::Light);
        assert_eq!(test_user().first_name, "John");
    }
}

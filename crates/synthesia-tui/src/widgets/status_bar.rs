//! Status line
//!
//! Shows the transient status message when there is one, otherwise the key
//! hints for the current mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use synthesia_app::state::{AppState, StatusLevel, UiMode};

use crate::theme::{styles, ThemeDefinition};

const NORMAL_HINTS: &[(&str, &str)] = &[
    ("Tab", "focus"),
    ("↑↓", "move"),
    ("Enter", "open"),
    ("/", "search"),
    ("b", "sidebar"),
    ("t", "theme"),
    ("a", "account"),
    ("?", "about"),
    ("q", "quit"),
];

const NARROW_HINTS: &[(&str, &str)] = &[
    ("m", "menu"),
    ("↑↓", "move"),
    ("Enter", "open"),
    ("t", "theme"),
    ("q", "quit"),
];

const SEARCH_HINTS: &[(&str, &str)] = &[("Enter", "apply"), ("Esc", "cancel"), ("Ctrl+U", "clear")];

const MENU_HINTS: &[(&str, &str)] = &[("↑↓", "move"), ("Enter", "select"), ("Esc", "close")];

pub struct StatusBar<'a> {
    theme: &'a ThemeDefinition,
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(theme: &'a ThemeDefinition, state: &'a AppState) -> Self {
        Self { theme, state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.ui_mode {
            UiMode::SearchInput => SEARCH_HINTS,
            UiMode::Menu => MENU_HINTS,
            UiMode::Normal if self.state.is_mobile() => NARROW_HINTS,
            UiMode::Normal => NORMAL_HINTS,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let line = match &self.state.status {
            Some(status) => {
                let style = match status.level {
                    StatusLevel::Info => styles::accent(theme),
                    StatusLevel::Error => styles::error(theme),
                };
                Line::from(Span::styled(format!(" {}", status.text), style))
            }
            None => {
                let mut spans = vec![Span::raw(" ")];
                for (key, action) in self.hints() {
                    spans.push(Span::styled(*key, styles::keybinding(theme)));
                    spans.push(Span::styled(format!(" {}  ", action), styles::text_secondary(theme)));
                }
                Line::from(spans)
            }
        };
        Paragraph::new(line)
            .style(styles::screen(theme))
            .render(area, buf);
    }
}

//! Search prompt shown above list pages

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles, ThemeDefinition};

pub struct SearchInput<'a> {
    theme: &'a ThemeDefinition,
    icons: IconSet,
    query: &'a str,
    placeholder: &'a str,
    /// Capturing keystrokes
    active: bool,
    /// Number of matches for the current filter
    matches: Option<usize>,
}

impl<'a> SearchInput<'a> {
    pub fn new(theme: &'a ThemeDefinition, icons: IconSet, query: &'a str) -> Self {
        Self {
            theme,
            icons,
            query,
            placeholder: "Search...",
            active: false,
            matches: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn matches(mut self, count: usize) -> Self {
        self.matches = Some(count);
        self
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let prompt_style = if self.active {
            styles::keybinding(theme)
        } else {
            styles::text_secondary(theme)
        };
        let mut spans = vec![Span::styled(format!("{} ", self.icons.search()), prompt_style)];

        if self.query.is_empty() && !self.active {
            spans.push(Span::styled(
                format!("{}  (press / to search)", self.placeholder),
                styles::text_secondary(theme),
            ));
        } else {
            spans.push(Span::styled(self.query.to_string(), styles::text_primary(theme)));
            if self.active {
                spans.push(Span::styled("_", styles::keybinding(theme)));
            }
        }

        if let Some(count) = self.matches.filter(|_| !self.query.is_empty()) {
            let style = if count > 0 {
                styles::chip(theme, synthesia_core::Tone::Success)
            } else {
                styles::error(theme)
            };
            let noun = if count == 1 { "match" } else { "matches" };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(format!("[{} {}]", count, noun), style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::theme_for;
    use synthesia_app::config::IconMode;
    use synthesia_core::ThemeMode;

    fn render(input: SearchInput) -> TestTerminal {
        let mut term = TestTerminal::with_size(60, 1);
        term.render_widget(input, term.area());
        term
    }

    #[test]
    fn test_idle_shows_placeholder() {
        let theme = theme_for(ThemeMode::Light);
        let term = render(
            SearchInput::new(&theme, IconSet::new(IconMode::Unicode), "").placeholder("Search agents..."),
        );
        assert!(term.buffer_contains("Search agents..."));
    }

    #[test]
    fn test_active_shows_cursor_and_count() {
        let theme = theme_for(ThemeMode::Light);
        let term = render(
            SearchInput::new(&theme, IconSet::new(IconMode::Unicode), "seo")
                .active(true)
                .matches(1),
        );
        assert!(term.buffer_contains("seo_"));
        assert!(term.buffer_contains("[1 match]"));
    }

    #[test]
    fn test_zero_matches() {
        let theme = theme_for(ThemeMode::Dark);
        let term = render(SearchInput::new(&theme, IconSet::new(IconMode::Unicode), "zzz").matches(0));
        assert!(term.buffer_contains("[0 matches]"));
    }
}

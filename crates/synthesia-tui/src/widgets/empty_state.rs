//! Placeholder panels for empty lists and missing records

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use synthesia_app::views::NotFound;
use synthesia_core::EmptyState;

use crate::theme::{icons::IconSet, styles, ThemeDefinition};

/// "Nothing here" message. Distinguishes an empty collection from a filter
/// that matched nothing.
pub struct EmptyStateView<'a> {
    theme: &'a ThemeDefinition,
    state: EmptyState,
    /// Plural noun for the collection, e.g. "projects"
    noun: &'a str,
}

impl<'a> EmptyStateView<'a> {
    pub fn new(theme: &'a ThemeDefinition, state: EmptyState, noun: &'a str) -> Self {
        Self { theme, state, noun }
    }

    pub fn title(&self) -> String {
        match self.state {
            EmptyState::NoData => format!("No {} yet", self.noun),
            EmptyState::NoResults => "No results found".to_string(),
        }
    }
}

impl Widget for EmptyStateView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(self.title(), styles::heading(self.theme, 6))),
            Line::from(Span::styled(self.state.hint(), styles::text_secondary(self.theme))),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

/// Detail page whose record does not exist: message plus the way back.
pub struct NotFoundView<'a> {
    theme: &'a ThemeDefinition,
    icons: IconSet,
    not_found: &'a NotFound,
}

impl<'a> NotFoundView<'a> {
    pub fn new(theme: &'a ThemeDefinition, icons: IconSet, not_found: &'a NotFound) -> Self {
        Self {
            theme,
            icons,
            not_found,
        }
    }
}

impl Widget for NotFoundView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.theme, false);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(self.not_found.message, styles::heading(self.theme, 5))),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    format!(" {} {} ", self.icons.back(), self.not_found.back_label),
                    styles::button(self.theme),
                ),
                Span::styled("  Enter", styles::keybinding(self.theme)),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::theme_for;
    use synthesia_app::config::IconMode;
    use synthesia_app::Route;
    use synthesia_core::ThemeMode;

    #[test]
    fn test_no_data_and_no_results_differ() {
        let theme = theme_for(ThemeMode::Light);
        let no_data = EmptyStateView::new(&theme, EmptyState::NoData, "projects");
        let no_results = EmptyStateView::new(&theme, EmptyState::NoResults, "projects");
        assert_eq!(no_data.title(), "No projects yet");
        assert_eq!(no_results.title(), "No results found");

        let mut term = TestTerminal::new();
        term.render_widget(no_results, term.area());
        assert!(term.buffer_contains("No results found"));
        assert!(term.buffer_contains("Try adjusting your search"));
    }

    #[test]
    fn test_not_found_offers_way_back() {
        let theme = theme_for(ThemeMode::Dark);
        let nf = NotFound {
            message: "Agent not found",
            back_label: "Back to Agents",
            back: Route::Agents,
        };
        let mut term = TestTerminal::new();
        term.render_widget(
            NotFoundView::new(&theme, IconSet::new(IconMode::Unicode), &nf),
            term.area(),
        );
        assert!(term.buffer_contains("Agent not found"));
        assert!(term.buffer_contains("Back to Agents"));
    }
}

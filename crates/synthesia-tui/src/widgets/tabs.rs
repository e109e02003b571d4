//! Tab strip for category filters and settings sections

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::Line,
    widgets::{Tabs, Widget},
};

use crate::theme::{styles, ThemeDefinition};

pub struct TabStrip<'a> {
    theme: &'a ThemeDefinition,
    titles: Vec<&'a str>,
    selected: usize,
}

impl<'a> TabStrip<'a> {
    pub fn new(theme: &'a ThemeDefinition, titles: Vec<&'a str>, selected: usize) -> Self {
        Self {
            theme,
            titles,
            selected,
        }
    }
}

impl Widget for TabStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || self.titles.is_empty() {
            return;
        }
        let selected = self.selected.min(self.titles.len() - 1);
        let titles: Vec<Line> = self.titles.into_iter().map(Line::from).collect();
        Tabs::new(titles)
            .select(selected)
            .style(styles::text_secondary(self.theme))
            .highlight_style(styles::accent_bold(self.theme).add_modifier(Modifier::UNDERLINED))
            .divider("│")
            .render(area, buf);
    }
}

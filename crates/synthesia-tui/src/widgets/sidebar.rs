//! Side navigation
//!
//! Expanded: brand, section header, labelled entries and the tenant panel.
//! Collapsed: brand monogram and icons only; the focused entry's label is
//! drawn next to the column by [`Tooltip`].

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use synthesia_app::navigation::NAV_ITEMS;
use synthesia_core::User;

use super::text;
use crate::theme::{icons::IconSet, styles, ThemeDefinition};

/// Rows used by the brand line and the divider under it
const BRAND_ROWS: u16 = 2;

/// Rows used by the tenant panel, divider included
const TENANT_ROWS: u16 = 4;

pub const SECTION_HEADER: &str = "NAVIGATION";

pub struct Sidebar<'a> {
    theme: &'a ThemeDefinition,
    icons: IconSet,
    user: &'a User,
    active: Option<usize>,
    focused: Option<usize>,
    collapsed: bool,
}

impl<'a> Sidebar<'a> {
    pub fn new(theme: &'a ThemeDefinition, icons: IconSet, user: &'a User) -> Self {
        Self {
            theme,
            icons,
            user,
            active: None,
            focused: None,
            collapsed: false,
        }
    }

    /// Entry matching the current route
    pub fn active(mut self, index: Option<usize>) -> Self {
        self.active = index;
        self
    }

    /// Keyboard cursor, only while the sidebar has focus
    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }
}

/// Screen row of navigation entry `index` inside a sidebar drawn at `area`.
pub fn entry_row(area: Rect, index: usize, collapsed: bool) -> u16 {
    let header = if collapsed { 0 } else { 1 };
    area.y + BRAND_ROWS + header + index as u16
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(styles::border_inactive(self.theme))
            .style(styles::paper(self.theme));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        self.render_brand(inner, buf);

        if !self.collapsed && inner.height > BRAND_ROWS {
            buf.set_string(
                inner.x + 1,
                inner.y + BRAND_ROWS,
                SECTION_HEADER,
                styles::text_secondary(self.theme),
            );
        }

        let tenant_visible =
            !self.collapsed && inner.height >= BRAND_ROWS + 1 + NAV_ITEMS.len() as u16 + TENANT_ROWS;
        let entries_bottom = if tenant_visible {
            inner.bottom() - TENANT_ROWS
        } else {
            inner.bottom()
        };

        for (index, item) in NAV_ITEMS.iter().enumerate() {
            let y = entry_row(inner, index, self.collapsed);
            if y >= entries_bottom {
                break;
            }
            let style = if self.active == Some(index) {
                styles::selected(self.theme)
            } else if self.focused == Some(index) {
                styles::focused(self.theme)
            } else {
                styles::text_primary(self.theme)
            };
            let content = if self.collapsed {
                format!(" {}", self.icons.nav(item.icon))
            } else {
                format!(" {}  {}", self.icons.nav(item.icon), item.label)
            };
            let row = Rect::new(inner.x, y, inner.width, 1);
            buf.set_style(row, style);
            buf.set_string(
                inner.x,
                y,
                text::truncate(&content, inner.width as usize),
                style,
            );
        }

        if tenant_visible {
            self.render_tenant(
                Rect::new(inner.x, inner.bottom() - TENANT_ROWS, inner.width, TENANT_ROWS),
                buf,
            );
        }
    }
}

impl Sidebar<'_> {
    fn render_brand(&self, inner: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(" SC ", styles::selected(self.theme)),
        ];
        if !self.collapsed {
            spans.push(Span::raw(" "));
            spans.push(Span::styled("SynthesiaCanvas", styles::accent_bold(self.theme)));
        }
        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);

        if inner.height > 1 {
            let rule = "─".repeat(inner.width as usize);
            buf.set_string(inner.x, inner.y + 1, rule, styles::border_inactive(self.theme));
        }
    }

    fn render_tenant(&self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let rule = "─".repeat(area.width as usize);
        buf.set_string(area.x, area.y, rule, styles::border_inactive(theme));

        let width = area.width.saturating_sub(2) as usize;
        let bg = Style::default().bg(theme.palette.background.default);
        buf.set_style(Rect::new(area.x, area.y + 1, area.width, 3), bg);
        buf.set_string(area.x + 1, area.y + 1, "Tenant", styles::text_secondary(theme));
        buf.set_string(
            area.x + 1,
            area.y + 2,
            text::truncate(&self.user.tenant_name, width),
            styles::heading(theme, 6),
        );
        buf.set_string(
            area.x + 1,
            area.y + 3,
            text::truncate(&format!("{} account", self.user.role.as_str()), width),
            styles::text_secondary(theme),
        );
    }
}

/// Label bubble shown next to a collapsed sidebar entry.
pub struct Tooltip<'a> {
    theme: &'a ThemeDefinition,
    label: &'a str,
}

impl<'a> Tooltip<'a> {
    pub fn new(theme: &'a ThemeDefinition, label: &'a str) -> Self {
        Self { theme, label }
    }

    /// Area for the bubble: right of `sidebar` on `row`, clipped to `bounds`.
    pub fn area(&self, sidebar: Rect, row: u16, bounds: Rect) -> Rect {
        let width = text::display_width(self.label) + 2;
        let rect = Rect::new(sidebar.right(), row, width, 1);
        rect.intersection(bounds)
    }
}

impl Widget for Tooltip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let style = Style::default()
            .fg(self.theme.palette.on_primary())
            .bg(self.theme.palette.primary.dark);
        buf.set_style(area, style);
        buf.set_string(
            area.x,
            area.y,
            text::truncate(&format!(" {} ", self.label), area.width as usize),
            style,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_user, TestTerminal};
    use crate::theme::theme_for;
    use synthesia_app::config::IconMode;
    use synthesia_core::ThemeMode;

    fn render(collapsed: bool, height: u16) -> TestTerminal {
        let theme = theme_for(ThemeMode::Light);
        let user = test_user();
        let mut term = TestTerminal::with_size(30, height);
        let sidebar = Sidebar::new(&theme, IconSet::new(IconMode::Unicode), &user)
            .active(Some(2))
            .collapsed(collapsed);
        let width = if collapsed { 7 } else { 26 };
        term.render_widget(sidebar, Rect::new(0, 0, width, height));
        term
    }

    #[test]
    fn test_expanded_sidebar_shows_labels_and_tenant() {
        let term = render(false, 24);
        assert!(term.buffer_contains("SynthesiaCanvas"));
        assert!(term.buffer_contains(SECTION_HEADER));
        assert!(term.buffer_contains("Agents"));
        assert!(term.buffer_contains("Code Generation"));
        assert!(term.buffer_contains("Tenant"));
        assert!(term.buffer_contains("Acme Corporation"));
        assert!(term.buffer_contains("admin account"));
    }

    #[test]
    fn test_collapsed_sidebar_hides_labels_and_tenant() {
        let term = render(true, 24);
        assert!(term.buffer_contains("SC"));
        assert!(!term.buffer_contains("SynthesiaCanvas"));
        assert!(!term.buffer_contains(SECTION_HEADER));
        assert!(!term.buffer_contains("Agents"));
        assert!(!term.buffer_contains("Tenant"));
        let icons = IconSet::new(IconMode::Unicode);
        for item in NAV_ITEMS {
            assert!(term.buffer_contains(icons.nav(item.icon)));
        }
    }

    #[test]
    fn test_short_terminal_drops_tenant_panel() {
        let term = render(false, 12);
        assert!(!term.buffer_contains("Tenant"));
        assert!(term.buffer_contains("Dashboard"));
    }

    #[test]
    fn test_active_entry_is_filled() {
        let theme = theme_for(ThemeMode::Light);
        let term = render(false, 24);
        let row = entry_row(Rect::new(0, 0, 25, 24), 2, false);
        assert_eq!(term.buffer()[(1, row)].bg, theme.palette.primary.main);
    }

    #[test]
    fn test_entry_rows_skip_section_header_when_expanded() {
        let area = Rect::new(0, 0, 26, 20);
        assert_eq!(entry_row(area, 0, false), 3);
        assert_eq!(entry_row(area, 0, true), 2);
    }

    #[test]
    fn test_tooltip_sits_right_of_sidebar() {
        let theme = theme_for(ThemeMode::Dark);
        let tooltip = Tooltip::new(&theme, "Agents");
        let bounds = Rect::new(0, 0, 80, 24);
        assert_eq!(
            tooltip.area(Rect::new(0, 0, 7, 24), 4, bounds),
            Rect::new(7, 4, 8, 1)
        );
    }
}

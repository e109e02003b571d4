//! Header popovers: account menu and theme picker.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use synthesia_app::menus::AccountAction;
use synthesia_core::{ThemeMode, User};

use super::{modal_overlay, text};
use crate::theme::{icons::IconSet, styles, ThemeDefinition};

pub struct AccountMenu<'a> {
    theme: &'a ThemeDefinition,
    icons: IconSet,
    user: &'a User,
    cursor: usize,
}

impl<'a> AccountMenu<'a> {
    pub fn new(theme: &'a ThemeDefinition, icons: IconSet, user: &'a User, cursor: usize) -> Self {
        Self {
            theme,
            icons,
            user,
            cursor,
        }
    }

    /// Outer size: name, email, rule and one row per action inside borders.
    pub fn size(&self) -> (u16, u16) {
        let content = text::display_width(&self.user.email)
            .max(text::display_width(&self.user.full_name()))
            .max(16);
        (content + 4, 3 + AccountAction::ALL.len() as u16 + 2)
    }

    fn action_icon(&self, action: AccountAction) -> &'static str {
        match action {
            AccountAction::Settings => self.icons.nav(synthesia_app::navigation::NavIcon::Settings),
            AccountAction::Logout => self.icons.logout(),
        }
    }
}

impl Widget for AccountMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::clear_area(buf, area);
        let block = styles::modal_block(self.theme, "Account");
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let width = inner.width.saturating_sub(2) as usize;
        let mut lines = vec![
            Line::from(Span::styled(
                text::truncate(&self.user.full_name(), width),
                styles::heading(self.theme, 6),
            )),
            Line::from(Span::styled(
                text::truncate(&self.user.email, width),
                styles::text_secondary(self.theme),
            )),
            Line::from(Span::styled(
                "─".repeat(width),
                styles::border_inactive(self.theme),
            )),
        ];
        for (index, action) in AccountAction::ALL.iter().enumerate() {
            let style = if index == self.cursor {
                styles::selected(self.theme)
            } else {
                styles::text_primary(self.theme)
            };
            lines.push(Line::from(Span::styled(
                text::pad(
                    &format!("{} {}", self.action_icon(*action), action.label()),
                    width,
                ),
                style,
            )));
        }

        for (row, line) in lines.iter().enumerate() {
            let y = inner.y + row as u16;
            if y >= inner.bottom() {
                break;
            }
            buf.set_line(inner.x + 1, y, line, inner.width.saturating_sub(1));
        }
    }
}

pub struct ThemeMenu<'a> {
    theme: &'a ThemeDefinition,
    icons: IconSet,
    cursor: usize,
}

impl<'a> ThemeMenu<'a> {
    pub fn new(theme: &'a ThemeDefinition, icons: IconSet, cursor: usize) -> Self {
        Self {
            theme,
            icons,
            cursor,
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (20, ThemeMode::ALL.len() as u16 + 2)
    }
}

impl Widget for ThemeMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::clear_area(buf, area);
        let block = styles::modal_block(self.theme, "Theme");
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width.saturating_sub(2) as usize;
        for (index, mode) in ThemeMode::ALL.iter().enumerate() {
            let y = inner.y + index as u16;
            if y >= inner.bottom() {
                break;
            }
            // Active mode is the one currently rendered
            let marker = if *mode == self.theme.mode {
                self.icons.check()
            } else {
                " "
            };
            let style = if index == self.cursor {
                styles::selected(self.theme)
            } else {
                styles::text_primary(self.theme)
            };
            buf.set_string(
                inner.x + 1,
                y,
                text::pad(&format!("{} {}", marker, mode.display_name()), width),
                style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_user, TestTerminal};
    use crate::theme::theme_for;
    use synthesia_app::config::IconMode;

    #[test]
    fn test_account_menu_lists_identity_and_actions() {
        let theme = theme_for(ThemeMode::Light);
        let user = test_user();
        let menu = AccountMenu::new(&theme, IconSet::new(IconMode::Unicode), &user, 0);
        let (w, h) = menu.size();
        let mut term = TestTerminal::new();
        term.render_widget(menu, Rect::new(0, 0, w, h));

        assert!(term.buffer_contains("John Doe"));
        assert!(term.buffer_contains("john.doe@example.com"));
        assert!(term.buffer_contains("Settings"));
        assert!(term.buffer_contains("Logout"));
    }

    #[test]
    fn test_theme_menu_marks_active_mode() {
        let theme = theme_for(ThemeMode::Dark);
        let menu = ThemeMenu::new(&theme, IconSet::new(IconMode::Unicode), 1);
        let (w, h) = menu.size();
        let mut term = TestTerminal::new();
        term.render_widget(menu, Rect::new(0, 0, w, h));

        assert!(term.buffer_contains("✓ Dark"));
        assert!(term.buffer_contains("  Light"));
        assert!(term.buffer_contains("Ocean"));
    }
}

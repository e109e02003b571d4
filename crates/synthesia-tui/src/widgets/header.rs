//! Header bar
//!
//! Section title on the left; help, notifications, theme picker and account
//! on the right. The help and notification buttons are decorative.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use synthesia_app::menus::HeaderMenu;
use synthesia_core::{ThemeMode, User};

use crate::theme::{icons::IconSet, styles, ThemeDefinition};

/// Unread count on the notification badge
pub const NOTIFICATION_COUNT: u8 = 3;

pub struct MainHeader<'a> {
    theme: &'a ThemeDefinition,
    icons: IconSet,
    title: &'a str,
    user: &'a User,
    mode: ThemeMode,
    menu_button: bool,
    open_menu: Option<HeaderMenu>,
}

impl<'a> MainHeader<'a> {
    pub fn new(theme: &'a ThemeDefinition, icons: IconSet, title: &'a str, user: &'a User) -> Self {
        Self {
            theme,
            icons,
            title,
            user,
            mode: theme.mode,
            menu_button: false,
            open_menu: None,
        }
    }

    /// Show the drawer button (narrow layout)
    pub fn menu_button(mut self, show: bool) -> Self {
        self.menu_button = show;
        self
    }

    /// Highlight the button whose popover is open
    pub fn open_menu(mut self, menu: Option<HeaderMenu>) -> Self {
        self.open_menu = menu;
        self
    }

    fn button_style(&self, menu: HeaderMenu) -> Style {
        if self.open_menu == Some(menu) {
            styles::accent_bold(self.theme).add_modifier(Modifier::REVERSED)
        } else {
            styles::text_secondary(self.theme)
        }
    }

    /// Right-hand buttons, most important last so they survive narrowing.
    fn right_spans(&self, compact: bool) -> Vec<Span<'static>> {
        let theme = self.theme;
        let mut spans = vec![
            Span::styled(format!("{} ", self.icons.help()), styles::text_secondary(theme)),
            Span::raw(" "),
            Span::styled(format!("{} ", self.icons.bell()), styles::text_secondary(theme)),
            Span::styled(
                NOTIFICATION_COUNT.to_string(),
                Style::default()
                    .fg(theme.palette.error.contrast_text.unwrap_or(theme.palette.background.paper))
                    .bg(theme.palette.error.main)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];

        let theme_label = if compact {
            self.icons.palette().to_string()
        } else {
            format!("{} {}", self.icons.palette(), self.mode.display_name())
        };
        spans.push(Span::styled(theme_label, self.button_style(HeaderMenu::Theme)));
        spans.push(Span::raw("  "));

        let avatar = Span::styled(
            format!(" {} ", self.user.initials()),
            styles::button(theme),
        );
        spans.push(avatar);
        if !compact {
            spans.push(Span::styled(
                format!(" {}", self.user.full_name()),
                self.button_style(HeaderMenu::Account),
            ));
        }
        spans.push(Span::raw(" "));
        spans
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.theme, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut left = vec![Span::raw(" ")];
        if self.menu_button {
            left.push(Span::styled(
                format!("{} ", self.icons.menu()),
                styles::accent(self.theme),
            ));
        }
        left.push(Span::styled(self.title.to_string(), styles::heading(self.theme, 6)));
        let left = Line::from(left);
        let left_width = line_width(&left);

        let mut right = Line::from(self.right_spans(false));
        if left_width.saturating_add(line_width(&right)).saturating_add(1) > inner.width {
            right = Line::from(self.right_spans(true));
        }
        let right_width = line_width(&right);

        buf.set_line(inner.x, inner.y, &left, inner.width);
        if left_width.saturating_add(right_width) < inner.width {
            buf.set_line(inner.right() - right_width, inner.y, &right, right_width);
        }
    }
}

/// Display width, clamped to the cell range.
fn line_width(line: &Line) -> u16 {
    u16::try_from(line.width()).unwrap_or(u16::MAX)
}

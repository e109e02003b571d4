//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::widgets::Block;
use ratatui::Frame;

use synthesia_app::menus::HeaderMenu;
use synthesia_app::navigation::{self, NAV_ITEMS};
use synthesia_app::state::{AppState, Focus, UiMode};

use crate::layout::{self, ShellAreas, ShellMode};
use crate::pages::{Page, PageContext};
use crate::theme::{icons::IconSet, styles, theme_for, ThemeDefinition};
use crate::widgets::{self, modal_overlay, sidebar};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`; the theme is looked up from the mode the
/// theme context currently holds, so a mode change shows on the next frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let theme = theme_for(state.theme_mode());
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(Block::default().style(styles::screen(&theme)), area);

    let mobile = state.is_mobile();
    let collapsed = state.sidebar.is_collapsed();
    let areas = layout::create(
        area,
        ShellMode {
            mobile,
            collapsed,
            drawer_open: state.sidebar.is_mobile_open,
        },
    );

    let user = state.catalog.current_user();
    let path = state.current_path();
    let active = navigation::active_index(&path);
    let sidebar_focus = (state.focus == Focus::Sidebar).then_some(state.sidebar.focused);

    if let Some(sidebar_area) = areas.sidebar {
        let sidebar = widgets::Sidebar::new(&theme, icons, user)
            .active(active)
            .focused(sidebar_focus)
            .collapsed(collapsed);
        frame.render_widget(sidebar, sidebar_area);
    }

    let header = widgets::MainHeader::new(&theme, icons, state.section_title(), user)
        .menu_button(mobile)
        .open_menu(state.menu.open);
    frame.render_widget(header, areas.header);

    let ctx = PageContext {
        theme: &theme,
        icons,
        catalog: state.catalog.as_ref(),
        page: &state.page,
        focused: state.focus == Focus::Content,
        searching: state.ui_mode == UiMode::SearchInput,
    };
    frame.render_widget(Page::new(ctx, &state.route), areas.content);

    frame.render_widget(widgets::StatusBar::new(&theme, state), areas.status);

    // Overlays, bottom to top
    if let (Some(sidebar_area), Some(index)) = (areas.sidebar, sidebar_focus) {
        if collapsed {
            render_tooltip(frame, &theme, sidebar_area, index);
        }
    }
    if let Some(drawer) = areas.drawer {
        render_drawer(frame, &theme, icons, state, drawer, active, sidebar_focus);
    }
    if state.ui_mode == UiMode::Menu {
        render_menu(frame, &theme, icons, state, &areas);
    }
}

fn render_tooltip(frame: &mut Frame, theme: &ThemeDefinition, sidebar_area: Rect, index: usize) {
    let Some(item) = NAV_ITEMS.get(index) else {
        return;
    };
    let row = sidebar::entry_row(sidebar_area, index, true);
    if row >= sidebar_area.bottom() {
        return;
    }
    let tooltip = widgets::Tooltip::new(theme, item.label);
    let tooltip_area = tooltip.area(sidebar_area, row, frame.area());
    frame.render_widget(tooltip, tooltip_area);
}

fn render_drawer(
    frame: &mut Frame,
    theme: &ThemeDefinition,
    icons: IconSet,
    state: &AppState,
    drawer: Rect,
    active: Option<usize>,
    focused: Option<usize>,
) {
    let area = frame.area();
    modal_overlay::dim_background(frame.buffer_mut(), area, theme);
    modal_overlay::clear_area(frame.buffer_mut(), drawer);
    let sidebar = widgets::Sidebar::new(theme, icons, state.catalog.current_user())
        .active(active)
        .focused(focused)
        .collapsed(false);
    frame.render_widget(sidebar, drawer);
    modal_overlay::render_shadow(frame.buffer_mut(), drawer, theme);
}

fn render_menu(
    frame: &mut Frame,
    theme: &ThemeDefinition,
    icons: IconSet,
    state: &AppState,
    areas: &ShellAreas,
) {
    let bounds = frame.area();
    match state.menu.open {
        Some(HeaderMenu::Theme) => {
            let menu = widgets::ThemeMenu::new(theme, icons, state.menu.cursor);
            let (width, height) = menu.size();
            let rect = modal_overlay::popover_rect(areas.header, width, height, bounds);
            frame.render_widget(menu, rect);
            modal_overlay::render_shadow(frame.buffer_mut(), rect, theme);
        }
        Some(HeaderMenu::Account) => {
            let menu = widgets::AccountMenu::new(
                theme,
                icons,
                state.catalog.current_user(),
                state.menu.cursor,
            );
            let (width, height) = menu.size();
            let rect = modal_overlay::popover_rect(areas.header, width, height, bounds);
            frame.render_widget(menu, rect);
            modal_overlay::render_shadow(frame.buffer_mut(), rect, theme);
        }
        None => {}
    }
}

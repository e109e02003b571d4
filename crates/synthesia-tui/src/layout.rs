//! Screen layout for the application shell
//!
//! Wide terminals get a permanent sidebar column (expanded or collapsed to
//! icons). Narrow terminals drop the column; the sidebar then appears as a
//! drawer over the left edge.

use ratatui::layout::{Constraint, Layout, Rect};

/// Expanded sidebar width, borders included
pub const SIDEBAR_WIDTH: u16 = 26;

/// Icon-only sidebar width, borders included
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 7;

/// Header: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

pub const STATUS_HEIGHT: u16 = 1;

/// Screen areas for the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellAreas {
    /// Permanent sidebar column (wide layout only)
    pub sidebar: Option<Rect>,

    /// Drawer overlay (narrow layout with the drawer open)
    pub drawer: Option<Rect>,

    pub header: Rect,

    /// Page content
    pub content: Rect,

    /// One-row status and key hint line
    pub status: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellMode {
    pub mobile: bool,
    pub collapsed: bool,
    pub drawer_open: bool,
}

pub fn create(area: Rect, mode: ShellMode) -> ShellAreas {
    let (sidebar, main) = if mode.mobile {
        (None, area)
    } else {
        let width = if mode.collapsed {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            SIDEBAR_WIDTH
        };
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(width), Constraint::Min(0)]).areas(area);
        (Some(sidebar), main)
    };

    let [header, content, status] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(main);

    let drawer = (mode.mobile && mode.drawer_open).then(|| Rect {
        width: SIDEBAR_WIDTH.min(area.width),
        ..area
    });

    ShellAreas {
        sidebar,
        drawer,
        header,
        content,
        status,
    }
}

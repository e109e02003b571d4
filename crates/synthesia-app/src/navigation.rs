//! Side navigation entries and active-entry detection.

/// Icon role for a navigation entry; the renderer picks the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Projects,
    Agents,
    Workflows,
    Executions,
    CodeGeneration,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: NavIcon,
    pub path: &'static str,
}

/// Display order and first-match order.
///
/// Paths must stay mutually non-prefixing so at most one entry can match.
pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem {
        label: "Dashboard",
        icon: NavIcon::Dashboard,
        path: "/dashboard",
    },
    NavItem {
        label: "Projects",
        icon: NavIcon::Projects,
        path: "/projects",
    },
    NavItem {
        label: "Agents",
        icon: NavIcon::Agents,
        path: "/agents",
    },
    NavItem {
        label: "Workflows",
        icon: NavIcon::Workflows,
        path: "/workflows",
    },
    NavItem {
        label: "Executions",
        icon: NavIcon::Executions,
        path: "/executions",
    },
    NavItem {
        label: "Code Generation",
        icon: NavIcon::CodeGeneration,
        path: "/code-generation",
    },
    NavItem {
        label: "Settings",
        icon: NavIcon::Settings,
        path: "/settings",
    },
];

/// Title shown when no entry matches (e.g. `/about`).
pub const DEFAULT_TITLE: &str = "Dashboard";

/// Index of the first entry whose path prefixes `path`.
pub fn active_index(path: &str) -> Option<usize> {
    NAV_ITEMS.iter().position(|item| path.starts_with(item.path))
}

pub fn active_item(path: &str) -> Option<&'static NavItem> {
    active_index(path).map(|i| &NAV_ITEMS[i])
}

/// Header title for `path`.
pub fn section_title(path: &str) -> &'static str {
    active_item(path)
        .map(|item| item.label)
        .unwrap_or(DEFAULT_TITLE)
}

//! Side navigation state.
//!
//! Two independent flags: the wide-layout sidebar is expanded or collapsed,
//! and the narrow-layout drawer is open or closed. Neither is persisted.

use crate::navigation::NAV_ITEMS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarState {
    /// Wide layout: labels, section header and tenant panel visible
    pub is_open: bool,
    /// Narrow layout: drawer overlay visible
    pub is_mobile_open: bool,
    /// Highlighted entry while the sidebar has focus
    pub focused: usize,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            is_open: true,
            is_mobile_open: false,
            focused: 0,
        }
    }
}

impl SidebarState {
    pub fn new(collapsed: bool) -> Self {
        Self {
            is_open: !collapsed,
            ..Self::default()
        }
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn is_collapsed(&self) -> bool {
        !self.is_open
    }

    pub fn toggle_mobile(&mut self) {
        self.is_mobile_open = !self.is_mobile_open;
    }

    pub fn close_mobile(&mut self) {
        self.is_mobile_open = false;
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % NAV_ITEMS.len();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self
            .focused
            .checked_sub(1)
            .unwrap_or(NAV_ITEMS.len() - 1);
    }

    pub fn focused_path(&self) -> &'static str {
        NAV_ITEMS[self.focused.min(NAV_ITEMS.len() - 1)].path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_independent() {
        let mut sidebar = SidebarState::default();
        sidebar.toggle();
        assert!(sidebar.is_collapsed());
        assert!(!sidebar.is_mobile_open);

        sidebar.toggle_mobile();
        assert!(sidebar.is_mobile_open);
        assert!(sidebar.is_collapsed());

        sidebar.close_mobile();
        sidebar.close_mobile();
        assert!(!sidebar.is_mobile_open);
    }

    #[test]
    fn test_new_respects_collapsed_setting() {
        assert!(SidebarState::new(true).is_collapsed());
        assert!(!SidebarState::new(false).is_collapsed());
    }

    #[test]
    fn test_focus_wraps() {
        let mut sidebar = SidebarState::default();
        sidebar.focus_previous();
        assert_eq!(sidebar.focused, NAV_ITEMS.len() - 1);
        assert_eq!(sidebar.focused_path(), "/settings");
        sidebar.focus_next();
        assert_eq!(sidebar.focused, 0);
        assert_eq!(sidebar.focused_path(), "/dashboard");
    }
}

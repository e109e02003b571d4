//! Header popover menus.

use synthesia_core::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMenu {
    Account,
    Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    Settings,
    Logout,
}

impl AccountAction {
    pub const ALL: [AccountAction; 2] = [AccountAction::Settings, AccountAction::Logout];

    pub fn label(&self) -> &'static str {
        match self {
            AccountAction::Settings => "Settings",
            AccountAction::Logout => "Logout",
        }
    }
}

/// At most one menu is open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: Option<HeaderMenu>,
    pub cursor: usize,
}

impl MenuState {
    /// Open `menu`. The theme menu starts on the active mode.
    pub fn open(&mut self, menu: HeaderMenu, active_mode: ThemeMode) {
        self.open = Some(menu);
        self.cursor = match menu {
            HeaderMenu::Theme => ThemeMode::ALL
                .iter()
                .position(|m| *m == active_mode)
                .unwrap_or(0),
            HeaderMenu::Account => 0,
        };
    }

    pub fn close(&mut self) {
        self.open = None;
        self.cursor = 0;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    fn len(&self) -> usize {
        match self.open {
            Some(HeaderMenu::Theme) => ThemeMode::ALL.len(),
            Some(HeaderMenu::Account) => AccountAction::ALL.len(),
            None => 0,
        }
    }

    pub fn next(&mut self) {
        let len = self.len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn previous(&mut self) {
        let len = self.len();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    pub fn selected_theme(&self) -> Option<ThemeMode> {
        match self.open {
            Some(HeaderMenu::Theme) => ThemeMode::ALL.get(self.cursor).copied(),
            _ => None,
        }
    }

    pub fn selected_account_action(&self) -> Option<AccountAction> {
        match self.open {
            Some(HeaderMenu::Account) => AccountAction::ALL.get(self.cursor).copied(),
            _ => None,
        }
    }
}

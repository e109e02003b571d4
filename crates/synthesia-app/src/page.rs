//! Page-local state.
//!
//! Everything here is ephemeral and reset whenever the route changes.

use synthesia_core::ListFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Profile,
    Team,
    ApiKeys,
    LlmProviders,
    Billing,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 5] = [
        SettingsTab::Profile,
        SettingsTab::Team,
        SettingsTab::ApiKeys,
        SettingsTab::LlmProviders,
        SettingsTab::Billing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::Profile => "Profile",
            SettingsTab::Team => "Team",
            SettingsTab::ApiKeys => "API Keys",
            SettingsTab::LlmProviders => "LLM Providers",
            SettingsTab::Billing => "Billing",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub filter: ListFilter,
    /// Highlighted row in the page's selectable list
    pub selected: usize,
    /// 0 is "All Categories"; `n` is the n-th catalog category
    pub category_index: usize,
    pub settings_tab: SettingsTab,
}

impl PageState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_previous(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Move the category tab by `delta` over `names` (tab 0 is "all").
    pub fn cycle_category(&mut self, names: &[&str], forward: bool) {
        let tabs = names.len() + 1;
        self.category_index = if forward {
            (self.category_index + 1) % tabs
        } else {
            (self.category_index + tabs - 1) % tabs
        };
        self.filter.category = match self.category_index {
            0 => None,
            i => names.get(i - 1).map(|n| n.to_string()),
        };
        self.selected = 0;
    }
}

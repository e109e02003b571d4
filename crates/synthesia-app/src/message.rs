//! Message types for the application (TEA pattern)

use synthesia_core::ThemeMode;

use crate::input_key::InputKey;
use crate::menus::HeaderMenu;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Terminal was resized
    Resize { width: u16, height: u16 },

    /// Quit (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Go to a URL-style path
    Navigate(String),
    /// Return from a detail page to its list
    Back,
    /// Open the row highlighted in the focused pane
    OpenSelected,
    SelectNext,
    SelectPrevious,
    /// Move keyboard focus between sidebar and content
    ToggleFocus,

    // ─────────────────────────────────────────────────────────
    // Shell
    // ─────────────────────────────────────────────────────────
    /// Expand/collapse the wide-layout sidebar
    ToggleSidebar,
    /// Open/close the narrow-layout drawer
    ToggleMobileDrawer,
    OpenMenu(HeaderMenu),
    CloseMenu,
    MenuNext,
    MenuPrevious,
    /// Activate the highlighted menu entry
    MenuSelect,
    SetThemeMode(ThemeMode),

    // ─────────────────────────────────────────────────────────
    // Page-local
    // ─────────────────────────────────────────────────────────
    /// Enter search input mode
    StartSearch,
    /// Replace the search text
    SearchInput { text: String },
    /// Leave search mode keeping the query
    SubmitSearch,
    /// Leave search mode and clear the query
    CancelSearch,
    NextCategory,
    PreviousCategory,
    NextSettingsTab,
    PreviousSettingsTab,
    /// Open the workflow builder in create mode
    NewWorkflow,
}

//! Custom widget components

mod empty_state;
mod header;
mod menus;
pub mod modal_overlay;
mod search_input;
pub mod sidebar;
mod status_bar;
mod tabs;
pub mod text;

pub use empty_state::{EmptyStateView, NotFoundView};
pub use header::MainHeader;
pub use menus::{AccountMenu, ThemeMenu};
pub use search_input::SearchInput;
pub use sidebar::{Sidebar, Tooltip};
pub use status_bar::StatusBar;
pub use tabs::TabStrip;

//! synthesia-app - Application state and navigation for SynthesiaCanvas
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, together with the route table, side navigation, header menus,
//! the theme context and its preference store, and configuration loading.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod menus;
pub mod message;
pub mod navigation;
pub mod page;
pub mod preferences;
pub mod process;
pub mod route;
pub mod sidebar;
pub mod signals;
pub mod state;
pub mod theme_context;
pub mod views;

// Re-export primary types
pub use handler::UpdateResult;
pub use input_key::InputKey;
pub use message::Message;
pub use route::Route;
pub use state::AppState;
pub use theme_context::ThemeContext;

//! synthesia-tui - Terminal UI for SynthesiaCanvas
//!
//! This crate provides the ratatui-based interface: the application shell
//! (sidebar, header, status bar, drawer and menus), one view per page, the
//! theme definitions, and the terminal event loop driving `synthesia-app`.

pub mod event;
pub mod layout;
pub mod pages;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;

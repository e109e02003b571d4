//! Icon set for the TUI.
//!
//! `IconSet` resolves glyphs at runtime from the configured `IconMode`:
//! - `IconMode::Unicode` works in every terminal
//! - `IconMode::NerdFonts` needs a patched Nerd Font

use synthesia_app::config::IconMode;
use synthesia_app::navigation::NavIcon;

#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Glyph for a side navigation entry.
    pub fn nav(&self, icon: NavIcon) -> &'static str {
        match (self.mode, icon) {
            (IconMode::NerdFonts, NavIcon::Dashboard) => "\u{f0e4}", // nf-fa-dashboard
            (IconMode::NerdFonts, NavIcon::Projects) => "\u{f07b}",  // nf-fa-folder
            (IconMode::NerdFonts, NavIcon::Agents) => "\u{f544}",    // nf-fa-robot
            (IconMode::NerdFonts, NavIcon::Workflows) => "\u{f0e8}", // nf-fa-sitemap
            (IconMode::NerdFonts, NavIcon::Executions) => "\u{f04b}", // nf-fa-play
            (IconMode::NerdFonts, NavIcon::CodeGeneration) => "\u{f121}", // nf-fa-code
            (IconMode::NerdFonts, NavIcon::Settings) => "\u{f013}",  // nf-fa-cog
            (IconMode::Unicode, NavIcon::Dashboard) => "\u{25a6}",   // ▦
            (IconMode::Unicode, NavIcon::Projects) => "\u{25a4}",    // ▤
            (IconMode::Unicode, NavIcon::Agents) => "\u{25c9}",      // ◉
            (IconMode::Unicode, NavIcon::Workflows) => "\u{2b8c}",   // ⮌
            (IconMode::Unicode, NavIcon::Executions) => "\u{25b6}",  // ▶
            (IconMode::Unicode, NavIcon::CodeGeneration) => "\u{2039}\u{203a}", // ‹›
            (IconMode::Unicode, NavIcon::Settings) => "\u{2699}",    // ⚙
        }
    }

    pub fn menu(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c9}", // nf-fa-bars
            IconMode::Unicode => "\u{2261}",   // ≡
        }
    }

    pub fn help(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f059}", // nf-fa-question_circle
            IconMode::Unicode => "?",
        }
    }

    pub fn bell(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0f3}", // nf-fa-bell
            IconMode::Unicode => "\u{266a}",   // ♪
        }
    }

    pub fn palette(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f1fc}", // nf-fa-paint_brush
            IconMode::Unicode => "\u{25d0}",   // ◐
        }
    }

    pub fn search(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f002}", // nf-fa-search
            IconMode::Unicode => "/",
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn logout(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f08b}", // nf-fa-sign_out
            IconMode::Unicode => "\u{21a9}",   // ↩
        }
    }

    pub fn back(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f060}", // nf-fa-arrow_left
            IconMode::Unicode => "\u{2190}",   // ←
        }
    }

    pub fn package(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f187}", // nf-fa-archive
            IconMode::Unicode => "\u{25a3}",   // ▣
        }
    }
}

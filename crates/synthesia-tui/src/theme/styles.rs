//! Semantic style builders over a [`ThemeDefinition`].

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders};
use synthesia_core::Tone;

use super::ThemeDefinition;

// --- Surfaces ---
pub fn screen(theme: &ThemeDefinition) -> Style {
    Style::default()
        .fg(theme.palette.text.primary)
        .bg(theme.palette.background.default)
}

pub fn paper(theme: &ThemeDefinition) -> Style {
    Style::default()
        .fg(theme.palette.text.primary)
        .bg(theme.palette.background.paper)
}

// --- Text styles ---
pub fn text_primary(theme: &ThemeDefinition) -> Style {
    Style::default().fg(theme.palette.text.primary)
}

pub fn text_secondary(theme: &ThemeDefinition) -> Style {
    Style::default().fg(theme.palette.text.secondary)
}

/// Heading `level` (1-6) in the primary text colour.
pub fn heading(theme: &ThemeDefinition, level: u8) -> Style {
    text_primary(theme).add_modifier(theme.typography.heading(level).modifier())
}

// --- Accent styles ---
pub fn accent(theme: &ThemeDefinition) -> Style {
    Style::default().fg(theme.palette.primary.main)
}

pub fn accent_bold(theme: &ThemeDefinition) -> Style {
    accent(theme).add_modifier(Modifier::BOLD)
}

pub fn secondary_accent(theme: &ThemeDefinition) -> Style {
    Style::default().fg(theme.palette.secondary.main)
}

pub fn keybinding(theme: &ThemeDefinition) -> Style {
    Style::default().fg(theme.palette.warning.main)
}

pub fn error(theme: &ThemeDefinition) -> Style {
    Style::default().fg(theme.palette.error.main)
}

// --- Selection ---
/// Active nav entry and highlighted rows: filled with the primary colour.
pub fn selected(theme: &ThemeDefinition) -> Style {
    Style::default()
        .fg(theme.palette.on_primary())
        .bg(theme.palette.primary.main)
        .add_modifier(Modifier::BOLD)
}

/// Keyboard focus that is not (yet) the active entry.
pub fn focused(theme: &ThemeDefinition) -> Style {
    Style::default()
        .fg(theme.palette.primary.main)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

// --- Border styles ---
pub fn border_inactive(theme: &ThemeDefinition) -> Style {
    Style::default().fg(theme.palette.divider)
}

pub fn border_active(theme: &ThemeDefinition) -> Style {
    Style::default().fg(theme.palette.primary.main)
}

fn border_type(radius: u16) -> BorderType {
    if radius > 0 {
        BorderType::Rounded
    } else {
        BorderType::Plain
    }
}

// --- Block builders ---
/// Panel (paper) container.
pub fn glass_block(theme: &ThemeDefinition, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(border_type(theme.components.paper.border_radius))
        .border_style(if focused {
            border_active(theme)
        } else {
            border_inactive(theme)
        })
        .style(paper(theme))
}

/// Card container with a title. Ocean outlines cards in the primary tint.
pub fn card_block<'a>(theme: &ThemeDefinition, title: impl Into<String>) -> Block<'a> {
    let border = if theme.components.card.accent_border {
        Style::default().fg(theme.palette.primary.dark)
    } else {
        border_inactive(theme)
    };
    Block::default()
        .title(Span::styled(format!(" {} ", title.into()), heading(theme, 6)))
        .borders(Borders::ALL)
        .border_type(border_type(theme.components.card.border_radius))
        .border_style(border)
        .style(paper(theme))
}

/// Popover and drawer container.
pub fn modal_block<'a>(theme: &ThemeDefinition, title: impl Into<String>) -> Block<'a> {
    Block::default()
        .title(Span::styled(format!(" {} ", title.into()), accent_bold(theme)))
        .borders(Borders::ALL)
        .border_type(border_type(theme.components.paper.border_radius))
        .border_style(border_active(theme))
        .style(paper(theme))
}

// --- Chips & buttons ---
pub fn chip(theme: &ThemeDefinition, tone: Tone) -> Style {
    let style = Style::default().fg(theme.palette.tone(tone));
    if theme.components.chip.font_weight >= 500 {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Status chip span, e.g. `[ Active ]`.
pub fn chip_span(theme: &ThemeDefinition, label: &str, tone: Tone) -> Span<'static> {
    Span::styled(format!("[{}]", label), chip(theme, tone))
}

/// Contained button look.
pub fn button(theme: &ThemeDefinition) -> Style {
    let style = Style::default()
        .fg(theme.palette.on_primary())
        .bg(theme.palette.primary.main);
    if theme.components.button.font_weight >= 500 {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Label for a contained button, padded to suggest its padding.
pub fn button_span(theme: &ThemeDefinition, label: &str) -> Span<'static> {
    let label = if theme.typography.button.uppercase {
        label.to_uppercase()
    } else {
        label.to_string()
    };
    Span::styled(format!("  {}  ", label), button(theme))
}

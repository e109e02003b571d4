//! Shared overlay utilities for popovers, tooltips and the drawer.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::ThemeDefinition;

/// Center a fixed-size rect within an area, clamped to the area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// A popover hanging below `anchor`, right-aligned with it and kept inside
/// `bounds`.
pub fn popover_rect(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    let w = width.min(bounds.width);
    let h = height.min(bounds.height);
    let right = anchor.right().min(bounds.right());
    let x = right.saturating_sub(w).max(bounds.x);
    let y = anchor.bottom().min(bounds.bottom().saturating_sub(h));
    Rect::new(x, y, w, h)
}

/// Dim every cell in `area` to push it behind an overlay.
pub fn dim_background(buf: &mut Buffer, area: Rect, theme: &ThemeDefinition) {
    let dim_style = Style::default()
        .fg(theme.palette.divider)
        .bg(theme.palette.background.default);

    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// One-cell shadow to the right of and below `rect`.
pub fn render_shadow(buf: &mut Buffer, rect: Rect, theme: &ThemeDefinition) {
    let shadow = theme.palette.background.default;
    let shadow_style = Style::default().fg(shadow).bg(shadow);

    let right_x = rect.right();
    for y in rect.y.saturating_add(1)..rect.bottom().saturating_add(1) {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    let bottom_y = rect.bottom();
    for x in rect.x.saturating_add(1)..rect.right().saturating_add(1) {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::theme_for;
    use synthesia_core::ThemeMode;

    #[test]
    fn test_centered_rect_within_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_rect(40, 10, area), area);
    }

    #[test]
    fn test_popover_hangs_below_anchor() {
        let bounds = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(30, 0, 50, 3);
        assert_eq!(popover_rect(anchor, 24, 6, bounds), Rect::new(56, 3, 24, 6));
    }

    #[test]
    fn test_popover_stays_in_bounds() {
        let bounds = Rect::new(0, 0, 20, 8);
        let anchor = Rect::new(0, 0, 20, 3);
        let rect = popover_rect(anchor, 30, 10, bounds);
        assert_eq!(rect, bounds);
    }

    #[test]
    fn test_dim_background_restyles_cells() {
        let theme = theme_for(ThemeMode::Dark);
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        dim_background(&mut buf, area, &theme);
        assert_eq!(buf[(3, 1)].fg, theme.palette.divider);
    }

    #[test]
    fn test_shadow_outside_buffer_is_ignored() {
        let theme = theme_for(ThemeMode::Light);
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        render_shadow(&mut buf, area, &theme);
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }
}

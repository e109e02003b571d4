//! Page views rendered in the content pane
//!
//! Each page reads the catalog through `synthesia_app::views`, the same
//! functions the key handler uses, so the highlighted row and the row
//! `Enter` opens are always the same record.

mod about;
mod agents;
mod code_generation;
mod dashboard;
mod executions;
mod projects;
mod settings;
mod workflows;

use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use synthesia_app::page::PageState;
use synthesia_app::Route;
use synthesia_core::Catalog;

use crate::theme::{icons::IconSet, styles, ThemeDefinition};

/// Everything a page needs to draw itself.
#[derive(Clone, Copy)]
pub struct PageContext<'a> {
    pub theme: &'a ThemeDefinition,
    pub icons: IconSet,
    pub catalog: &'a dyn Catalog,
    pub page: &'a PageState,
    /// Content pane owns the keyboard
    pub focused: bool,
    /// Search prompt is capturing input
    pub searching: bool,
}

impl PageContext<'_> {
    /// Row is highlighted when the content pane has focus.
    pub fn is_selected(&self, index: usize) -> bool {
        self.focused && index == self.page.selected
    }

    fn table_state(&self, len: usize) -> TableState {
        let selected = (self.focused && len > 0).then(|| self.page.selected.min(len - 1));
        TableState::default().with_selected(selected)
    }
}

/// Content pane for `route`.
pub struct Page<'a> {
    ctx: PageContext<'a>,
    route: &'a Route,
}

impl<'a> Page<'a> {
    pub fn new(ctx: PageContext<'a>, route: &'a Route) -> Self {
        Self { ctx, route }
    }
}

impl Widget for Page<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, styles::screen(self.ctx.theme));
        let area = Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(2),
            ..area
        };
        if area.is_empty() {
            return;
        }

        let ctx = &self.ctx;
        match self.route {
            Route::Dashboard => dashboard::render(ctx, area, buf),
            Route::Projects => projects::render_list(ctx, area, buf),
            Route::ProjectDetail { id } => projects::render_detail(ctx, id, area, buf),
            Route::Agents => agents::render_list(ctx, area, buf),
            Route::AgentDetail { id } => agents::render_detail(ctx, id, area, buf),
            Route::Workflows => workflows::render_list(ctx, area, buf),
            Route::WorkflowBuilder { id } => workflows::render_builder(ctx, id.as_deref(), area, buf),
            Route::Executions => executions::render(ctx, area, buf),
            Route::CodeGeneration => code_generation::render(ctx, area, buf),
            Route::Settings => settings::render(ctx, area, buf),
            Route::About => about::render(ctx, area, buf),
        }
    }
}

// ─────────────────────────────────────────────────────────
// Shared page pieces
// ─────────────────────────────────────────────────────────

/// Title and subtitle rows, with an optional action button on the right.
/// Returns the area below.
fn render_heading(
    ctx: &PageContext,
    area: Rect,
    buf: &mut Buffer,
    title: &str,
    subtitle: &str,
    action: Option<(&str, &str)>,
) -> Rect {
    let [head, rest] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    let lines = vec![
        Line::from(Span::styled(title.to_string(), styles::heading(ctx.theme, 4))),
        Line::from(Span::styled(subtitle.to_string(), styles::text_secondary(ctx.theme))),
    ];
    Paragraph::new(lines).render(head, buf);

    if let Some((key, label)) = action {
        let line = Line::from(vec![
            styles::button_span(ctx.theme, label),
            Span::styled(format!(" {}", key), styles::keybinding(ctx.theme)),
        ]);
        let width = line.width() as u16;
        if width + 20 < head.width {
            let button = Rect::new(head.right() - width, head.y, width, 1);
            Paragraph::new(line).render(button, buf);
        }
    }
    rest
}

/// Selectable table inside a card; scrolls to keep the selection visible.
fn render_table<'a>(
    ctx: &PageContext,
    area: Rect,
    buf: &mut Buffer,
    title: &str,
    header: Row<'a>,
    rows: Vec<Row<'a>>,
    widths: &[Constraint],
) {
    let mut state = ctx.table_state(rows.len());
    let table = Table::new(rows, widths.to_vec())
        .header(header.style(styles::text_secondary(ctx.theme)).bottom_margin(1))
        .block(styles::card_block(ctx.theme, title))
        .row_highlight_style(styles::selected(ctx.theme))
        .column_spacing(2);
    StatefulWidget::render(table, area, buf, &mut state);
}

/// Two-line cell: bold name over a secondary description.
fn name_cell<'a>(ctx: &PageContext, name: &str, description: &str) -> ratatui::text::Text<'a> {
    ratatui::text::Text::from(vec![
        Line::from(Span::styled(name.to_string(), styles::heading(ctx.theme, 6))),
        Line::from(Span::styled(
            description.to_string(),
            styles::text_secondary(ctx.theme),
        )),
    ])
}

fn short_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

fn date_time(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %H:%M").to_string()
}

/// Text progress bar: `width` cells of filled and empty blocks.
fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn muted_line(ctx: &PageContext, text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), styles::text_secondary(ctx.theme)))
}

fn label_value(ctx: &PageContext, label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), styles::text_secondary(ctx.theme)),
        Span::styled(value, styles::text_primary(ctx.theme)),
    ])
}

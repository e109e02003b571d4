//! Code generation and wheel exports

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Widget, Wrap},
};

use synthesia_core::Tone;

use super::{muted_line, render_heading, short_date, PageContext};
use crate::theme::styles;

pub(super) fn render(ctx: &PageContext, area: Rect, buf: &mut Buffer) {
    let rest = render_heading(
        ctx,
        area,
        buf,
        "Code Generation & Export",
        "Generate Python wheel files from your workflows",
        None,
    );
    let [exports, lock_in] =
        Layout::vertical([Constraint::Min(6), Constraint::Length(6)]).areas(rest);

    let rows: Vec<Row> = ctx
        .catalog
        .code_generations()
        .iter()
        .map(|generation| {
            let file = match generation.wheel_file_name() {
                Some(name) => Span::styled(name.to_string(), styles::accent(ctx.theme)),
                None => Span::styled("-", styles::text_secondary(ctx.theme)),
            };
            Row::new(vec![
                Cell::from(generation.workflow_name.clone()),
                Cell::from(generation.framework.display_name()),
                Cell::from(styles::chip_span(
                    ctx.theme,
                    generation.status.label(),
                    generation.status.tone(),
                )),
                Cell::from(file),
                Cell::from(Span::styled(
                    short_date(&generation.created_at),
                    styles::text_secondary(ctx.theme),
                )),
            ])
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Length(11),
            Constraint::Fill(1),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new(vec!["Workflow", "Framework", "Status", "File", "Created"])
            .style(styles::text_secondary(ctx.theme))
            .bottom_margin(1),
    )
    .block(styles::card_block(ctx.theme, "Exports"))
    .column_spacing(2)
    .render(exports, buf);

    render_lock_in(ctx, lock_in, buf);
}

fn render_lock_in(ctx: &PageContext, area: Rect, buf: &mut Buffer) {
    let block = styles::card_block(
        ctx.theme,
        format!("{} Zero Vendor Lock-in", ctx.icons.package()),
    );
    let inner = block.inner(area);
    block.render(area, buf);

    let chips = Line::from(vec![
        Span::styled(
            "[AutoGen Framework]",
            Style::default().fg(ctx.theme.palette.primary.main),
        ),
        Span::raw("  "),
        Span::styled(
            "[LangChain Compatible]",
            Style::default().fg(ctx.theme.palette.secondary.main),
        ),
        Span::raw("  "),
        styles::chip_span(ctx.theme, "Docker Ready", Tone::Success),
    ]);
    Paragraph::new(vec![
        muted_line(
            ctx,
            "Export your workflows as standalone Python wheel files that can run anywhere. \
             Your code, your infrastructure, your control.",
        ),
        Line::default(),
        chips,
    ])
    .wrap(Wrap { trim: true })
    .render(inner, buf);
}

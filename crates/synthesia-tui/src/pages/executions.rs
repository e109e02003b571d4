//! Execution history

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Row, Table, Widget},
};

use synthesia_core::ExecutionStatus;

use super::{date_time, progress_bar, render_heading, PageContext};
use crate::theme::styles;
use crate::widgets::EmptyStateView;

const PROGRESS_WIDTH: usize = 10;

pub(super) fn render(ctx: &PageContext, area: Rect, buf: &mut Buffer) {
    let rest = render_heading(
        ctx,
        area,
        buf,
        "Workflow Executions",
        "Monitor and manage workflow execution history",
        None,
    );

    let executions = ctx.catalog.executions();
    if executions.is_empty() {
        EmptyStateView::new(ctx.theme, synthesia_core::EmptyState::NoData, "executions")
            .render(rest, buf);
        return;
    }

    let rows: Vec<Row> = executions
        .iter()
        .map(|execution| {
            let tone_color = ctx.theme.palette.tone(execution.status.tone());
            let progress = Line::from(vec![
                Span::styled(
                    progress_bar(execution.progress(), PROGRESS_WIDTH),
                    Style::default().fg(tone_color),
                ),
                Span::styled(
                    format!(" {}/{}", execution.agents_executed, execution.total_agents),
                    styles::text_secondary(ctx.theme),
                ),
            ]);
            let mut workflow = vec![Line::from(execution.workflow_name.clone())];
            if let Some(message) = &execution.error_message {
                workflow.push(Line::from(Span::styled(message.clone(), styles::error(ctx.theme))));
            }
            let height = workflow.len() as u16;
            Row::new(vec![
                Cell::from(styles::chip_span(
                    ctx.theme,
                    execution.status.label(),
                    execution.status.tone(),
                )),
                Cell::from(workflow),
                Cell::from(Span::styled(
                    date_time(&execution.start_time),
                    styles::text_secondary(ctx.theme),
                )),
                Cell::from(duration(execution.status, &execution.duration_label())),
                Cell::from(progress),
            ])
            .height(height)
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(11),
            Constraint::Fill(1),
            Constraint::Length(13),
            Constraint::Length(9),
            Constraint::Length(PROGRESS_WIDTH as u16 + 6),
        ],
    )
    .header(
        Row::new(vec!["Status", "Workflow", "Started", "Duration", "Progress"])
            .style(styles::text_secondary(ctx.theme))
            .bottom_margin(1),
    )
    .block(styles::card_block(ctx.theme, "History"))
    .column_spacing(2)
    .render(rest, buf);
}

/// Running executions have no duration yet.
fn duration(status: ExecutionStatus, label: &str) -> String {
    if status == ExecutionStatus::Running {
        "running".to_string()
    } else {
        label.to_string()
    }
}

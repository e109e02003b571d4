//! Projects list and project detail

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Widget, Wrap},
};

use synthesia_app::views::{self, Detail};

use super::{label_value, name_cell, render_heading, render_table, short_date, PageContext};
use crate::theme::styles;
use crate::widgets::{EmptyStateView, NotFoundView, SearchInput};

pub(super) fn render_list(ctx: &PageContext, area: Rect, buf: &mut Buffer) {
    let rest = render_heading(
        ctx,
        area,
        buf,
        "Projects",
        "Manage your AI agent projects and workflows",
        None,
    );
    let [search, body] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(rest);

    let list = views::project_list(ctx.catalog, &ctx.page.filter);
    SearchInput::new(ctx.theme, ctx.icons, &ctx.page.filter.query)
        .placeholder("Search projects...")
        .active(ctx.searching)
        .matches(list.len())
        .render(search, buf);

    if let Some(empty) = list.empty_state() {
        EmptyStateView::new(ctx.theme, empty, "projects").render(body, buf);
        return;
    }

    let rows: Vec<Row> = list
        .items
        .iter()
        .map(|project| {
            Row::new(vec![
                Cell::from(name_cell(ctx, &project.name, &project.description)),
                Cell::from(styles::chip_span(
                    ctx.theme,
                    project.status.label(),
                    project.status.tone(),
                )),
                Cell::from(project.agent_count.to_string()),
                Cell::from(project.workflow_count.to_string()),
                Cell::from(Span::styled(
                    short_date(&project.updated_at),
                    styles::text_secondary(ctx.theme),
                )),
            ])
            .height(2)
        })
        .collect();

    render_table(
        ctx,
        body,
        buf,
        "All Projects",
        Row::new(vec!["Name", "Status", "Agents", "Workflows", "Updated"]),
        rows,
        &[
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Length(9),
            Constraint::Length(12),
        ],
    );
}

pub(super) fn render_detail(ctx: &PageContext, id: &str, area: Rect, buf: &mut Buffer) {
    let view = match views::project_detail(ctx.catalog, id) {
        Detail::Found(view) => view,
        Detail::NotFound(not_found) => {
            NotFoundView::new(ctx.theme, ctx.icons, &not_found).render(area, buf);
            return;
        }
    };
    let project = view.project;

    let rest = render_heading(ctx, area, buf, &project.name, &project.description, None);
    let [summary, workflows] =
        Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(rest);

    let block = styles::card_block(ctx.theme, "Overview");
    let inner = block.inner(summary);
    block.render(summary, buf);
    Paragraph::new(vec![
        Line::from(vec![
            styles::chip_span(ctx.theme, project.status.label(), project.status.tone()),
            Span::styled(
                format!("  {} Back to Projects  Esc", ctx.icons.back()),
                styles::text_secondary(ctx.theme),
            ),
        ]),
        label_value(
            ctx,
            "Agents",
            format!("{}    Workflows: {}", project.agent_count, project.workflow_count),
        ),
        label_value(ctx, "Created", short_date(&project.created_at)),
        label_value(ctx, "Updated", short_date(&project.updated_at)),
    ])
    .wrap(Wrap { trim: true })
    .render(inner, buf);

    if view.workflows.is_empty() {
        let block = styles::card_block(ctx.theme, "Workflows");
        let inner = block.inner(workflows);
        block.render(workflows, buf);
        Paragraph::new(super::muted_line(ctx, "No workflows in this project yet"))
            .render(inner, buf);
        return;
    }

    let rows: Vec<Row> = view
        .workflows
        .iter()
        .map(|workflow| {
            Row::new(vec![
                Cell::from(name_cell(ctx, &workflow.name, &workflow.description)),
                Cell::from(styles::chip_span(
                    ctx.theme,
                    workflow.status.label(),
                    workflow.status.tone(),
                )),
                Cell::from(workflow.agent_count.to_string()),
                Cell::from(workflow.execution_count.to_string()),
            ])
            .height(2)
        })
        .collect();

    render_table(
        ctx,
        workflows,
        buf,
        "Workflows",
        Row::new(vec!["Workflow", "Status", "Agents", "Executions"]),
        rows,
        &[
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Length(10),
        ],
    );
}

//! Workflows list and the workflow builder placeholder

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Widget, Wrap},
};

use synthesia_app::views::{self, BuilderMode};

use super::{date_time, muted_line, name_cell, render_heading, render_table, PageContext};
use crate::theme::styles;
use crate::widgets::{EmptyStateView, SearchInput};

pub(super) fn render_list(ctx: &PageContext, area: Rect, buf: &mut Buffer) {
    let rest = render_heading(
        ctx,
        area,
        buf,
        "Workflows",
        "Design and manage multi-agent workflows",
        Some(("n", "New Workflow")),
    );
    let [search, body] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(rest);

    let list = views::workflow_list(ctx.catalog, &ctx.page.filter);
    SearchInput::new(ctx.theme, ctx.icons, &ctx.page.filter.query)
        .placeholder("Search workflows...")
        .active(ctx.searching)
        .matches(list.len())
        .render(search, buf);

    if let Some(empty) = list.empty_state() {
        EmptyStateView::new(ctx.theme, empty, "workflows").render(body, buf);
        return;
    }

    let rows: Vec<Row> = list
        .items
        .iter()
        .map(|workflow| {
            let last_run = workflow
                .last_executed_at
                .as_ref()
                .map(date_time)
                .unwrap_or_else(|| "never".to_string());
            Row::new(vec![
                Cell::from(name_cell(ctx, &workflow.name, &workflow.description)),
                Cell::from(styles::chip_span(
                    ctx.theme,
                    workflow.status.label(),
                    workflow.status.tone(),
                )),
                Cell::from(workflow.agent_count.to_string()),
                Cell::from(workflow.execution_count.to_string()),
                Cell::from(Span::styled(last_run, styles::text_secondary(ctx.theme))),
            ])
            .height(2)
        })
        .collect();

    render_table(
        ctx,
        body,
        buf,
        "All Workflows",
        Row::new(vec!["Workflow", "Status", "Agents", "Executions", "Last run"]),
        rows,
        &[
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(13),
        ],
    );
}

pub(super) fn render_builder(ctx: &PageContext, id: Option<&str>, area: Rect, buf: &mut Buffer) {
    let subtitle = match views::workflow_builder(ctx.catalog, id) {
        BuilderMode::Create => "New workflow".to_string(),
        BuilderMode::Edit {
            workflow: Some(workflow),
            ..
        } => format!("Editing {}", workflow.name),
        BuilderMode::Edit { id, workflow: None } => format!("Editing {}", id),
    };
    let rest = render_heading(ctx, area, buf, "Workflow Builder", &subtitle, None);

    let block = styles::card_block(ctx.theme, "Canvas");
    let inner = block.inner(rest);
    block.render(rest, buf);

    let top = inner.height.saturating_sub(3) / 2;
    let [_, text] =
        Layout::vertical([Constraint::Length(top), Constraint::Min(0)]).areas(inner);
    Paragraph::new(vec![
        Line::from(Span::styled(
            "Visual workflow builder with drag-and-drop agents",
            styles::heading(ctx.theme, 6),
        )),
        Line::default(),
        muted_line(ctx, format!("{} Back to Workflows  Esc", ctx.icons.back())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .render(text, buf);
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{render_page, TestTerminal};
    use synthesia_app::Route;

    #[test]
    fn test_workflows_list_offers_new_workflow() {
        let mut term = TestTerminal::with_size(120, 30);
        render_page(&mut term, &Route::Workflows, |_| {});
        assert!(term.buffer_contains("New Workflow"));
        assert!(term.buffer_contains("Blog Post Creation Pipeline"));
    }

    #[test]
    fn test_builder_create_and_edit() {
        let mut term = TestTerminal::with_size(100, 24);
        render_page(&mut term, &Route::WorkflowBuilder { id: None }, |_| {});
        assert!(term.buffer_contains("Workflow Builder"));
        assert!(term.buffer_contains("New workflow"));

        render_page(
            &mut term,
            &Route::WorkflowBuilder {
                id: Some("workflow-2".into()),
            },
            |_| {},
        );
        assert!(term.buffer_contains("Editing Blog Post Creation Pipeline"));
    }

    #[test]
    fn test_builder_for_unknown_workflow_keeps_id() {
        let mut term = TestTerminal::with_size(100, 24);
        render_page(
            &mut term,
            &Route::WorkflowBuilder {
                id: Some("workflow-77".into()),
            },
            |_| {},
        );
        assert!(term.buffer_contains("Editing workflow-77"));
    }
}

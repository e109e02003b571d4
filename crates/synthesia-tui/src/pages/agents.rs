//! Agent catalogue and agent detail

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Cell, Paragraph, Row, Sparkline, Widget, Wrap},
};

use synthesia_app::views::{self, AgentDetailView, Detail};
use synthesia_core::{AgentInsights, Tone};

use super::{date_time, label_value, muted_line, name_cell, render_heading, render_table, PageContext};
use crate::theme::styles;
use crate::widgets::{text::truncate, EmptyStateView, NotFoundView, SearchInput, TabStrip};

pub(super) fn render_list(ctx: &PageContext, area: Rect, buf: &mut Buffer) {
    let rest = render_heading(
        ctx,
        area,
        buf,
        "AI Agents",
        "Browse and configure your AI agents",
        None,
    );
    let [tabs, search, body] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(rest);

    TabStrip::new(ctx.theme, views::category_tabs(ctx.catalog), ctx.page.category_index)
        .render(tabs, buf);

    let list = views::agent_list(ctx.catalog, &ctx.page.filter);
    SearchInput::new(ctx.theme, ctx.icons, &ctx.page.filter.query)
        .placeholder("Search agents...")
        .active(ctx.searching)
        .matches(list.len())
        .render(search, buf);

    if let Some(empty) = list.empty_state() {
        EmptyStateView::new(ctx.theme, empty, "agents").render(body, buf);
        return;
    }

    let rows: Vec<Row> = list
        .items
        .iter()
        .map(|agent| {
            Row::new(vec![
                Cell::from(name_cell(ctx, &agent.name, &agent.description)),
                Cell::from(Span::styled(
                    agent.category.clone(),
                    styles::text_secondary(ctx.theme),
                )),
                Cell::from(styles::chip_span(ctx.theme, agent.status.label(), agent.status.tone())),
                Cell::from(agent.execution_count.to_string()),
                Cell::from(Span::styled(
                    format!("{}%", agent.success_rate),
                    styles::chip(ctx.theme, Tone::Success),
                )),
            ])
            .height(2)
        })
        .collect();

    render_table(
        ctx,
        body,
        buf,
        "Agents",
        Row::new(vec!["Agent", "Category", "Status", "Executions", "Success Rate"]),
        rows,
        &[
            Constraint::Fill(1),
            Constraint::Length(20),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(12),
        ],
    );
}

pub(super) fn render_detail(ctx: &PageContext, id: &str, area: Rect, buf: &mut Buffer) {
    let view = match views::agent_detail(ctx.catalog, id) {
        Detail::Found(view) => view,
        Detail::NotFound(not_found) => {
            NotFoundView::new(ctx.theme, ctx.icons, &not_found).render(area, buf);
            return;
        }
    };

    let rest = render_heading(ctx, area, buf, &view.agent.name, &view.agent.description, None);
    let [info, charts, lower] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(10),
        Constraint::Min(0),
    ])
    .areas(rest);

    render_info(ctx, &view, info, buf);

    let [performance, resources] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(charts);
    render_performance(ctx, view.insights, performance, buf);
    render_resources(ctx, view.insights, resources, buf);

    let [configuration, executions] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(lower);
    render_configuration(ctx, &view, configuration, buf);
    render_executions(ctx, &view, executions, buf);
}

/// Chips plus headline totals.
fn render_info(ctx: &PageContext, view: &AgentDetailView, area: Rect, buf: &mut Buffer) {
    let agent = view.agent;
    let theme = ctx.theme;
    let chips = Line::from(vec![
        styles::chip_span(theme, &agent.category, Tone::Info),
        Span::raw(" "),
        Span::styled(
            format!("[{}]", view.configuration.provider),
            Style::default().fg(theme.palette.secondary.main),
        ),
        Span::raw(" "),
        styles::chip_span(theme, &view.configuration.model, Tone::Info),
        Span::raw(" "),
        styles::chip_span(theme, agent.status.label(), agent.status.tone()),
    ]);
    let totals = Line::from(vec![
        Span::styled(agent.execution_count.to_string(), styles::accent_bold(theme)),
        Span::styled(" Total Executions   ", styles::text_secondary(theme)),
        Span::styled(
            format!("{}%", agent.success_rate),
            styles::chip(theme, Tone::Success),
        ),
        Span::styled(" Success Rate   ", styles::text_secondary(theme)),
        Span::styled(format!("{:.1}s", agent.avg_execution_time), styles::text_primary(theme)),
        Span::styled(" Avg Time", styles::text_secondary(theme)),
    ]);
    let back = muted_line(ctx, format!("{} Back to Agents  Esc", ctx.icons.back()));
    Paragraph::new(vec![chips, totals, back]).render(area, buf);
}

fn render_performance(ctx: &PageContext, insights: &AgentInsights, area: Rect, buf: &mut Buffer) {
    let palette = &ctx.theme.palette;
    let groups: Vec<(String, [Bar; 2])> = insights
        .weekly
        .iter()
        .map(|day| {
            (
                day.day.clone(),
                [
                    Bar::default()
                        .value(u64::from(day.success))
                        .text_value(String::new())
                        .style(Style::default().fg(palette.success.main)),
                    Bar::default()
                        .value(u64::from(day.failed))
                        .text_value(String::new())
                        .style(Style::default().fg(palette.error.main)),
                ],
            )
        })
        .collect();

    let mut chart = BarChart::default()
        .block(styles::card_block(ctx.theme, "Execution Performance"))
        .bar_width(1)
        .bar_gap(0)
        .group_gap(2);
    for (day, bars) in &groups {
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(truncate(day, 3)))
                .bars(bars),
        );
    }
    chart.render(area, buf);
}

fn render_resources(ctx: &PageContext, insights: &AgentInsights, area: Rect, buf: &mut Buffer) {
    let block = styles::card_block(ctx.theme, "Resource Usage (24h)");
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height < 4 {
        return;
    }

    let cpu: Vec<u64> = insights.resources.iter().map(|s| u64::from(s.cpu)).collect();
    let memory: Vec<u64> = insights.resources.iter().map(|s| u64::from(s.memory)).collect();

    let [cpu_label, cpu_area, memory_label, memory_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let peak_cpu = cpu.iter().copied().max().unwrap_or(0);
    let peak_memory = memory.iter().copied().max().unwrap_or(0);
    Paragraph::new(muted_line(ctx, format!("CPU %  (peak {})", peak_cpu))).render(cpu_label, buf);
    Sparkline::default()
        .data(&cpu)
        .max(100)
        .style(styles::accent(ctx.theme))
        .render(cpu_area, buf);
    Paragraph::new(muted_line(ctx, format!("Memory (MB)  (peak {})", peak_memory)))
        .render(memory_label, buf);
    Sparkline::default()
        .data(&memory)
        .style(styles::secondary_accent(ctx.theme))
        .render(memory_area, buf);
}

fn render_configuration(ctx: &PageContext, view: &AgentDetailView, area: Rect, buf: &mut Buffer) {
    let config = &view.configuration;
    let block = styles::card_block(ctx.theme, "Configuration");
    let inner = block.inner(area);
    block.render(area, buf);

    let caching = if config.caching_enabled { "Enabled" } else { "Disabled" };
    let lines = vec![
        label_value(ctx, "Model", config.model.clone()),
        label_value(ctx, "Temperature", config.temperature.to_string()),
        label_value(ctx, "Max Tokens", config.max_tokens.to_string()),
        label_value(ctx, "Top P", config.top_p.to_string()),
        label_value(
            ctx,
            "Penalties",
            format!(
                "frequency {}  presence {}",
                config.frequency_penalty, config.presence_penalty
            ),
        ),
        label_value(ctx, "Timeout", format!("{}s", config.timeout)),
        label_value(ctx, "Retry Attempts", config.retry_attempts.to_string()),
        label_value(ctx, "Caching", caching.to_string()),
        label_value(ctx, "Available Tools", config.tools.join(", ")),
        Line::from(Span::styled("System Prompt", styles::heading(ctx.theme, 6))),
        muted_line(ctx, config.system_prompt.clone()),
    ];
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

fn render_executions(ctx: &PageContext, view: &AgentDetailView, area: Rect, buf: &mut Buffer) {
    if view.executions.is_empty() {
        let block = styles::card_block(ctx.theme, "Recent Executions");
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(muted_line(ctx, "No executions found for this agent")).render(inner, buf);
        return;
    }

    let rows: Vec<Row> = view
        .executions
        .iter()
        .map(|execution| {
            Row::new(vec![
                Cell::from(truncate(&execution.workflow_name, 26)),
                Cell::from(styles::chip_span(
                    ctx.theme,
                    execution.status.label(),
                    execution.status.tone(),
                )),
                Cell::from(Span::styled(
                    date_time(&execution.start_time),
                    styles::text_secondary(ctx.theme),
                )),
                Cell::from(
                    execution
                        .tokens_used
                        .map(|t| t.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                ),
            ])
        })
        .collect();

    render_table(
        ctx,
        area,
        buf,
        "Recent Executions",
        Row::new(vec!["Workflow", "Status", "Started", "Tokens"]),
        rows,
        &[
            Constraint::Fill(1),
            Constraint::Length(11),
            Constraint::Length(13),
            Constraint::Length(6),
        ],
    );
}

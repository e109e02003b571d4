//! Dashboard overview

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Cell, Paragraph, Row, Table, Widget},
};

use synthesia_app::views;
use synthesia_core::Tone;

use super::{date_time, muted_line, render_heading, render_table, PageContext};
use crate::theme::styles;
use crate::widgets::text::truncate;

/// Height below which the performance bars are dropped.
const PERFORMANCE_MIN_HEIGHT: u16 = 16;

pub(super) fn render(ctx: &PageContext, area: Rect, buf: &mut Buffer) {
    let user = ctx.catalog.current_user();
    let rest = render_heading(
        ctx,
        area,
        buf,
        &format!("Welcome back, {}!", user.first_name),
        "Here's what's happening with your AI agents today",
        None,
    );

    let [stats, activity, charts] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(9),
        Constraint::Min(0),
    ])
    .areas(rest);

    render_stat_cards(ctx, stats, buf);

    let [recent, projects] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(activity);
    render_recent_executions(ctx, recent, buf);
    render_active_projects(ctx, projects, buf);

    if charts.height < 6 {
        return;
    }
    let (trend_row, performance) = if charts.height >= PERFORMANCE_MIN_HEIGHT {
        let [top, bottom] =
            Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(charts);
        (top, Some(bottom))
    } else {
        (charts, None)
    };

    let [trend, distribution] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(trend_row);
    render_execution_trend(ctx, trend, buf);
    render_distribution(ctx, distribution, buf);

    if let Some(area) = performance {
        render_top_agents(ctx, area, buf);
    }
}

fn render_stat_cards(ctx: &PageContext, area: Rect, buf: &mut Buffer) {
    let stats = ctx.catalog.dashboard_stats();
    let palette = &ctx.theme.palette;
    let cards = [
        ("Total Projects", stats.total_projects, "Active projects".to_string(), palette.primary.main),
        ("Total Agents", stats.total_agents, "AI agents configured".to_string(), palette.secondary.main),
        ("Workflows", stats.total_workflows, "Active workflows".to_string(), palette.success.main),
        (
            "Executions",
            stats.total_executions,
            format!("{}% success rate", stats.success_rate),
            palette.info.main,
        ),
    ];

    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    for ((title, value, subtitle, color), column) in cards.into_iter().zip(columns.iter()) {
        let block = styles::card_block(ctx.theme, title);
        let inner = block.inner(*column);
        block.render(*column, buf);
        Paragraph::new(vec![
            Line::from(Span::styled(
                value.to_string(),
                Style::default().fg(color).add_modifier(ctx.theme.typography.heading(4).modifier()),
            )),
            muted_line(ctx, subtitle),
        ])
        .render(inner, buf);
    }
}

fn render_recent_executions(ctx: &PageContext, area: Rect, buf: &mut Buffer) {
    let rows: Vec<Row> = views::recent_executions(ctx.catalog)
        .into_iter()
        .map(|execution| {
            Row::new(vec![
                Cell::from(Span::styled(
                    truncate(&execution.workflow_name, 28),
                    styles::text_primary(ctx.theme),
                )),
                Cell::from(Span::styled(
                    date_time(&execution.start_time),
                    styles::text_secondary(ctx.theme),
                )),
                Cell::from(styles::chip_span(
                    ctx.theme,
                    execution.status.label(),
                    execution.status.tone(),
                )),
            ])
        })
        .collect();

    Table::new(
        rows,
        [Constraint::Fill(1), Constraint::Length(13), Constraint::Length(11)],
    )
    .block(styles::card_block(ctx.theme, "Recent Executions"))
    .column_spacing(1)
    .render(area, buf);
}

fn render_active_projects(ctx: &PageContext, area: Rect, buf: &mut Buffer) {
    let rows: Vec<Row> = views::active_projects(ctx.catalog)
        .into_iter()
        .map(|project| {
            Row::new(vec![
                Cell::from(truncate(&project.name, 28)),
                Cell::from(styles::chip_span(ctx.theme, "Active", Tone::Success)),
                Cell::from(Span::styled(
                    format!("{} agents  {} workflows", project.agent_count, project.workflow_count),
                    styles::text_secondary(ctx.theme),
                )),
            ])
        })
        .collect();

    render_table(
        ctx,
        area,
        buf,
        "Active Projects",
        Row::new(vec!["Project", "", ""]),
        rows,
        &[Constraint::Fill(1), Constraint::Length(8), Constraint::Length(22)],
    );
}

fn render_execution_trend(ctx: &PageContext, area: Rect, buf: &mut Buffer) {
    let chart_data = ctx.catalog.chart_data();
    let palette = &ctx.theme.palette;

    let groups: Vec<(String, Vec<Bar>)> = chart_data
        .execution_trend
        .iter()
        .map(|point| {
            let bars = vec![
                trend_bar(point.executions, palette.primary.main),
                trend_bar(point.successful, palette.success.main),
                trend_bar(point.failed, palette.error.main),
            ];
            (point.date.clone(), bars)
        })
        .collect();

    let mut chart = BarChart::default()
        .block(styles::card_block(ctx.theme, "Execution Trend (Last 5 Days)"))
        .bar_width(2)
        .bar_gap(0)
        .group_gap(2)
        .max(u64::from(chart_data.trend_peak()).max(1));
    for (date, bars) in &groups {
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(date.clone()).style(styles::text_secondary(ctx.theme)))
                .bars(bars),
        );
    }
    chart.render(area, buf);
}

fn trend_bar(value: u32, color: Color) -> Bar<'static> {
    Bar::default()
        .value(u64::from(value))
        .text_value(String::new())
        .style(Style::default().fg(color))
}

/// Category shares as labelled proportion bars.
fn render_distribution(ctx: &PageContext, area: Rect, buf: &mut Buffer) {
    let chart_data = ctx.catalog.chart_data();
    let total = chart_data.category_total().max(1) as f64;
    let block = styles::card_block(ctx.theme, "Agent Distribution");
    let inner = block.inner(area);
    block.render(area, buf);

    let bar_width = (inner.width as usize).saturating_sub(8).min(12);
    let tones = [Tone::Info, Tone::Success, Tone::Warning, Tone::Error, Tone::Neutral];
    let lines: Vec<Line> = chart_data
        .category_distribution
        .iter()
        .enumerate()
        .map(|(i, share)| {
            let fraction = share.value as f64 / total;
            let color = if i == 0 {
                ctx.theme.palette.primary.main
            } else {
                ctx.theme.palette.tone(tones[(i - 1) % tones.len()])
            };
            Line::from(vec![
                Span::styled(
                    super::progress_bar(fraction, bar_width),
                    Style::default().fg(color),
                ),
                Span::styled(
                    format!(" {:>3.0}% ", fraction * 100.0),
                    styles::text_primary(ctx.theme),
                ),
                Span::styled(share.name.clone(), styles::text_secondary(ctx.theme)),
            ])
        })
        .collect();
    Paragraph::new(lines).render(inner, buf);
}

fn render_top_agents(ctx: &PageContext, area: Rect, buf: &mut Buffer) {
    let chart_data = ctx.catalog.chart_data();
    let bars: Vec<Bar> = chart_data
        .agent_performance
        .iter()
        .map(|agent| {
            Bar::default()
                .value(u64::from(agent.executions))
                .label(Line::from(truncate(&agent.name, 10)))
                .text_value(format!("{}", agent.executions))
                .style(styles::accent(ctx.theme))
                .value_style(styles::button(ctx.theme))
        })
        .collect();

    BarChart::default()
        .block(styles::card_block(ctx.theme, "Top Performing Agents"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(2)
        .render(area, buf);
}

//! Product overview

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use synthesia_core::Tone;

use super::{muted_line, render_heading, PageContext};
use crate::theme::styles;

const MISSION: &str = "To democratize AI agent development by providing a visual, code-free \
    platform that empowers businesses to design, build, and deploy sophisticated multi-agent \
    workflows without vendor lock-in.";

const FEATURES: &[(&str, &str)] = &[
    ("AI-Powered Agent Design", "Visual multi-agent workflow design with 90+ pre-built agent types"),
    ("Zero Vendor Lock-in", "Export workflows as standalone Python wheel files"),
    ("AutoGen Framework", "Enterprise-grade agent orchestration and communication"),
    ("Multi-Tenant Architecture", "Complete data isolation and tenant-aware authentication"),
    ("Deploy Anywhere", "Docker-ready exports for any cloud or on-premise"),
    ("Team Collaboration", "Role-based access control and approval workflows"),
];

const STATS: &[(&str, &str)] = &[
    ("9+", "Agent Categories"),
    ("90+", "Pre-built Agents"),
    ("7+", "Supported LLM Providers"),
    ("3", "Export Frameworks"),
];

const TECH_STACK: &[(&str, &[&str])] = &[
    ("Frontend", &["React 18.2", "TypeScript 5", "Material-UI 5.14", "React Flow 11"]),
    ("Backend", &["FastAPI 0.104", "Python 3.11", "PostgreSQL 15", "AutoGen 0.2", "Redis 7"]),
    ("Deployment", &["Docker 24", "Nginx", "Python Wheels", "Docker Compose"]),
];

struct Tier {
    name: &'static str,
    price: &'static str,
    includes: &'static [&'static str],
}

const TIERS: &[Tier] = &[
    Tier {
        name: "Free",
        price: "$0/month",
        includes: &["3 Projects", "10 Agents", "Code Export"],
    },
    Tier {
        name: "Professional",
        price: "$49/month",
        includes: &["Unlimited Projects", "Unlimited Agents", "Code Export", "Priority Support"],
    },
    Tier {
        name: "Enterprise",
        price: "Custom",
        includes: &[
            "Everything in Pro",
            "On-Premise Deployment",
            "SLA & Dedicated Support",
            "Custom Integrations",
        ],
    },
];

pub(super) fn render(ctx: &PageContext, area: Rect, buf: &mut Buffer) {
    let rest = render_heading(
        ctx,
        area,
        buf,
        "SynthesiaCanvas 2.0",
        "Multi-Tenant Agentic AI System Design Platform",
        None,
    );
    let [mission, features, lower] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Min(0),
    ])
    .areas(rest);

    let block = styles::card_block(ctx.theme, "Our Mission");
    let inner = block.inner(mission);
    block.render(mission, buf);
    Paragraph::new(muted_line(ctx, MISSION))
        .wrap(Wrap { trim: true })
        .render(inner, buf);

    render_features(ctx, features, buf);

    let [stats, stack, tiers] = Layout::horizontal([
        Constraint::Percentage(25),
        Constraint::Percentage(35),
        Constraint::Percentage(40),
    ])
    .areas(lower);
    render_stats(ctx, stats, buf);
    render_stack(ctx, stack, buf);
    render_tiers(ctx, tiers, buf);
}

fn render_features(ctx: &PageContext, area: Rect, buf: &mut Buffer) {
    let block = styles::card_block(ctx.theme, "Key Features");
    let inner = block.inner(area);
    block.render(area, buf);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(inner);
    let half = FEATURES.len().div_ceil(2);
    for (column, features) in [left, right].into_iter().zip(FEATURES.chunks(half)) {
        let lines: Vec<Line> = features
            .iter()
            .map(|(title, description)| {
                Line::from(vec![
                    Span::styled(format!("{} ", ctx.icons.check()), styles::chip(ctx.theme, Tone::Success)),
                    Span::styled(*title, styles::heading(ctx.theme, 6)),
                    Span::styled(format!("  {}", description), styles::text_secondary(ctx.theme)),
                ])
            })
            .collect();
        Paragraph::new(lines).render(column, buf);
    }
}

fn render_stats(ctx: &PageContext, area: Rect, buf: &mut Buffer) {
    let block = styles::card_block(ctx.theme, "By the Numbers");
    let inner = block.inner(area);
    block.render(area, buf);
    let lines: Vec<Line> = STATS
        .iter()
        .map(|(value, label)| {
            Line::from(vec![
                Span::styled(format!("{:>4} ", value), styles::accent_bold(ctx.theme)),
                Span::styled(*label, styles::text_secondary(ctx.theme)),
            ])
        })
        .collect();
    Paragraph::new(lines).render(inner, buf);
}

fn render_stack(ctx: &PageContext, area: Rect, buf: &mut Buffer) {
    let block = styles::card_block(ctx.theme, "Technology Stack");
    let inner = block.inner(area);
    block.render(area, buf);
    let lines: Vec<Line> = TECH_STACK
        .iter()
        .flat_map(|(group, items)| {
            [
                Line::from(Span::styled(*group, styles::heading(ctx.theme, 6))),
                muted_line(ctx, items.join(", ")),
            ]
        })
        .collect();
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

fn render_tiers(ctx: &PageContext, area: Rect, buf: &mut Buffer) {
    let block = styles::card_block(ctx.theme, "Subscription Tiers");
    let inner = block.inner(area);
    block.render(area, buf);

    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(inner);
    for (tier, column) in TIERS.iter().zip(columns.iter()) {
        let mut lines = vec![
            Line::from(Span::styled(tier.name, styles::heading(ctx.theme, 6))),
            Line::from(Span::styled(tier.price, styles::accent_bold(ctx.theme))),
        ];
        lines.extend(tier.includes.iter().map(|item| muted_line(ctx, *item)));
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(*column, buf);
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{render_page, TestTerminal};
    use synthesia_app::Route;

    #[test]
    fn test_about_lists_tiers_and_features() {
        let mut term = TestTerminal::with_size(140, 40);
        render_page(&mut term, &Route::About, |_| {});
        assert!(term.buffer_contains("SynthesiaCanvas 2.0"));
        assert!(term.buffer_contains("Our Mission"));
        assert!(term.buffer_contains("Zero Vendor Lock-in"));
        assert!(term.buffer_contains("Professional"));
        assert!(term.buffer_contains("$49/month"));
    }
}

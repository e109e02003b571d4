use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Paragraph, Widget},
};

use synthesia_app::page::SettingsTab;

use super::{label_value, muted_line, render_heading, PageContext};
use crate::theme::styles;
use crate::widgets::TabStrip;

pub(super) fn render(ctx: &PageContext, area: Rect, buf: &mut Buffer) {
    let rest = render_heading(
        ctx,
        area,
        buf,
        "Settings",
        "Manage your account and workspace preferences",
        None,
    );
    let [tabs, body] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(rest);

    let tab = ctx.page.settings_tab;
    let titles = SettingsTab::ALL.iter().map(|t| t.label()).collect();
    TabStrip::new(ctx.theme, titles, tab.index()).render(tabs, buf);

    let block = styles::card_block(ctx.theme, format!("{} Settings", tab.label()));
    let inner = block.inner(body);
    block.render(body, buf);

    let mut lines = vec![muted_line(ctx, "Configuration options will appear here")];
    if tab == SettingsTab::Profile {
        let user = ctx.catalog.current_user();
        lines.push(ratatui::text::Line::default());
        lines.push(label_value(ctx, "Name", user.full_name()));
        lines.push(label_value(ctx, "Email", user.email.clone()));
        lines.push(label_value(ctx, "Tenant", user.tenant_name.clone()));
    }
    Paragraph::new(lines).render(inner, buf);
}

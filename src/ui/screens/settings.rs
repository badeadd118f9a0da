use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme::Palette;

use super::widgets::panel;

fn setting<'a>(p: &Palette, name: &str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {name:<16}"), p.dim_style()),
        Span::styled(
            value,
            Style::default().fg(p.text).add_modifier(Modifier::BOLD),
        ),
    ])
}

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let p = app.palette();
    let currency = app.currency();

    let config_path = app
        .config_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "(not saved)".into());

    let lines = vec![
        Line::from(""),
        setting(&p, "Theme", format!("{}  (t or :theme to toggle)", app.theme)),
        setting(&p, "Currency", currency.symbol.clone()),
        setting(&p, "Rate", format!("{} stored units = 1 {}", currency.rate, currency.symbol)),
        setting(&p, "Data source", app.data_source.clone()),
        setting(&p, "Transactions", app.transactions.len().to_string()),
        setting(&p, "Config file", config_path),
        Line::from(""),
        Line::from(Span::styled(
            "  Edit the config file to change the currency or data file.",
            p.dim_style(),
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(panel(&p, "Settings")), area);
}

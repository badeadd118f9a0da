use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::aggregate::{
    anchor_date, by_category, distribution, sum_by_key, summarize, windowed_series, Window,
};
use crate::ui::app::App;
use crate::ui::util::format_amount;

use super::widgets::{render_card, render_distribution, render_empty, render_pane_table, render_series};

const TREND_MONTHS: u32 = 6;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let p = app.palette();
    let currency = app.currency();
    let pane = &app.income_pane;
    // Income records carry their source in the label.
    let metrics = summarize(&pane.records, by_category);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(8)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(chunks[0]);

    render_card(
        f,
        cards[0],
        &p,
        "Total Income",
        format_amount(metrics.total, currency),
        p.green,
        None,
    );
    render_card(
        f,
        cards[1],
        &p,
        "Transactions",
        metrics.count.to_string(),
        p.accent,
        None,
    );
    render_card(
        f,
        cards[2],
        &p,
        "Average Income",
        format_amount(metrics.average, currency),
        p.yellow,
        None,
    );
    render_card(
        f,
        cards[3],
        &p,
        "Top Source",
        metrics.top_key.clone(),
        p.accent,
        None,
    );

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_pane_table(f, body[0], &p, currency, pane, "Income", "Source");

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body[1]);

    let shares = distribution(&sum_by_key(&pane.records, by_category));
    render_distribution(f, side[0], &p, currency, "By Source", &shares);

    let title = "Monthly Income";
    match anchor_date(&pane.records) {
        Some(anchor) => {
            let months = windowed_series(&pane.records, Window::Month, TREND_MONTHS, anchor);
            render_series(f, side[1], &p, currency, title, &months, p.green);
        }
        None => render_empty(f, side[1], &p, title, "No income yet"),
    }
}

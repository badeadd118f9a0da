use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Gauge, Paragraph},
    Frame,
};

use crate::aggregate::{
    balance_overview, by_category, distribution, filter_kind, monthly_trend, recent, sum_by_key,
    top_categories,
};
use crate::models::TransactionKind;
use crate::ui::app::App;
use crate::ui::theme::Palette;
use crate::ui::util::{bar_value, format_amount, format_compact, truncate};

use super::widgets::{panel, render_card, render_distribution, render_empty};

const TREND_MONTHS: u32 = 6;
const TOP_CATEGORIES: usize = 4;
const RECENT_COUNT: usize = 5;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let p = app.palette();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Balance cards
            Constraint::Min(10),    // Trend + distribution
            Constraint::Length(8),  // Top categories + recent
            Constraint::Length(1),  // Hints
        ])
        .split(area);

    render_balance(f, chunks[0], app, &p);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    render_trend(f, middle[0], app, &p);
    let expenses = filter_kind(&app.transactions, TransactionKind::Expense);
    let shares = distribution(&sum_by_key(&expenses, by_category));
    render_distribution(
        f,
        middle[1],
        &p,
        app.currency(),
        "Expense Distribution",
        &shares,
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);
    render_top_categories(f, bottom[0], app, &p);
    render_recent(f, bottom[1], app, &p);

    let hints = Paragraph::new(Line::from(Span::styled(
        " 2 Expense · 3 Income · 4 Category · 5 Settings · : commands",
        p.dim_style(),
    )));
    f.render_widget(hints, chunks[3]);
}

fn render_balance(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let overview = balance_overview(&app.transactions);
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let month = Some(overview.month.clone());
    render_card(
        f,
        cards[0],
        p,
        "Balance",
        format_amount(overview.net, app.currency()),
        if overview.net >= 0.0 { p.green } else { p.red },
        month.clone(),
    );
    render_card(
        f,
        cards[1],
        p,
        "Income",
        format_amount(overview.income, app.currency()),
        p.green,
        month.clone(),
    );
    render_card(
        f,
        cards[2],
        p,
        "Expenses",
        format_amount(overview.expenses, app.currency()),
        p.red,
        month,
    );
}

fn render_trend(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let title = "Income vs Expenses";
    let trend = monthly_trend(&app.transactions, TREND_MONTHS);
    if trend.is_empty() {
        render_empty(f, area, p, title, "No transactions yet");
        return;
    }

    let currency = app.currency();
    let groups: Vec<Vec<Bar>> = trend
        .iter()
        .map(|point| {
            vec![
                Bar::default()
                    .value(bar_value(point.income, currency))
                    .text_value(format_compact(point.income, currency))
                    .style(Style::default().fg(p.green)),
                Bar::default()
                    .value(bar_value(point.expenses, currency))
                    .text_value(format_compact(point.expenses, currency))
                    .style(Style::default().fg(p.red)),
            ]
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let per_group = inner_width / (trend.len() as u16).max(1);
    let bar_width = (per_group.saturating_sub(3) / 2).clamp(2, 8);

    let mut chart = BarChart::default()
        .block(panel(p, title))
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(2)
        .value_style(
            Style::default()
                .fg(p.header_fg)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(p.dim_style());
    for (point, bars) in trend.iter().zip(&groups) {
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(point.label.clone()))
                .bars(bars),
        );
    }

    f.render_widget(chart, area);
}

fn render_top_categories(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let title = "Top Categories";
    let top = top_categories(&app.transactions, TOP_CATEGORIES);
    if top.is_empty() {
        render_empty(f, area, p, title, "No expenses this month");
        return;
    }

    let block = panel(p, title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); top.len()])
        .split(inner);

    for (i, (share, row)) in top.iter().zip(rows.iter()).enumerate() {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(p.series(i)).bg(p.surface))
            .ratio((share.percentage / 100.0).clamp(0.0, 1.0))
            .label(format!(
                "{} {:.0}% {}",
                truncate(&share.key, 14),
                share.percentage,
                format_amount(share.total, app.currency())
            ));
        f.render_widget(gauge, *row);
    }
}

fn render_recent(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let title = "Recent Transactions";
    let latest = recent(&app.transactions, RECENT_COUNT);
    if latest.is_empty() {
        render_empty(f, area, p, title, "No transactions yet");
        return;
    }

    let lines: Vec<Line> = latest
        .iter()
        .map(|txn| {
            let (sign, style) = if txn.is_income() {
                ("+", p.income_style())
            } else {
                ("", p.expense_style())
            };
            Line::from(vec![
                Span::styled(format!(" {} ", txn.date.format("%b %d")), p.dim_style()),
                Span::styled(format!("{:<28}", truncate(&txn.description, 28)), p.normal_style()),
                Span::styled(
                    format!("{sign}{}", format_amount(txn.signed_amount(), app.currency())),
                    style,
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(panel(p, title)), area);
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Cell, Row, Table},
    Frame,
};

use crate::aggregate::{by_category, distribution, sum_by_key};
use crate::models::Transaction;
use crate::ui::app::App;
use crate::ui::theme::Palette;
use crate::ui::util::{format_amount, truncate};

use super::widgets::{panel, render_empty};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let p = app.palette();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_groups(
        f,
        cols[0],
        app,
        &p,
        "Expense Categories",
        "Category",
        &app.expense_pane.records,
    );
    render_groups(
        f,
        cols[1],
        app,
        &p,
        "Income Sources",
        "Source",
        &app.income_pane.records,
    );
}

fn render_groups(
    f: &mut Frame,
    area: Rect,
    app: &App,
    p: &Palette,
    title: &str,
    group_label: &str,
    records: &[Transaction],
) {
    let totals = sum_by_key(records, by_category);
    if totals.is_empty() {
        render_empty(f, area, p, title, "Nothing recorded yet");
        return;
    }

    let header = Row::new(
        [group_label, "Count", "Total", "Share"]
            .iter()
            .map(|h| Cell::from(h.to_string()).style(p.header_style())),
    );

    let rows: Vec<Row> = distribution(&totals)
        .iter()
        .enumerate()
        .map(|(i, share)| {
            let count = records.iter().filter(|t| t.label() == share.key).count();
            let style = if i % 2 == 1 {
                p.alt_row_style()
            } else {
                p.normal_style()
            };
            Row::new(vec![
                Cell::from(Span::styled(
                    format!("■ {}", truncate(&share.key, 18)),
                    Style::default().fg(p.series(i)),
                )),
                Cell::from(count.to_string()),
                Cell::from(format_amount(share.total, app.currency())),
                Cell::from(format!("{:.1}%", share.percentage)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(14),
        Constraint::Length(6),
        Constraint::Length(14),
        Constraint::Length(7),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(panel(p, &format!("{title} ({})", totals.len())));
    f.render_widget(table, area);
}

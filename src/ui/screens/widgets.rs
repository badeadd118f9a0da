//! Building blocks shared by the screens: panels, cards, the sortable table,
//! distribution lists and bar series.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::aggregate::{CategoryShare, KeyTotal};
use crate::config::Currency;
use crate::table::SortKey;
use crate::ui::app::TablePane;
use crate::ui::theme::Palette;
use crate::ui::util::{bar_value, format_amount, format_compact, truncate};

/// Bordered block with the dim bold title every screen uses.
pub(crate) fn panel<'a>(p: &Palette, title: &str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(p.border_style())
        .title(Span::styled(format!(" {title} "), p.title_style()))
}

pub(crate) fn render_empty(f: &mut Frame, area: Rect, p: &Palette, title: &str, msg: &str) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(msg.to_string(), p.dim_style())),
    ])
    .centered()
    .block(panel(p, title));
    f.render_widget(text, area);
}

pub(crate) fn render_card(
    f: &mut Frame,
    area: Rect,
    p: &Palette,
    title: &str,
    value: String,
    color: Color,
    subtitle: Option<String>,
) {
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle.unwrap_or_default(), p.dim_style())),
    ])
    .centered()
    .block(panel(p, title));

    f.render_widget(text, area);
}

/// Rows the table body can show inside `area` (borders and header excluded).
pub(crate) fn table_page(area: Rect) -> usize {
    area.height.saturating_sub(3).max(1) as usize
}

fn header_label(key: SortKey, group_label: &'static str) -> &'static str {
    match key {
        SortKey::Date => "Date",
        SortKey::Description => "Title",
        SortKey::Amount => "Amount",
        SortKey::Category => group_label,
    }
}

/// The sortable transaction table of a pane. `group_label` names the
/// label column ("Category" or "Source").
pub(crate) fn render_pane_table(
    f: &mut Frame,
    area: Rect,
    p: &Palette,
    currency: &Currency,
    pane: &TablePane,
    title: &str,
    group_label: &'static str,
) {
    let footer = format!(
        " Showing {} of {} records ",
        pane.rows.len(),
        pane.records.len()
    );

    let mut heading = format!("{title} ({})", pane.rows.len());
    if pane.state.category_filter != crate::table::ALL {
        heading.push_str(&format!(" [{}]", pane.state.category_filter));
    }
    if !pane.state.search_text.is_empty() {
        heading.push_str(&format!(" search: '{}'", pane.state.search_text));
    }

    let block = panel(p, &heading).title_bottom(Span::styled(footer, p.dim_style()));

    if pane.rows.is_empty() {
        let msg = if pane.state.is_filtered() {
            "No records match. Press x to clear filters"
        } else {
            "No records"
        };
        let text = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(msg, p.dim_style())),
        ])
        .centered()
        .block(block);
        f.render_widget(text, area);
        return;
    }

    let header_cells = SortKey::all().iter().map(|key| {
        let label = header_label(*key, group_label);
        let text = if *key == pane.state.sort_key {
            format!("{label} {}", pane.state.sort_order.arrow())
        } else {
            label.to_string()
        };
        Cell::from(text).style(p.header_style())
    });
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = pane
        .rows
        .iter()
        .enumerate()
        .skip(pane.scroll)
        .take(table_page(area))
        .map(|(i, txn)| {
            let style = if i == pane.index {
                p.selected_style()
            } else if i % 2 == 1 {
                p.alt_row_style()
            } else {
                p.normal_style()
            };
            let amount_style = if txn.is_income() {
                p.income_style()
            } else {
                p.expense_style()
            };
            let label = if txn.label().is_empty() { "—" } else { txn.label() };

            Row::new(vec![
                Cell::from(txn.date.format("%Y-%m-%d").to_string()),
                Cell::from(truncate(&txn.description, 36)),
                Cell::from(Span::styled(format_amount(txn.amount, currency), amount_style)),
                Cell::from(label.to_string()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Min(16),
        Constraint::Length(14),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

/// One line per group with a proportional bar and its percentage.
pub(crate) fn render_distribution(
    f: &mut Frame,
    area: Rect,
    p: &Palette,
    currency: &Currency,
    title: &str,
    shares: &[CategoryShare],
) {
    if shares.is_empty() {
        render_empty(f, area, p, title, "Nothing to show");
        return;
    }

    let bar_room = area.width.saturating_sub(40).max(4) as f64;
    let lines: Vec<Line> = shares
        .iter()
        .enumerate()
        .map(|(i, share)| {
            let filled = ((share.percentage / 100.0) * bar_room).round().max(1.0) as usize;
            Line::from(vec![
                Span::styled(
                    format!(" {:<14}", truncate(&share.key, 14)),
                    p.normal_style(),
                ),
                Span::styled("█".repeat(filled), Style::default().fg(p.series(i))),
                Span::styled(
                    format!(" {:>5.1}% ", share.percentage),
                    p.dim_style(),
                ),
                Span::styled(format_amount(share.total, currency), p.dim_style()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(panel(p, title)), area);
}

/// Single-colour bar chart of a windowed series.
pub(crate) fn render_series(
    f: &mut Frame,
    area: Rect,
    p: &Palette,
    currency: &Currency,
    title: &str,
    series: &[KeyTotal],
    color: Color,
) {
    if series.is_empty() {
        render_empty(f, area, p, title, "No data");
        return;
    }

    let bars: Vec<Bar> = series
        .iter()
        .map(|point| {
            Bar::default()
                .value(bar_value(point.total, currency))
                .text_value(format_compact(point.total, currency))
                .label(Line::from(point.key.clone()))
                .style(Style::default().fg(color))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let count = series.len() as u16;
    let bar_width = (inner_width / count.max(1)).saturating_sub(1).clamp(3, 12);

    let chart = BarChart::default()
        .block(panel(p, title))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .value_style(Style::default().fg(p.header_fg).bg(color))
        .label_style(p.dim_style());

    f.render_widget(chart, area);
}

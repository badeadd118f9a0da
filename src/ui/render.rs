use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, InputMode, View};
use super::commands;
use super::theme::Palette;

const SIDEBAR_WIDTH: u16 = 24;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let p = app.palette();
    f.render_widget(Block::default().style(p.base_style()), f.area());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Sidebar + content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(rows[0]);

    render_sidebar(f, cols[0], app, &p);
    render_view(f, cols[1], app);
    render_status_bar(f, rows[1], app, &p);
    render_command_bar(f, rows[2], app, &p);

    if app.show_help {
        render_help_overlay(f, f.area(), &p);
    }
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let mut lines = vec![
        Line::from(Span::styled(
            " finboard",
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(" Personal finance", p.dim_style())),
        Line::from(""),
    ];

    for (i, view) in View::all().iter().enumerate() {
        let text = format!(" {} {:<18}", i + 1, view.label());
        if *view == app.view {
            lines.push(Line::from(Span::styled(
                text,
                p.selected_style().add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(Span::styled(text, p.normal_style())));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" Theme ", p.dim_style()),
        Span::styled(
            format!("[{}]", app.theme),
            Style::default().fg(p.yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" t", p.dim_style()),
    ]));
    lines.push(Line::from(Span::styled(" Exit   Ctrl-q", p.dim_style())));

    let sidebar = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(p.border_style())
            .style(Style::default().bg(p.header_bg).fg(p.header_fg)),
    );
    f.render_widget(sidebar, area);
}

fn render_view(f: &mut Frame, area: Rect, app: &App) {
    match app.view {
        View::Home => super::screens::home::render(f, area, app),
        View::Expense => super::screens::expense::render(f, area, app),
        View::Income => super::screens::income::render(f, area, app),
        View::Category => super::screens::category::render(f, area, app),
        View::Settings => super::screens::settings::render(f, area, app),
        View::ChatWithAi => super::screens::render_placeholder(f, area, app, app.view.label()),
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_bg = match app.input_mode {
        InputMode::Normal => p.accent,
        InputMode::Command => p.green,
        InputMode::Search => p.yellow,
    };
    let mode_style = Style::default()
        .fg(p.header_bg)
        .bg(mode_bg)
        .add_modifier(Modifier::BOLD);

    let info = format!(" {} | {} txns", app.view, app.transactions.len());

    let right = match app.view {
        View::Expense | View::Income => " /search | s sort | o order | f filter | ? help ",
        _ => " 1-6 views | t theme | : command | ? help ",
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.len() + right.chars().count();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, p.status_bar_style()),
        Span::styled(" ".repeat(pad), p.status_bar_style()),
        Span::styled(right, p.status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let search_text = app
        .active_pane()
        .map(|pane| pane.state.search_text.as_str())
        .unwrap_or("");

    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(p.accent)),
                Span::styled(&app.command_input, p.command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Search => {
            let match_info = match app.active_pane() {
                Some(pane) if !search_text.is_empty() => {
                    format!("  ({} matches)", pane.rows.len())
                }
                _ => String::new(),
            };
            (
                Line::from(vec![
                    Span::styled("/", Style::default().fg(p.yellow)),
                    Span::styled(search_text, p.command_bar_style()),
                    Span::styled(match_info, p.dim_style()),
                ]),
                Some(1 + search_text.chars().count() as u16),
            )
        }
        InputMode::Normal => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press : for commands, / to search, ? for help",
                    p.dim_style(),
                ))
            } else {
                Line::from(Span::styled(&app.status_message, p.command_bar_style()))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(p.command_bg));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect, p: &Palette) {
    let heading = |s: &'static str| {
        Line::from(Span::styled(
            s,
            Style::default().fg(p.yellow).add_modifier(Modifier::BOLD),
        ))
    };
    let row = |s: &'static str| Line::from(Span::styled(s, p.normal_style()));

    let mut help_text = vec![
        Line::from(Span::styled(
            " finboard Help ",
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading(" Navigation"),
        row("  1-6             Switch views           Tab/Shift-Tab  Cycle views"),
        row("  j/k or Up/Down  Move cursor            g/G            Top/Bottom"),
        row("  t               Toggle theme           Ctrl-q         Quit"),
        Line::from(""),
        heading(" Tables (Expense, Income)"),
        row("  /               Search (live)          Esc            Clear search"),
        row("  s               Next sort column       o              Flip sort order"),
        row("  f/F             Next/prev filter       x              Clear filters"),
        Line::from(""),
        heading(" Commands"),
    ];

    // Build command list dynamically from COMMANDS registry
    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 2 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<14} {desc}"),
            p.normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        p.dim_style(),
    )));

    // Center the popup, clamped to terminal height
    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.accent))
            .style(Style::default().bg(p.base)),
    );
    f.render_widget(help, popup_area);
}

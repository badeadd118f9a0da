use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{error, info};

use crate::table::SortKey;
use crate::ui::app::{App, InputMode, View};
use crate::ui::commands;

pub(crate) fn as_tui(app: &mut App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("tui started");

    let result = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        error!(error = ?e, "tui exited with error");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // status + command bars, summary cards, table borders and header
            let content_height = f.area().height.saturating_sub(9) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app),
                InputMode::Command => handle_command_input(key, app),
                InputMode::Search => handle_search_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let page = app.visible_rows;

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => {
            app.running = false;
        }
        KeyCode::Char('d') if ctrl => {
            if let Some(pane) = app.active_pane_mut() {
                for _ in 0..page / 2 {
                    pane.move_down(page);
                }
            }
        }
        KeyCode::Char('u') if ctrl => {
            if let Some(pane) = app.active_pane_mut() {
                for _ in 0..page / 2 {
                    pane.move_up();
                }
            }
        }
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('/') => {
            if app.active_pane().is_some() {
                app.input_mode = InputMode::Search;
            } else {
                app.set_status("Search works on the Expense and Income views");
            }
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char(c @ '1'..='6') => {
            let idx = c as usize - '1' as usize;
            if let Some(view) = View::all().get(idx) {
                app.set_view(*view);
            }
        }
        KeyCode::Tab => app.cycle_view(true),
        KeyCode::BackTab => app.cycle_view(false),
        KeyCode::Char('j') | KeyCode::Down => {
            if let Some(pane) = app.active_pane_mut() {
                pane.move_down(page);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if let Some(pane) = app.active_pane_mut() {
                pane.move_up();
            }
        }
        KeyCode::Char('g') | KeyCode::Home => {
            if let Some(pane) = app.active_pane_mut() {
                pane.goto_top();
            }
        }
        KeyCode::Char('G') | KeyCode::End => {
            if let Some(pane) = app.active_pane_mut() {
                pane.goto_bottom(page);
            }
        }
        KeyCode::Char('s') => {
            if let Some(pane) = app.active_pane_mut() {
                let next = pane.state.sort_key.next();
                pane.click_header(next);
                let msg = format!("Sorted by {next:?} {}", pane.state.sort_order.arrow());
                app.set_status(msg);
            }
        }
        KeyCode::Char('o') => {
            if let Some(pane) = app.active_pane_mut() {
                let key: SortKey = pane.state.sort_key;
                pane.click_header(key);
                let msg = format!("Sorted by {key:?} {}", pane.state.sort_order.arrow());
                app.set_status(msg);
            }
        }
        KeyCode::Char('f') | KeyCode::Char('F') => {
            let forward = key.code == KeyCode::Char('f');
            if let Some(pane) = app.active_pane_mut() {
                pane.cycle_filter(forward);
                let msg = format!("Filter: {}", pane.state.category_filter);
                app.set_status(msg);
            }
        }
        KeyCode::Char('x') | KeyCode::Esc => {
            if let Some(pane) = app.active_pane_mut() {
                if pane.state.is_filtered() {
                    pane.clear_filters();
                    app.set_status("Filters cleared");
                }
            }
        }
        _ => {}
    }
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            if let Err(e) = commands::handle_command(&input, app) {
                error!(command = %input, error = %e, "command failed");
                app.set_status(format!("Error: {e}"));
            }
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let trimmed = app.command_input.trim_end();
            if let Some(pos) = trimmed.rfind(' ') {
                app.command_input.truncate(pos + 1);
            } else {
                app.command_input.clear();
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
}

/// Live search: every keystroke re-projects the active table.
fn handle_search_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            if let Some(pane) = app.active_pane_mut() {
                pane.set_search("");
            }
        }
        KeyCode::Backspace => {
            if let Some(pane) = app.active_pane_mut() {
                let mut text = pane.state.search_text.clone();
                text.pop();
                pane.set_search(&text);
            }
        }
        KeyCode::Char(c) => {
            if let Some(pane) = app.active_pane_mut() {
                let mut text = pane.state.search_text.clone();
                text.push(c);
                pane.set_search(&text);
            }
        }
        _ => {}
    }
}

use std::path::PathBuf;
use tracing::{info, warn};

use crate::aggregate::filter_kind;
use crate::config::{Config, Currency};
use crate::models::{Transaction, TransactionKind};
use crate::table::{filter_options, project, SortKey, TableViewState};
use crate::ui::theme::{Palette, ThemeMode};
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum View {
    Home,
    Expense,
    Income,
    Category,
    Settings,
    ChatWithAi,
}

impl View {
    pub(crate) fn all() -> &'static [View] {
        &[
            Self::Home,
            Self::Expense,
            Self::Income,
            Self::Category,
            Self::Settings,
            Self::ChatWithAi,
        ]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Expense => "Expense",
            Self::Income => "Income",
            Self::Category => "Category",
            Self::Settings => "Settings",
            Self::ChatWithAi => "Chat with AI",
        }
    }

    /// Case-insensitive; `None` for a label that names no view.
    pub(crate) fn from_label(label: &str) -> Option<View> {
        let lower = label.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|v| v.label().to_lowercase() == lower)
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
        }
    }
}

/// One sortable, filterable table together with the records it shows and
/// its cursor.
pub(crate) struct TablePane {
    pub(crate) records: Vec<Transaction>,
    pub(crate) state: TableViewState,
    pub(crate) rows: Vec<Transaction>,
    pub(crate) options: Vec<String>,
    pub(crate) index: usize,
    pub(crate) scroll: usize,
}

impl TablePane {
    pub(crate) fn new(records: Vec<Transaction>) -> Self {
        let mut pane = Self {
            options: filter_options(&records),
            records,
            state: TableViewState::default(),
            rows: Vec::new(),
            index: 0,
            scroll: 0,
        };
        pane.refresh();
        pane
    }

    /// Re-derive the visible rows after any state change.
    pub(crate) fn refresh(&mut self) {
        self.rows = project(&self.records, &self.state);
        if self.index >= self.rows.len() {
            self.index = self.rows.len().saturating_sub(1);
        }
        if self.scroll > self.index {
            self.scroll = self.index;
        }
    }

    pub(crate) fn click_header(&mut self, key: SortKey) {
        self.state.click_header(key);
        self.refresh();
    }

    pub(crate) fn cycle_filter(&mut self, forward: bool) {
        self.state.cycle_filter(&self.options, forward);
        self.reset_cursor();
    }

    pub(crate) fn set_search(&mut self, text: &str) {
        self.state.search_text = text.to_string();
        self.reset_cursor();
    }

    /// Back to all records, keeping the sort.
    pub(crate) fn clear_filters(&mut self) {
        self.state.category_filter = crate::table::ALL.to_string();
        self.state.search_text.clear();
        self.reset_cursor();
    }

    fn reset_cursor(&mut self) {
        self.index = 0;
        self.scroll = 0;
        self.refresh();
    }

    pub(crate) fn move_down(&mut self, page: usize) {
        scroll_down(&mut self.index, &mut self.scroll, self.rows.len(), page);
    }

    pub(crate) fn move_up(&mut self) {
        scroll_up(&mut self.index, &mut self.scroll);
    }

    pub(crate) fn goto_top(&mut self) {
        scroll_to_top(&mut self.index, &mut self.scroll);
    }

    pub(crate) fn goto_bottom(&mut self, page: usize) {
        scroll_to_bottom(&mut self.index, &mut self.scroll, self.rows.len(), page);
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) view: View,
    pub(crate) theme: ThemeMode,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) transactions: Vec<Transaction>,
    pub(crate) expense_pane: TablePane,
    pub(crate) income_pane: TablePane,

    pub(crate) config: Config,
    pub(crate) config_path: Option<PathBuf>,
    pub(crate) data_source: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(
        transactions: Vec<Transaction>,
        config: Config,
        config_path: Option<PathBuf>,
        data_source: String,
    ) -> Self {
        let expense_pane = TablePane::new(filter_kind(&transactions, TransactionKind::Expense));
        let income_pane = TablePane::new(filter_kind(&transactions, TransactionKind::Income));

        Self {
            running: true,
            view: View::Home,
            theme: config.theme,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            transactions,
            expense_pane,
            income_pane,

            config,
            config_path,
            data_source,

            visible_rows: 20,
        }
    }

    pub(crate) fn palette(&self) -> Palette {
        self.theme.palette()
    }

    pub(crate) fn currency(&self) -> &Currency {
        &self.config.currency
    }

    pub(crate) fn set_view(&mut self, view: View) {
        self.view = view;
        self.status_message.clear();
    }

    pub(crate) fn cycle_view(&mut self, forward: bool) {
        let views = View::all();
        let idx = views.iter().position(|v| *v == self.view).unwrap_or(0);
        let next = if forward {
            (idx + 1) % views.len()
        } else if idx == 0 {
            views.len() - 1
        } else {
            idx - 1
        };
        self.set_view(views[next]);
    }

    /// The table of the current view, if it has one.
    pub(crate) fn active_pane(&self) -> Option<&TablePane> {
        match self.view {
            View::Expense => Some(&self.expense_pane),
            View::Income => Some(&self.income_pane),
            _ => None,
        }
    }

    pub(crate) fn active_pane_mut(&mut self) -> Option<&mut TablePane> {
        match self.view {
            View::Expense => Some(&mut self.expense_pane),
            View::Income => Some(&mut self.income_pane),
            _ => None,
        }
    }

    /// Flip light/dark and remember the choice in the config file.
    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.config.theme = self.theme;
        info!(theme = %self.theme, "theme changed");

        let Some(path) = self.config_path.clone() else {
            self.set_status(format!("Theme: {}", self.theme));
            return;
        };
        match self.config.save_to_path(&path) {
            Ok(()) => self.set_status(format!("Theme: {}", self.theme)),
            Err(e) => {
                warn!(error = %e, "could not save theme");
                self.set_status(format!("Theme: {} (not saved: {e})", self.theme));
            }
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

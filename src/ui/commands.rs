use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;

use super::app::{App, View};
use crate::table::SortKey;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit finboard", cmd_quit, r);
    register_command!("quit", "Quit finboard", cmd_quit, r);
    register_command!("home", "Go to Home", cmd_home, r);
    register_command!("e", "Go to Expense", cmd_expense, r);
    register_command!("expense", "Go to Expense", cmd_expense, r);
    register_command!("i", "Go to Income", cmd_income, r);
    register_command!("income", "Go to Income", cmd_income, r);
    register_command!("c", "Go to Category", cmd_category, r);
    register_command!("category", "Go to Category", cmd_category, r);
    register_command!("settings", "Go to Settings", cmd_settings, r);
    register_command!("chat", "Go to Chat with AI", cmd_chat, r);
    register_command!("view", "Open a view by name (e.g. :view Income)", cmd_view, r);
    register_command!("theme", "Toggle light/dark theme", cmd_theme, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "sort",
        "Sort by column, again to flip (e.g. :sort amount)",
        cmd_sort,
        r
    );
    register_command!(
        "filter",
        "Filter by category or source (e.g. :filter Food)",
        cmd_filter,
        r
    );
    register_command!(
        "search",
        "Search title and category (e.g. :search coffee)",
        cmd_search,
        r
    );
    register_command!("s", "Search title and category (e.g. :s coffee)", cmd_search, r);
    register_command!("clear", "Clear filter and search", cmd_clear, r);
    register_command!(
        "export",
        "Export transactions to CSV (e.g. :export ~/finboard.csv)",
        cmd_export,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_home(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.set_view(View::Home);
    Ok(())
}

fn cmd_expense(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.set_view(View::Expense);
    Ok(())
}

fn cmd_income(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.set_view(View::Income);
    Ok(())
}

fn cmd_category(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.set_view(View::Category);
    Ok(())
}

fn cmd_settings(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.set_view(View::Settings);
    Ok(())
}

fn cmd_chat(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.set_view(View::ChatWithAi);
    Ok(())
}

fn cmd_view(args: &str, app: &mut App) -> anyhow::Result<()> {
    match View::from_label(args) {
        Some(view) => app.set_view(view),
        None => app.set_status(format!("No view named '{args}'")),
    }
    Ok(())
}

fn cmd_theme(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.toggle_theme();
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_sort(args: &str, app: &mut App) -> anyhow::Result<()> {
    let Some(key) = SortKey::parse(args) else {
        app.set_status("Usage: :sort date|title|amount|category");
        return Ok(());
    };
    let Some(pane) = app.active_pane_mut() else {
        app.set_status("Sorting is available on the Expense and Income views");
        return Ok(());
    };
    pane.click_header(key);
    let msg = format!("Sorted by {key:?} {}", pane.state.sort_order.arrow());
    app.set_status(msg);
    Ok(())
}

fn cmd_filter(args: &str, app: &mut App) -> anyhow::Result<()> {
    let Some(pane) = app.active_pane_mut() else {
        app.set_status("Filtering is available on the Expense and Income views");
        return Ok(());
    };
    let wanted = if args.is_empty() { crate::table::ALL } else { args };
    if !pane.options.iter().any(|o| o == wanted) {
        let known = pane.options.join(", ");
        app.set_status(format!("Unknown filter '{wanted}'. Options: {known}"));
        return Ok(());
    }
    pane.state.category_filter = wanted.to_string();
    pane.index = 0;
    pane.scroll = 0;
    pane.refresh();
    let msg = format!("Filter: {wanted} ({} rows)", pane.rows.len());
    app.set_status(msg);
    Ok(())
}

fn cmd_search(args: &str, app: &mut App) -> anyhow::Result<()> {
    let Some(pane) = app.active_pane_mut() else {
        app.set_status("Search is available on the Expense and Income views");
        return Ok(());
    };
    pane.set_search(args);
    let msg = format!("{} matches", pane.rows.len());
    app.set_status(msg);
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App) -> anyhow::Result<()> {
    if let Some(pane) = app.active_pane_mut() {
        pane.clear_filters();
    }
    app.set_status("Filters cleared");
    Ok(())
}

fn cmd_export(args: &str, app: &mut App) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        PathBuf::from(format!("{home}/finboard-export.csv"))
    } else {
        PathBuf::from(crate::run::shellexpand(args))
    };

    let count = crate::store::export_csv(&app.transactions, &path)?;
    if count == 0 {
        app.set_status("No transactions to export");
    } else {
        app.set_status(format!("Exported {count} transactions to {}", path.display()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::config::Config;
    use crate::store::{SampleRepository, TransactionRepository};
    use crate::table::SortOrder;

    fn app() -> App {
        let txns = SampleRepository.list_transactions().unwrap();
        App::new(txns, Config::default(), None, "test".into())
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("theme", "theme"), 0);
        assert_eq!(levenshtein("them", "theme"), 1);
        assert_eq!(levenshtein("", "abc"), 3);
    }

    #[test]
    fn test_unknown_command_suggests() {
        let mut app = app();
        handle_command("expens", &mut app).unwrap();
        assert!(app.status_message.contains(":expense"));
    }

    #[test]
    fn test_navigation_commands() {
        let mut app = app();
        handle_command("income", &mut app).unwrap();
        assert_eq!(app.view, View::Income);
        handle_command("view chat with ai", &mut app).unwrap();
        assert_eq!(app.view, View::ChatWithAi);
        handle_command("view Budget", &mut app).unwrap();
        assert_eq!(app.view, View::ChatWithAi);
        assert!(app.status_message.contains("No view"));
    }

    #[test]
    fn test_sort_command_follows_header_clicks() {
        let mut app = app();
        handle_command("e", &mut app).unwrap();
        handle_command("sort amount", &mut app).unwrap();
        assert_eq!(app.expense_pane.state.sort_key, SortKey::Amount);
        assert_eq!(app.expense_pane.state.sort_order, SortOrder::Ascending);
        handle_command("sort amount", &mut app).unwrap();
        assert_eq!(app.expense_pane.state.sort_order, SortOrder::Descending);
        let amounts: Vec<f64> = app.expense_pane.rows.iter().map(|t| t.amount).collect();
        assert!(amounts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_sort_outside_table_view() {
        let mut app = app();
        handle_command("sort amount", &mut app).unwrap();
        assert!(app.status_message.contains("Expense and Income"));
    }

    #[test]
    fn test_filter_and_clear() {
        let mut app = app();
        handle_command("expense", &mut app).unwrap();
        handle_command("filter Food", &mut app).unwrap();
        assert!(!app.expense_pane.rows.is_empty());
        assert!(app.expense_pane.rows.iter().all(|t| t.label() == "Food"));

        handle_command("filter Nope", &mut app).unwrap();
        assert_eq!(app.expense_pane.state.category_filter, "Food");

        handle_command("clear", &mut app).unwrap();
        assert_eq!(app.expense_pane.rows.len(), app.expense_pane.records.len());
    }

    #[test]
    fn test_search_command() {
        let mut app = app();
        handle_command("income", &mut app).unwrap();
        handle_command("search salary", &mut app).unwrap();
        assert!(!app.income_pane.rows.is_empty());
        assert!(app
            .income_pane
            .rows
            .iter()
            .all(|t| t.description.to_lowercase().contains("salary")
                || t.label().to_lowercase().contains("salary")));
        // The other table is untouched
        assert!(app.expense_pane.state.search_text.is_empty());
    }

    #[test]
    fn test_export_command() {
        let mut app = app();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        handle_command(&format!("export {}", path.display()), &mut app).unwrap();
        assert!(path.exists());
        assert!(app.status_message.starts_with("Exported"));
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        handle_command("q", &mut app).unwrap();
        assert!(!app.running);
    }
}

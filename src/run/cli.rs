use anyhow::Result;
use std::path::PathBuf;

use crate::aggregate::{
    balance_overview, by_category, by_month, by_weekday, filter_kind, sum_by_key, summarize,
    top_categories, KeyTotals,
};
use crate::config::Currency;
use crate::models::{Transaction, TransactionKind};
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], transactions: &[Transaction], currency: &Currency) -> Result<()> {
    match args[0].as_str() {
        "summary" | "s" => {
            for line in summary_lines(transactions, currency) {
                println!("{line}");
            }
            Ok(())
        }
        "export" => cli_export(&args[1..], transactions),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("finboard {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("finboard - personal finance dashboard");
    println!();
    println!("Usage: finboard [--data <file.csv>] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary                       Print balance, spending and income summary");
    println!("  export [path]                 Export transactions to CSV");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Options:");
    println!("  --data <file.csv>             Read transactions from a CSV file");
    println!("                                (columns: kind,date,description,amount,category)");
    println!("                                amount: '.' for decimals, ',' only between");
    println!("                                thousands (1,234.50); '12,50' is rejected");
}

fn cli_export(args: &[String], transactions: &[Transaction]) -> Result<()> {
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| shellexpand(a))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            format!("{home}/finboard-export.csv")
        });

    let count = crate::store::export_csv(transactions, &PathBuf::from(&output_path))?;
    if count == 0 {
        println!("No transactions to export");
    } else {
        println!("Exported {count} transactions to {output_path}");
    }
    Ok(())
}

fn summary_lines(transactions: &[Transaction], currency: &Currency) -> Vec<String> {
    let money = |v: f64| format_amount(v, currency);
    let overview = balance_overview(transactions);
    let expenses = filter_kind(transactions, TransactionKind::Expense);
    let income = filter_kind(transactions, TransactionKind::Income);
    let spent = summarize(&expenses, by_category);
    let earned = summarize(&income, by_category);

    let mut lines = vec![
        format!("finboard - {}", overview.month),
        "─".repeat(40),
        format!("  Income:     {}", money(overview.income)),
        format!("  Expenses:   {}", money(overview.expenses)),
        format!("  Net:        {}", money(overview.net)),
        String::new(),
        "All time:".to_string(),
        format!("  Spent:      {} in {} txns", money(spent.total), spent.count),
        format!("  Avg spend:  {}", money(spent.average)),
        format!("  Top cat.:   {}", spent.top_key),
        format!("  Earned:     {} in {} txns", money(earned.total), earned.count),
        format!("  Top source: {}", earned.top_key),
    ];

    let top = top_categories(transactions, 4);
    if !top.is_empty() {
        lines.push(String::new());
        lines.push(format!("Top categories ({}):", overview.month));
        for share in &top {
            lines.push(format!(
                "  {:<24} {:>14} {:>5.1}%",
                share.key,
                money(share.total),
                share.percentage
            ));
        }
    }

    let by_cat = sum_by_key(&expenses, by_category);
    push_groups(&mut lines, "Spending by Category:", &by_cat, true, &money);
    push_groups(&mut lines, "Spending by Month:", &sum_by_key(&expenses, by_month), false, &money);
    push_groups(
        &mut lines,
        "Spending by Weekday:",
        &sum_by_key(&expenses, by_weekday),
        true,
        &money,
    );

    lines
}

/// Append a titled block of group totals, biggest first when `ranked`,
/// otherwise in first-seen order. Nothing is appended for no groups.
fn push_groups(
    lines: &mut Vec<String>,
    title: &str,
    totals: &KeyTotals,
    ranked: bool,
    money: &dyn Fn(f64) -> String,
) {
    if totals.is_empty() {
        return;
    }
    let groups = if ranked {
        totals.sorted_desc()
    } else {
        totals.iter().cloned().collect()
    };
    lines.push(String::new());
    lines.push(title.to_string());
    for group in &groups {
        lines.push(format!("  {:<24} {:>14}", group.key, money(group.total)));
    }
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::store::{SampleRepository, TransactionRepository};

    #[test]
    fn test_summary_lines_for_sample() {
        let txns = SampleRepository.list_transactions().unwrap();
        let lines = summary_lines(&txns, &Currency::default());
        assert_eq!(lines[0], "finboard - Sep 25");
        assert!(lines.iter().any(|l| l.starts_with("Spending by Category:")));
        assert!(lines.iter().any(|l| l.contains("Top categories (Sep 25):")));
        assert!(lines.iter().any(|l| l.starts_with("Spending by Month:")));
        assert!(lines.iter().any(|l| l.starts_with("Spending by Weekday:")));
    }

    #[test]
    fn test_summary_lines_empty() {
        let lines = summary_lines(&[], &Currency::default());
        assert_eq!(lines[0], "finboard - N/A");
        assert!(lines.iter().any(|l| l.contains("Avg spend:  —")));
        assert!(lines.iter().any(|l| l.contains("Top cat.:   N/A")));
        assert!(!lines.iter().any(|l| l.starts_with("Spending by Category:")));
    }

    #[test]
    fn test_shellexpand() {
        assert_eq!(shellexpand("/tmp/x.csv"), "/tmp/x.csv");
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        assert_eq!(shellexpand("~/x.csv"), format!("{home}/x.csv"));
    }
}

#![allow(clippy::unwrap_used)]

use super::*;

fn at(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

fn expense(date: &str, title: &str, amount: f64, category: &str) -> Transaction {
    Transaction::expense(at(date), title, amount, category)
}

fn income(date: &str, title: &str, amount: f64, source: &str) -> Transaction {
    Transaction::income(at(date), title, amount, source)
}

fn food_and_transport() -> Vec<Transaction> {
    vec![
        expense("2025-02-01T12:30:00Z", "Lunch", 50_000.0, "Food"),
        expense("2025-02-10T16:40:00Z", "Snack", 30_000.0, "Food"),
        expense("2025-02-02T09:15:00Z", "Grab Transport", 35_000.0, "Transportation"),
    ]
}

fn dashboard() -> Vec<Transaction> {
    vec![
        expense("2025-09-01T12:30:00Z", "Lunch", 75_000.0, "Food"),
        expense("2025-09-02T09:15:00Z", "Train Ticket", 150_000.0, "Transportation"),
        expense("2025-08-28T18:45:00Z", "Movie Night", 250_000.0, "Entertainment"),
        expense("2025-08-15T20:00:00Z", "Internet Bill", 350_000.0, "Bills"),
        expense("2025-07-30T07:20:00Z", "Groceries", 600_000.0, "Food"),
        expense("2025-05-11T08:50:00Z", "Doctor Visit", 450_000.0, "Health"),
        income("2025-09-01T09:00:00Z", "Monthly Salary", 8_500_000.0, "Salary"),
        income("2025-08-25T14:00:00Z", "Freelance Project", 4_500_000.0, "Freelance"),
        income("2025-08-01T09:00:00Z", "Monthly Salary", 8_000_000.0, "Salary"),
        income("2025-04-01T09:00:00Z", "Monthly Salary", 7_500_000.0, "Salary"),
        income("2025-01-01T09:00:00Z", "Monthly Salary", 7_000_000.0, "Salary"),
    ]
}

// ── sum_by_key / top_key ──────────────────────────────────────

#[test]
fn test_sum_by_category() {
    let totals = sum_by_key(&food_and_transport(), by_category);
    assert_eq!(totals.len(), 2);
    assert_eq!(totals.get("Food"), Some(80_000.0));
    assert_eq!(totals.get("Transportation"), Some(35_000.0));
    assert_eq!(top_key(&totals), "Food");
}

#[test]
fn test_sum_excludes_missing_category() {
    let mut records = food_and_transport();
    records.push(expense("2025-02-11T08:00:00Z", "Parking", 5_000.0, ""));

    let totals = sum_by_key(&records, by_category);
    assert_eq!(totals.len(), 2);
    let keyed: f64 = records
        .iter()
        .filter(|t| t.category.is_some())
        .map(|t| t.amount)
        .sum();
    assert_eq!(totals.sum(), keyed);
}

#[test]
fn test_sum_excludes_empty_key_from_key_fn() {
    let totals = sum_by_key(&food_and_transport(), |t| {
        Some(if t.amount > 40_000.0 { "big".into() } else { String::new() })
    });
    assert_eq!(totals.len(), 1);
    assert_eq!(totals.get("big"), Some(50_000.0));
}

#[test]
fn test_sum_keeps_first_seen_order() {
    let totals = sum_by_key(&food_and_transport(), by_category);
    let keys: Vec<&str> = totals.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["Food", "Transportation"]);
}

#[test]
fn test_sum_by_month_and_weekday() {
    let by_m = sum_by_key(&dashboard(), by_month);
    assert_eq!(by_m.get("Sep 25"), Some(75_000.0 + 150_000.0 + 8_500_000.0));

    // 2025-02-01 was a Saturday
    let by_d = sum_by_key(&food_and_transport(), by_weekday);
    assert_eq!(by_d.get("Sat"), Some(50_000.0));
    assert_eq!(by_d.get("Sun"), Some(35_000.0));
    assert_eq!(by_d.get("Mon"), Some(30_000.0));
}

#[test]
fn test_top_key_tie_goes_to_first_seen() {
    let records = vec![
        expense("2025-02-01T12:00:00Z", "A", 10.0, "Bills"),
        expense("2025-02-02T12:00:00Z", "B", 10.0, "Food"),
    ];
    let totals = sum_by_key(&records, by_category);
    assert_eq!(top_key(&totals), "Bills");
    assert_eq!(top_key(&totals), top_key(&totals));
}

#[test]
fn test_top_key_empty() {
    assert_eq!(top_key(&KeyTotals::default()), NO_KEY);
    assert_eq!(top_key(&sum_by_key(&[], by_category)), "N/A");
}

#[test]
fn test_sorted_desc() {
    let totals = sum_by_key(&dashboard(), by_category);
    let sorted = totals.sorted_desc();
    assert_eq!(sorted[0].key, "Salary");
    assert!(sorted.windows(2).all(|w| w[0].total >= w[1].total));
}

// ── windowed_series ───────────────────────────────────────────

#[test]
fn test_weekly_window_fills_and_excludes() {
    let records = vec![
        expense("2025-02-10T16:40:00Z", "Snack", 30_000.0, "Food"),
        expense("2025-02-09T08:50:00Z", "Vitamins", 120_000.0, "Health"),
        expense("2025-02-04T20:00:00Z", "Phone Credit", 100_000.0, "Communication"),
        expense("2025-02-03T18:45:00Z", "Coffee", 25_000.0, "Entertainment"),
        expense("2025-02-02T09:15:00Z", "Grab Transport", 35_000.0, "Transportation"),
    ];
    let anchor = anchor_date(&records).unwrap();
    let series = windowed_series(&records, Window::Day, 7, anchor);

    let labels: Vec<&str> = series.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(labels, vec!["Tue", "Wed", "Thu", "Fri", "Sat", "Sun", "Mon"]);
    // Feb 4 (Tue) is the first day in range; Feb 2 and 3 fall outside
    assert_eq!(series[0].total, 100_000.0);
    assert_eq!(series[1].total, 0.0);
    assert_eq!(series[5].total, 120_000.0);
    assert_eq!(series[6].total, 30_000.0);
    assert_eq!(series.iter().map(|g| g.total).sum::<f64>(), 250_000.0);
}

#[test]
fn test_monthly_window_crosses_year() {
    let records = vec![
        income("2024-11-15T00:00:00Z", "Old", 1.0, "Salary"),
        income("2024-12-01T00:00:00Z", "Dec", 2.0, "Salary"),
        income("2025-02-28T23:00:00Z", "Feb", 3.0, "Salary"),
    ];
    let series = windowed_series(&records, Window::Month, 3, at("2025-02-28T23:00:00Z"));
    let labels: Vec<&str> = series.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(labels, vec!["Dec 24", "Jan 25", "Feb 25"]);
    let totals: Vec<f64> = series.iter().map(|g| g.total).collect();
    assert_eq!(totals, vec![2.0, 0.0, 3.0]);
}

#[test]
fn test_window_zero_count() {
    let series = windowed_series(&dashboard(), Window::Month, 0, at("2025-09-02T00:00:00Z"));
    assert!(series.is_empty());
}

#[test]
fn test_anchor_date_is_max() {
    assert_eq!(anchor_date(&dashboard()), Some(at("2025-09-02T09:15:00Z")));
    assert_eq!(anchor_date(&[]), None);
}

// ── summaries ─────────────────────────────────────────────────

#[test]
fn test_summarize() {
    let metrics = summarize(&food_and_transport(), by_category);
    assert_eq!(metrics.total, 115_000.0);
    assert_eq!(metrics.count, 3);
    assert!((metrics.average - 115_000.0 / 3.0).abs() < 1e-9);
    assert_eq!(metrics.top_key, "Food");
}

#[test]
fn test_summarize_empty() {
    let metrics = summarize(&[], by_category);
    assert_eq!(metrics.total, 0.0);
    assert_eq!(metrics.count, 0);
    assert!(!metrics.average.is_finite());
    assert_eq!(metrics.top_key, NO_KEY);
}

#[test]
fn test_balance_overview_latest_month() {
    let overview = balance_overview(&dashboard());
    assert_eq!(overview.month, "Sep 25");
    assert_eq!(overview.income, 8_500_000.0);
    assert_eq!(overview.expenses, 225_000.0);
    assert_eq!(overview.net, 8_275_000.0);
}

#[test]
fn test_balance_overview_empty() {
    let overview = balance_overview(&[]);
    assert_eq!(overview.income, 0.0);
    assert_eq!(overview.expenses, 0.0);
    assert_eq!(overview.net, 0.0);
}

#[test]
fn test_top_categories() {
    let top = top_categories(&dashboard(), 4);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].key, "Transportation");
    assert!((top[0].percentage - 150.0 / 225.0 * 100.0).abs() < 1e-9);
    assert_eq!(top[1].key, "Food");
}

#[test]
fn test_top_categories_limit_and_empty() {
    assert_eq!(top_categories(&dashboard(), 1).len(), 1);
    assert!(top_categories(&[], 4).is_empty());
}

#[test]
fn test_distribution_percentages_sum_to_100() {
    let shares = distribution(&sum_by_key(&food_and_transport(), by_category));
    let total: f64 = shares.iter().map(|s| s.percentage).sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert!(distribution(&KeyTotals::default()).is_empty());
}

#[test]
fn test_monthly_trend() {
    let trend = monthly_trend(&dashboard(), 6);
    let labels: Vec<&str> = trend.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Apr 25", "May 25", "Jun 25", "Jul 25", "Aug 25", "Sep 25"]);
    assert_eq!(trend[0].income, 7_500_000.0);
    assert_eq!(trend[1].expenses, 450_000.0);
    assert_eq!(trend[2].income, 0.0);
    assert_eq!(trend[4].income, 12_500_000.0);
    assert_eq!(trend[4].expenses, 600_000.0);
    assert!(monthly_trend(&[], 6).is_empty());
}

#[test]
fn test_recent_newest_first() {
    let recent = recent(&dashboard(), 3);
    let titles: Vec<&str> = recent.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(titles, vec!["Train Ticket", "Lunch", "Monthly Salary"]);
}

#[test]
fn test_filter_kind() {
    let incomes = filter_kind(&dashboard(), TransactionKind::Income);
    assert_eq!(incomes.len(), 5);
    assert!(incomes.iter().all(|t| t.is_income()));
}

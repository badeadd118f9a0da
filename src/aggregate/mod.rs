//! Grouping and summarising of transaction slices for the dashboard cards and
//! charts. Everything here is a pure function of its input; the "latest"
//! month or day is always derived from the newest record, never the clock.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc};

use crate::models::{Transaction, TransactionKind};

/// Returned by [`top_key`] when there is nothing to rank.
pub(crate) const NO_KEY: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct KeyTotal {
    pub(crate) key: String,
    pub(crate) total: f64,
}

/// Summed amounts per key, kept in the order keys were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct KeyTotals {
    groups: Vec<KeyTotal>,
}

impl KeyTotals {
    fn add(&mut self, key: &str, amount: f64) {
        match self.groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.total += amount,
            None => self.groups.push(KeyTotal {
                key: key.to_string(),
                total: amount,
            }),
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<f64> {
        self.groups.iter().find(|g| g.key == key).map(|g| g.total)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &KeyTotal> {
        self.groups.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.groups.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub(crate) fn sum(&self) -> f64 {
        self.groups.iter().map(|g| g.total).sum()
    }

    /// Largest total first. Equal totals keep first-seen order.
    pub(crate) fn sorted_desc(&self) -> Vec<KeyTotal> {
        let mut sorted = self.groups.clone();
        sorted.sort_by(|a, b| b.total.total_cmp(&a.total));
        sorted
    }
}

// ── Key functions ─────────────────────────────────────────────

pub(crate) fn by_category(txn: &Transaction) -> Option<String> {
    txn.category.clone()
}

pub(crate) fn by_month(txn: &Transaction) -> Option<String> {
    Some(month_label(txn.date.date_naive()))
}

pub(crate) fn by_weekday(txn: &Transaction) -> Option<String> {
    Some(weekday_label(txn.date.date_naive()))
}

/// `"Sep 25"`
pub(crate) fn month_label(date: NaiveDate) -> String {
    date.format("%b %y").to_string()
}

/// `"Mon"`
pub(crate) fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

// ── Grouping ──────────────────────────────────────────────────

/// Sum amounts per key. Records whose key is missing or empty are left out
/// of the result entirely rather than bucketed.
pub(crate) fn sum_by_key<F>(records: &[Transaction], key_fn: F) -> KeyTotals
where
    F: Fn(&Transaction) -> Option<String>,
{
    let mut totals = KeyTotals::default();
    for txn in records {
        if let Some(key) = key_fn(txn).filter(|k| !k.is_empty()) {
            totals.add(&key, txn.amount);
        }
    }
    totals
}

/// Key with the largest total; the first one seen wins a tie.
pub(crate) fn top_key(totals: &KeyTotals) -> String {
    let mut best: Option<&KeyTotal> = None;
    for group in totals.iter() {
        let better = match best {
            Some(b) => group.total > b.total,
            None => true,
        };
        if better {
            best = Some(group);
        }
    }
    best.map(|g| g.key.clone())
        .unwrap_or_else(|| NO_KEY.to_string())
}

pub(crate) fn anchor_date(records: &[Transaction]) -> Option<DateTime<Utc>> {
    records.iter().map(|t| t.date).max()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Window {
    Day,
    Month,
}

impl Window {
    fn start_of(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Day => date,
            Self::Month => date.with_day(1).unwrap_or(date),
        }
    }

    fn step_back(self, start: NaiveDate, steps: u32) -> Option<NaiveDate> {
        match self {
            Self::Day => start.checked_sub_days(Days::new(u64::from(steps))),
            Self::Month => start.checked_sub_months(Months::new(steps)),
        }
    }

    fn label(self, start: NaiveDate) -> String {
        match self {
            Self::Day => weekday_label(start),
            Self::Month => month_label(start),
        }
    }
}

/// `window_count` consecutive windows ending with the one containing
/// `anchor`, oldest first. Every window is present even when empty; records
/// outside the covered range are ignored.
pub(crate) fn windowed_series(
    records: &[Transaction],
    window: Window,
    window_count: u32,
    anchor: DateTime<Utc>,
) -> Vec<KeyTotal> {
    let last = window.start_of(anchor.date_naive());
    let starts: Vec<NaiveDate> = (0..window_count)
        .rev()
        .filter_map(|i| window.step_back(last, i))
        .collect();

    let mut series: Vec<KeyTotal> = starts
        .iter()
        .map(|s| KeyTotal {
            key: window.label(*s),
            total: 0.0,
        })
        .collect();

    for txn in records {
        let start = window.start_of(txn.date.date_naive());
        if let Some(pos) = starts.iter().position(|s| *s == start) {
            series[pos].total += txn.amount;
        }
    }
    series
}

// ── Summaries ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SummaryMetrics {
    pub(crate) total: f64,
    pub(crate) count: usize,
    /// `total / count`, NaN for an empty input. Callers guard before display.
    pub(crate) average: f64,
    pub(crate) top_key: String,
}

pub(crate) fn summarize<F>(records: &[Transaction], key_fn: F) -> SummaryMetrics
where
    F: Fn(&Transaction) -> Option<String>,
{
    let total: f64 = records.iter().map(|t| t.amount).sum();
    let count = records.len();
    SummaryMetrics {
        total,
        count,
        average: total / count as f64,
        top_key: top_key(&sum_by_key(records, key_fn)),
    }
}

pub(crate) fn filter_kind(records: &[Transaction], kind: TransactionKind) -> Vec<Transaction> {
    records.iter().filter(|t| t.kind == kind).cloned().collect()
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

fn latest_month(records: &[Transaction]) -> Option<(NaiveDate, Vec<&Transaction>)> {
    let anchor = anchor_date(records)?.date_naive();
    let in_month = records
        .iter()
        .filter(|t| same_month(t.date.date_naive(), anchor))
        .collect();
    Some((anchor, in_month))
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BalanceOverview {
    pub(crate) month: String,
    pub(crate) income: f64,
    pub(crate) expenses: f64,
    pub(crate) net: f64,
}

/// Income, expenses and their difference for the newest month in the data.
pub(crate) fn balance_overview(records: &[Transaction]) -> BalanceOverview {
    let Some((anchor, in_month)) = latest_month(records) else {
        return BalanceOverview {
            month: NO_KEY.to_string(),
            income: 0.0,
            expenses: 0.0,
            net: 0.0,
        };
    };
    let income: f64 = in_month
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let expenses: f64 = in_month
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();
    BalanceOverview {
        month: month_label(anchor),
        income,
        expenses,
        net: income - expenses,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryShare {
    pub(crate) key: String,
    pub(crate) total: f64,
    /// 0-100
    pub(crate) percentage: f64,
}

fn share_of(total: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        total / whole * 100.0
    } else {
        0.0
    }
}

/// Each group's part of the sum of all groups, in the order given.
pub(crate) fn distribution(totals: &KeyTotals) -> Vec<CategoryShare> {
    let whole = totals.sum();
    totals
        .iter()
        .map(|g| CategoryShare {
            key: g.key.clone(),
            total: g.total,
            percentage: share_of(g.total, whole),
        })
        .collect()
}

/// Biggest expense categories of the newest month. Percentages are taken
/// against every expense of that month, uncategorised ones included.
pub(crate) fn top_categories(records: &[Transaction], limit: usize) -> Vec<CategoryShare> {
    let Some((_, in_month)) = latest_month(records) else {
        return Vec::new();
    };
    let expenses: Vec<Transaction> = in_month
        .into_iter()
        .filter(|t| t.is_expense())
        .cloned()
        .collect();
    let month_total: f64 = expenses.iter().map(|t| t.amount).sum();

    sum_by_key(&expenses, by_category)
        .sorted_desc()
        .into_iter()
        .take(limit)
        .map(|g| CategoryShare {
            percentage: share_of(g.total, month_total),
            key: g.key,
            total: g.total,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TrendPoint {
    pub(crate) label: String,
    pub(crate) income: f64,
    pub(crate) expenses: f64,
}

/// Income and expenses per month for the last `months` months of the data.
pub(crate) fn monthly_trend(records: &[Transaction], months: u32) -> Vec<TrendPoint> {
    let Some(anchor) = anchor_date(records) else {
        return Vec::new();
    };
    let income = windowed_series(
        &filter_kind(records, TransactionKind::Income),
        Window::Month,
        months,
        anchor,
    );
    let expenses = windowed_series(
        &filter_kind(records, TransactionKind::Expense),
        Window::Month,
        months,
        anchor,
    );
    income
        .into_iter()
        .zip(expenses)
        .map(|(i, e)| TrendPoint {
            label: i.key,
            income: i.total,
            expenses: e.total,
        })
        .collect()
}

/// Newest `limit` records, newest first.
pub(crate) fn recent(records: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests;

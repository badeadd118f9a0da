#![allow(clippy::unwrap_used)]

use chrono::{DateTime, Utc};

use super::*;

fn at(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_income() {
    let txn = Transaction::income(at("2025-02-01T09:00:00Z"), "Monthly Salary", 7_500_000.0, "Salary");
    assert!(txn.is_income());
    assert!(!txn.is_expense());
    assert_eq!(txn.label(), "Salary");
}

#[test]
fn test_expense() {
    let txn = Transaction::expense(at("2025-02-01T12:30:00Z"), "Lunch", 50_000.0, "Food");
    assert!(!txn.is_income());
    assert!(txn.is_expense());
    assert_eq!(txn.category.as_deref(), Some("Food"));
}

#[test]
fn test_empty_category_is_absent() {
    let txn = Transaction::expense(at("2025-02-01T12:30:00Z"), "Lunch", 50_000.0, "");
    assert!(txn.category.is_none());
    assert_eq!(txn.label(), "");
}

#[test]
fn test_signed_amount() {
    let income = Transaction::income(at("2025-02-01T09:00:00Z"), "Gift", 250_000.0, "Gift");
    let expense = Transaction::expense(at("2025-02-01T09:00:00Z"), "Snack", 30_000.0, "Food");
    assert_eq!(income.signed_amount(), 250_000.0);
    assert_eq!(expense.signed_amount(), -30_000.0);
}

// ── TransactionKind ───────────────────────────────────────────

#[test]
fn test_kind_parse() {
    assert_eq!(TransactionKind::parse("income"), Some(TransactionKind::Income));
    assert_eq!(TransactionKind::parse("EXPENSE"), Some(TransactionKind::Expense));
    assert_eq!(TransactionKind::parse(" expense "), Some(TransactionKind::Expense));
    assert_eq!(TransactionKind::parse("transfer"), None);
}

#[test]
fn test_kind_roundtrip() {
    for k in TransactionKind::all() {
        assert_eq!(TransactionKind::parse(k.as_str()), Some(*k), "Roundtrip failed for {k}");
    }
}

#[test]
fn test_kind_display() {
    assert_eq!(format!("{}", TransactionKind::Income), "income");
    assert_eq!(format!("{}", TransactionKind::Expense), "expense");
}

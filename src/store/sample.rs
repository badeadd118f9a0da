use anyhow::Result;

use super::{parse_date, TransactionRepository};
use crate::models::{Transaction, TransactionKind};

use crate::models::TransactionKind::{Expense, Income};

// (kind, date, description, amount, category or income source)
const SAMPLE: &[(TransactionKind, &str, &str, f64, &str)] = &[
    (Expense, "2025-02-01T12:30:00Z", "Lunch", 50_000.0, "Food"),
    (Expense, "2025-02-02T09:15:00Z", "Grab Transport", 35_000.0, "Transportation"),
    (Expense, "2025-02-03T18:45:00Z", "Coffee", 25_000.0, "Entertainment"),
    (Expense, "2025-02-04T20:00:00Z", "Phone Credit", 100_000.0, "Communication"),
    (Expense, "2025-02-05T07:20:00Z", "Electricity Bill", 200_000.0, "Bills"),
    (Expense, "2025-02-06T22:10:00Z", "Netflix", 65_000.0, "Entertainment"),
    (Expense, "2025-02-07T14:00:00Z", "Gasoline", 80_000.0, "Transportation"),
    (Expense, "2025-02-08T10:05:00Z", "Donation", 50_000.0, "Social"),
    (Expense, "2025-02-09T08:50:00Z", "Vitamins", 120_000.0, "Health"),
    (Expense, "2025-02-10T16:40:00Z", "Snack", 30_000.0, "Food"),
    (Expense, "2025-05-11T08:50:00Z", "Doctor Visit", 450_000.0, "Health"),
    (Expense, "2025-06-25T14:00:00Z", "Gasoline", 300_000.0, "Transportation"),
    (Expense, "2025-07-10T22:10:00Z", "Netflix", 165_000.0, "Entertainment"),
    (Expense, "2025-07-30T07:20:00Z", "Groceries", 600_000.0, "Food"),
    (Expense, "2025-08-15T20:00:00Z", "Internet Bill", 350_000.0, "Bills"),
    (Expense, "2025-08-28T18:45:00Z", "Movie Night", 250_000.0, "Entertainment"),
    (Expense, "2025-09-01T12:30:00Z", "Lunch", 75_000.0, "Food"),
    (Expense, "2025-09-02T09:15:00Z", "Train Ticket", 150_000.0, "Transportation"),
    (Income, "2025-02-01T09:00:00Z", "Monthly Salary Feb", 7_500_000.0, "Salary"),
    (Income, "2025-02-05T15:00:00Z", "Web design for Client X", 2_000_000.0, "Freelance Project"),
    (Income, "2025-02-10T11:00:00Z", "Q1 Stock Payout", 500_000.0, "Investment Dividends"),
    (Income, "2025-02-12T18:00:00Z", "Tutoring session", 1_200_000.0, "Side Gig"),
    (Income, "2025-02-15T10:00:00Z", "Birthday gift", 250_000.0, "Gift"),
    (Income, "2025-03-01T09:00:00Z", "Monthly Salary Mar", 7_500_000.0, "Salary"),
    (Income, "2025-04-01T09:00:00Z", "Monthly Salary", 7_500_000.0, "Salary"),
    (Income, "2025-04-15T15:00:00Z", "Project Bonus", 2_500_000.0, "Bonus"),
    (Income, "2025-05-01T09:00:00Z", "Monthly Salary", 7_500_000.0, "Salary"),
    (Income, "2025-05-20T11:00:00Z", "Stock Dividends", 750_000.0, "Investment Dividends"),
    (Income, "2025-06-01T09:00:00Z", "Monthly Salary", 8_000_000.0, "Salary"),
    (Income, "2025-06-18T18:00:00Z", "Side Gig", 1_500_000.0, "Side Gig"),
    (Income, "2025-07-01T09:00:00Z", "Monthly Salary", 8_000_000.0, "Salary"),
    (Income, "2025-08-01T09:00:00Z", "Monthly Salary", 8_000_000.0, "Salary"),
    (Income, "2025-08-25T14:00:00Z", "Freelance Project", 4_500_000.0, "Freelance Project"),
    (Income, "2025-09-01T09:00:00Z", "Monthly Salary", 8_500_000.0, "Salary"),
];

/// Built-in demo data, amounts in rupiah.
pub(crate) struct SampleRepository;

impl TransactionRepository for SampleRepository {
    fn list_transactions(&self) -> Result<Vec<Transaction>> {
        SAMPLE
            .iter()
            .map(|&(kind, date, description, amount, label)| {
                let date = parse_date(date)?;
                Ok(match kind {
                    Income => Transaction::income(date, description, amount, label),
                    Expense => Transaction::expense(date, description, amount, label),
                })
            })
            .collect()
    }

    fn describe(&self) -> String {
        "built-in sample data".into()
    }
}

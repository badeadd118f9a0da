use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn all() -> &'static [TransactionKind] {
        &[Self::Income, Self::Expense]
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single income or expense event.
///
/// `amount` is never negative; the direction of money is carried by `kind`.
/// Expenses keep their spending category in `category`, income records keep
/// their source ("Salary", "Gift") there.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub date: DateTime<Utc>,
    pub description: String,
    pub amount: f64,
    pub category: Option<String>,
}

impl Transaction {
    pub fn income(date: DateTime<Utc>, description: &str, amount: f64, source: &str) -> Self {
        Self {
            kind: TransactionKind::Income,
            date,
            description: description.to_string(),
            amount,
            category: Some(source.to_string()).filter(|s| !s.is_empty()),
        }
    }

    pub fn expense(date: DateTime<Utc>, description: &str, amount: f64, category: &str) -> Self {
        Self {
            kind: TransactionKind::Expense,
            date,
            description: description.to_string(),
            amount,
            category: Some(category.to_string()).filter(|s| !s.is_empty()),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Category (or income source) label; empty when the record has none.
    pub fn label(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Amount with the sign of the money flow: positive for income.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

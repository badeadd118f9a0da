use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{parse_date, TransactionRepository};
use crate::models::{Transaction, TransactionKind};

const HEADER: [&str; 5] = ["kind", "date", "description", "amount", "category"];

/// Transactions read from a CSV file with the columns
/// `kind,date,description,amount,category`. The file is read on every call
/// and never written.
pub(crate) struct CsvRepository {
    path: PathBuf,
}

impl CsvRepository {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TransactionRepository for CsvRepository {
    fn list_transactions(&self) -> Result<Vec<Transaction>> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .with_context(|| format!("Failed to open CSV file: {}", self.path.display()))?;

        let mut txns = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            // Header is line 1
            let line = i + 2;
            let record = result.with_context(|| format!("Failed to read CSV line {line}"))?;
            if record.iter().all(|f| f.is_empty()) {
                continue;
            }
            let txn = parse_row(&record).with_context(|| format!("Line {line}"))?;
            txns.push(txn);
        }

        debug!(path = %self.path.display(), count = txns.len(), "loaded transactions");
        Ok(txns)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn parse_row(record: &csv::StringRecord) -> Result<Transaction> {
    let field = |idx: usize| record.get(idx).unwrap_or("");

    let kind = TransactionKind::parse(field(0)).ok_or_else(|| {
        let known: Vec<&str> = TransactionKind::all().iter().map(|k| k.as_str()).collect();
        anyhow::anyhow!(
            "Unknown transaction kind: '{}' (expected {})",
            field(0),
            known.join(" or ")
        )
    })?;
    let date = parse_date(field(1))?;
    let description = field(2);
    let amount = parse_amount(field(3))?;

    Ok(match kind {
        TransactionKind::Income => Transaction::income(date, description, amount, field(4)),
        TransactionKind::Expense => Transaction::expense(date, description, amount, field(4)),
    })
}

/// Amounts use `.` for decimals. `,` is accepted only as a thousands
/// separator between groups of three digits, so `7,500,000` reads as seven
/// and a half million while `12,50` is rejected instead of becoming 1250.
pub(crate) fn parse_amount(raw: &str) -> Result<f64> {
    let int_part = raw.split('.').next().unwrap_or("");
    if int_part.contains(',') {
        let mut groups = int_part.split(',');
        let lead = groups.next().unwrap_or("");
        let lead_ok = (1..=3).contains(&lead.len()) && lead.bytes().all(|b| b.is_ascii_digit());
        let rest_ok = groups.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()));
        if !(lead_ok && rest_ok) {
            anyhow::bail!(
                "Ambiguous amount '{raw}': use '.' for decimals and ',' only between thousands"
            );
        }
    }
    if raw.split('.').nth(1).is_some_and(|frac| frac.contains(',')) {
        anyhow::bail!("Ambiguous amount '{raw}': ',' after the decimal point");
    }

    let amount: f64 = raw
        .replace(',', "")
        .parse()
        .with_context(|| format!("Invalid amount: '{raw}'"))?;
    if !amount.is_finite() || amount < 0.0 {
        anyhow::bail!("Amount must be a non-negative number, got '{raw}'");
    }
    Ok(amount)
}

/// Write `records` in the format [`CsvRepository`] reads. Returns the number
/// of rows written.
pub(crate) fn export_csv(records: &[Transaction], path: &Path) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    wtr.write_record(HEADER)?;
    for txn in records {
        let date = txn.date.to_rfc3339();
        let amount = txn.amount.to_string();
        wtr.write_record([
            txn.kind.as_str(),
            date.as_str(),
            txn.description.as_str(),
            amount.as_str(),
            txn.label(),
        ])?;
    }
    wtr.flush()
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;
    info!(path = %path.display(), count = records.len(), "exported transactions");
    Ok(records.len())
}

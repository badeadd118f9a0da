mod csv_file;
mod sample;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};

use crate::models::Transaction;

pub(crate) use csv_file::{export_csv, CsvRepository};
pub(crate) use sample::SampleRepository;

/// Source of the transactions the dashboard works on. Aggregation and the
/// table views only ever see the returned `Vec`, so any backend can sit
/// behind this.
pub(crate) trait TransactionRepository {
    fn list_transactions(&self) -> Result<Vec<Transaction>>;

    /// Human readable origin, shown on the settings screen.
    fn describe(&self) -> String;
}

/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates (midnight UTC).
pub(crate) fn parse_date(s: &str) -> Result<DateTime<Utc>> {
    let trimmed = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .with_context(|| format!("Invalid date: '{trimmed}'"))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .with_context(|| format!("Invalid date: '{trimmed}'"))?;
    Ok(midnight.and_utc())
}

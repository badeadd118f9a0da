//! Sort, filter and search state for the transaction tables, and the
//! projection that applies it.

use std::cmp::Ordering;

use crate::models::Transaction;

/// Category filter value that keeps every record.
pub(crate) const ALL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortKey {
    Date,
    Description,
    Amount,
    Category,
}

impl SortKey {
    /// Column order in the tables.
    pub(crate) fn all() -> &'static [SortKey] {
        &[Self::Date, Self::Description, Self::Amount, Self::Category]
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "date" => Some(Self::Date),
            "description" | "title" => Some(Self::Description),
            "amount" => Some(Self::Amount),
            "category" | "source" => Some(Self::Category),
            _ => None,
        }
    }

    pub(crate) fn next(self) -> Self {
        let cols = Self::all();
        let idx = cols.iter().position(|k| *k == self).unwrap_or(0);
        cols[(idx + 1) % cols.len()]
    }

    fn compare(self, a: &Transaction, b: &Transaction) -> Ordering {
        match self {
            Self::Date => a.date.timestamp_millis().cmp(&b.date.timestamp_millis()),
            Self::Description => a.description.cmp(&b.description),
            Self::Amount => a.amount.total_cmp(&b.amount),
            Self::Category => a.label().cmp(b.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub(crate) fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TableViewState {
    pub(crate) sort_key: SortKey,
    pub(crate) sort_order: SortOrder,
    pub(crate) category_filter: String,
    pub(crate) search_text: String,
}

impl Default for TableViewState {
    fn default() -> Self {
        Self {
            sort_key: SortKey::Date,
            sort_order: SortOrder::Descending,
            category_filter: ALL.to_string(),
            search_text: String::new(),
        }
    }
}

impl TableViewState {
    /// Column header click: the active column flips direction, any other
    /// column becomes active in ascending order.
    pub(crate) fn click_header(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_key = key;
            self.sort_order = SortOrder::Ascending;
        }
    }

    /// Step the category filter through `options`, wrapping at both ends.
    /// A filter that is no longer among the options restarts at the first.
    pub(crate) fn cycle_filter(&mut self, options: &[String], forward: bool) {
        if options.is_empty() {
            return;
        }
        let next = match options.iter().position(|o| *o == self.category_filter) {
            Some(idx) if forward => (idx + 1) % options.len(),
            Some(0) => options.len() - 1,
            Some(idx) => idx - 1,
            None => 0,
        };
        self.category_filter = options[next].clone();
    }

    pub(crate) fn is_filtered(&self) -> bool {
        self.category_filter != ALL || !self.search_text.is_empty()
    }
}

/// Filter by category, then by search text, then sort. The sort is stable so
/// records with equal keys keep their input order in either direction.
pub(crate) fn project(records: &[Transaction], state: &TableViewState) -> Vec<Transaction> {
    let needle = state.search_text.to_lowercase();

    let mut rows: Vec<Transaction> = records
        .iter()
        .filter(|t| state.category_filter == ALL || t.label() == state.category_filter)
        .filter(|t| {
            needle.is_empty()
                || t.description.to_lowercase().contains(&needle)
                || t.label().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    rows.sort_by(|a, b| {
        let ord = state.sort_key.compare(a, b);
        match state.sort_order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
    rows
}

/// `"All"` followed by each distinct label in first-seen order.
pub(crate) fn filter_options(records: &[Transaction]) -> Vec<String> {
    let mut options = vec![ALL.to_string()];
    for txn in records {
        let label = txn.label();
        if !label.is_empty() && !options.iter().any(|o| o == label) {
            options.push(label.to_string());
        }
    }
    options
}

#[cfg(test)]
mod tests;
